//! Shared fixtures for unit tests across the engine.

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use crate::blocks::{BlockMetadata, BlockType, ContentBlock, create_empty_block};

/// Create a temporary drafts directory
pub fn create_test_drafts_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// A fixed instant, offset by whole minutes, for deterministic timestamps
pub fn at_minute(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 5, 12, minute, 0).unwrap()
}

/// An empty block of `block_type` with its content and metadata filled in the
/// way the editor would fill them.
pub fn filled_block(block_type: BlockType, content: &str, metadata: BlockMetadata) -> ContentBlock {
    let mut block = create_empty_block(block_type);
    block.content = content.to_string();
    block.metadata = metadata;
    block
}

/// One block of every type, each with content that survives serialization.
pub fn sample_blocks() -> Vec<ContentBlock> {
    vec![
        filled_block(
            BlockType::Heading,
            "Building a portfolio",
            BlockMetadata {
                level: Some(2),
                ..Default::default()
            },
        ),
        filled_block(
            BlockType::Paragraph,
            "First line\nsecond line",
            BlockMetadata::default(),
        ),
        filled_block(
            BlockType::Image,
            "/blog/thumbnails/cover.png",
            BlockMetadata {
                alt: Some("Cover".into()),
                caption: Some("The cover image".into()),
                ..Default::default()
            },
        ),
        filled_block(
            BlockType::Code,
            "fn main() {\n    println!(\"hi\");\n}",
            BlockMetadata {
                language: Some("rust".into()),
                filename: Some("main.rs".into()),
                ..Default::default()
            },
        ),
        filled_block(
            BlockType::Quote,
            "Make it work,\nthen make it right.",
            BlockMetadata {
                author: Some("Kent Beck".into()),
                ..Default::default()
            },
        ),
        filled_block(
            BlockType::List,
            "",
            BlockMetadata {
                items: Some(vec!["alpha".into(), "beta".into()]),
                ..Default::default()
            },
        ),
        filled_block(
            BlockType::Separator,
            "",
            BlockMetadata::default(),
        ),
        filled_block(
            BlockType::NumberedList,
            "",
            BlockMetadata {
                items: Some(vec!["one".into(), "two".into(), "three".into()]),
                ..Default::default()
            },
        ),
        filled_block(
            BlockType::Video,
            "https://example.com/demo.mp4",
            BlockMetadata {
                caption: Some("Demo".into()),
                ..Default::default()
            },
        ),
    ]
}

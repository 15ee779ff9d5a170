//! # Blocks
//!
//! Bidirectional conversion between a flat markdown string (what a blog post
//! persists) and an ordered sequence of typed [`ContentBlock`]s (what the
//! block editor edits).
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (its line form, whether it is a fence
//!    marker, whether it reads as a caption)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps at most one
//!    open block and emits `ContentBlock`s as blocks open and close
//!
//! ## Modules
//!
//! - **`types`**: `ContentBlock`, `BlockType`, `BlockMetadata`, `BlockId`
//! - **`kinds`**: per-syntax knowledge (code fences, lists, quotes, media)
//! - **`classify`**: `MarkdownLineClassifier`
//! - **`builder`**: `BlockBuilder` state machine
//! - **`serialize`**: blocks back to markdown
//! - **`factory`**: empty blocks for new editor content
//!
//! ## Key Invariants
//!
//! - Parsing and serializing never fail; malformed lines fall through to
//!   paragraphs and missing metadata falls back to defaults
//! - A parsed document always has at least one block
//! - `markdown_to_blocks(&blocks_to_markdown(b))` is equivalent to `b`
//!   for blocks that serialize to something non-empty

pub mod builder;
pub mod classify;
pub mod factory;
pub mod kinds;
pub mod serialize;
pub mod types;

#[cfg(test)]
mod tests;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineKind, MarkdownLineClassifier};
pub use factory::create_empty_block;
pub use serialize::{block_to_markdown, blocks_to_markdown};
pub use types::{BlockId, BlockMetadata, BlockType, ContentBlock, UnknownBlockType};

/// Parses markdown into an ordered, non-empty sequence of blocks.
pub fn markdown_to_blocks(markdown: &str) -> Vec<ContentBlock> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in markdown.split('\n') {
        builder.push(&classifier.classify(line));
    }

    let mut blocks = builder.finish();
    if blocks.is_empty() {
        blocks.push(create_empty_block(BlockType::Paragraph));
    }
    log::trace!("parsed {} blocks from {} bytes", blocks.len(), markdown.len());
    blocks
}

//! Whole-document tests for the markdown/block converter.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::blocks::{
    BlockMetadata, BlockType, ContentBlock, blocks_to_markdown, create_empty_block,
    markdown_to_blocks,
};
use crate::tests::{filled_block, sample_blocks};

fn assert_equivalent(expected: &[ContentBlock], actual: &[ContentBlock]) {
    assert_eq!(
        expected.iter().map(|b| b.block_type).collect::<Vec<_>>(),
        actual.iter().map(|b| b.block_type).collect::<Vec<_>>(),
        "block types differ"
    );
    for (e, a) in expected.iter().zip(actual) {
        assert_eq!(e.content, a.content);
        assert_eq!(e.relevant_metadata(), a.relevant_metadata());
        assert!(e.is_equivalent(a));
    }
}

#[test]
fn crlf_input_parses_like_lf() {
    let lf = markdown_to_blocks("# Title\n\nline one\nline two\n\n---\n\n```rust\nfn main() {}\n```\n");
    let crlf = markdown_to_blocks(
        "# Title\r\n\r\nline one\r\nline two\r\n\r\n---\r\n\r\n```rust\r\nfn main() {}\r\n```\r\n",
    );
    assert_equivalent(&lf, &crlf);
    assert_eq!(crlf[1].content, "line one\nline two");
    assert_eq!(crlf[3].filename(), Some("rust"));
}

#[test]
fn heading_round_trip() {
    let blocks = markdown_to_blocks("# Title\n\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].block_type, BlockType::Heading);
    assert_eq!(blocks[0].metadata.level, Some(1));
    assert_eq!(blocks[0].content, "Title");
    assert_eq!(blocks_to_markdown(&blocks), "# Title\n\n");
}

#[test]
fn consecutive_list_items_form_one_block() {
    let blocks = markdown_to_blocks("- a\n- b\n- c\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].block_type, BlockType::List);
    assert_eq!(blocks[0].items(), ["a", "b", "c"]);
}

#[test]
fn code_block_with_tagged_filename() {
    let blocks = markdown_to_blocks("```javascript:app.js\nconsole.log(1)\n```\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].block_type, BlockType::Code);
    assert_eq!(blocks[0].content, "console.log(1)");
    assert_eq!(blocks[0].metadata.filename.as_deref(), Some("app.js"));
    assert_eq!(blocks[0].code_language(), "javascript");

    let markdown = blocks_to_markdown(&blocks);
    assert_eq!(markdown, "```javascript:app.js\nconsole.log(1)\n```\n\n");
    assert_equivalent(&blocks, &markdown_to_blocks(&markdown));
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("   \n\t\n")]
fn empty_input_yields_one_empty_paragraph(#[case] markdown: &str) {
    let blocks = markdown_to_blocks(markdown);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].block_type, BlockType::Paragraph);
    assert_eq!(blocks[0].content, "");
}

#[test]
fn image_caption_is_consumed() {
    let blocks = markdown_to_blocks("![alt](u.png)\n*caption text*\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].block_type, BlockType::Image);
    assert_eq!(blocks[0].content, "u.png");
    assert_eq!(blocks[0].metadata.alt.as_deref(), Some("alt"));
    assert_eq!(blocks[0].metadata.caption.as_deref(), Some("caption text"));
}

#[test]
fn sample_document_round_trips() {
    let blocks = sample_blocks();
    let reparsed = markdown_to_blocks(&blocks_to_markdown(&blocks));
    assert_equivalent(&blocks, &reparsed);
}

#[test]
fn round_trip_is_stable_after_the_first_pass() {
    let first = blocks_to_markdown(&sample_blocks());
    let second = blocks_to_markdown(&markdown_to_blocks(&first));
    assert_eq!(first, second);
}

#[rstest]
fn single_block_round_trips(#[values(0, 1, 2, 3, 4, 5, 6, 7, 8)] index: usize) {
    let block = sample_blocks().swap_remove(index);
    let reparsed = markdown_to_blocks(&blocks_to_markdown(std::slice::from_ref(&block)));
    assert_equivalent(&[block], &reparsed);
}

#[rstest]
#[case::bare_language("", "rust")]
#[case::bare_filename("", "main.rs")]
#[case::language_only("python", "")]
#[case::both("typescript", "index.ts")]
#[case::same("go", "go")]
#[case::spaced_filename("python", "my script.py")]
#[case::spaced_bare_filename("", "build notes.sh")]
fn code_tags_round_trip(#[case] language: &str, #[case] filename: &str) {
    let block = filled_block(
        BlockType::Code,
        "x = 1",
        BlockMetadata {
            language: Some(language.into()),
            filename: Some(filename.into()),
            ..Default::default()
        },
    );
    let reparsed = markdown_to_blocks(&blocks_to_markdown(std::slice::from_ref(&block)));
    assert_equivalent(&[block], &reparsed);
}

#[test]
fn factory_blocks_that_serialize_to_text_round_trip() {
    // Empty paragraphs and item-less lists serialize to blank lines and are
    // not expected to survive; everything else is.
    let blocks: Vec<ContentBlock> = [
        BlockType::Heading,
        BlockType::Code,
        BlockType::Quote,
        BlockType::Video,
        BlockType::Separator,
    ]
    .into_iter()
    .map(create_empty_block)
    .collect();
    let reparsed = markdown_to_blocks(&blocks_to_markdown(&blocks));
    assert_equivalent(&blocks, &reparsed);
}

#[test]
fn blank_only_blocks_collapse_to_minimum_document() {
    let blocks = vec![
        create_empty_block(BlockType::Paragraph),
        create_empty_block(BlockType::List),
    ];
    let reparsed = markdown_to_blocks(&blocks_to_markdown(&blocks));
    assert_eq!(reparsed.len(), 1);
    assert_eq!(reparsed[0].block_type, BlockType::Paragraph);
    assert_eq!(reparsed[0].content, "");
}

#[test]
fn adjacent_lists_of_the_same_kind_merge() {
    // Lists stay open across blank lines, so two bullet lists separated only
    // by the serializer's blank line come back as one.
    let list = |items: &[&str]| {
        filled_block(
            BlockType::List,
            "",
            BlockMetadata {
                items: Some(items.iter().map(|s| s.to_string()).collect()),
                ..Default::default()
            },
        )
    };
    let markdown = blocks_to_markdown(&[list(&["a", "b"]), list(&["c"])]);
    let reparsed = markdown_to_blocks(&markdown);
    assert_eq!(reparsed.len(), 1);
    assert_eq!(reparsed[0].items(), ["a", "b", "c"]);
}

#[test]
fn empty_alt_comes_back_as_default() {
    let image = create_empty_block(BlockType::Image);
    let reparsed = markdown_to_blocks(&blocks_to_markdown(&[image]));
    assert_eq!(reparsed[0].alt(), Some("Image"));
}

#[test]
fn malformed_lines_fall_through_to_paragraphs() {
    let blocks = markdown_to_blocks("#nospace\n![broken(link\n>tight\n");
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].block_type, BlockType::Paragraph);
    assert_eq!(blocks[0].content, "#nospace\n![broken(link\n>tight");
}

#[test]
fn parsed_ids_are_unique() {
    let blocks = markdown_to_blocks("# a\n\nb\n\n---\n\n> c\n");
    let mut ids: Vec<_> = blocks.iter().map(|b| b.id.clone()).collect();
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    ids.dedup();
    assert_eq!(ids.len(), blocks.len());
}

#[test]
fn blog_post_document_parses_into_expected_blocks() {
    let markdown = "\n## Chill, it's a common issue\n\n> The solution is simple as flipping your head up and down\n\n1. Search for the right post.\n2. Open the right link.\n3. Or, simply just go back to the homepage.\n\nWhat are you searching for btw?\n";
    let blocks = markdown_to_blocks(markdown);
    let summary: Vec<String> = blocks
        .iter()
        .map(|b| format!("{}: {:?} {:?}", b.block_type, b.content, b.items()))
        .collect();
    assert_snapshot!(summary.join("\n"), @r#"
    heading: "Chill, it's a common issue" []
    quote: "The solution is simple as flipping your head up and down" []
    numbered-list: "" ["Search for the right post.", "Open the right link.", "Or, simply just go back to the homepage."]
    paragraph: "What are you searching for btw?" []
    "#);
}

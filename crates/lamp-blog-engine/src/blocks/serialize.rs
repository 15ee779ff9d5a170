use super::{
    kinds::{Caption, CodeFence, Image, ListKind, Quote, Video},
    types::{BlockType, ContentBlock},
};

/// Serializes blocks to markdown, in order.
pub fn blocks_to_markdown(blocks: &[ContentBlock]) -> String {
    blocks.iter().map(block_to_markdown).collect()
}

/// Serializes one block, including the blank line that separates it from the
/// next one.
pub fn block_to_markdown(block: &ContentBlock) -> String {
    match block.block_type {
        BlockType::Paragraph => format!("{}\n\n", block.content),
        BlockType::Heading => format!(
            "{} {}\n\n",
            "#".repeat(usize::from(block.heading_level())),
            block.content
        ),
        BlockType::Image => with_caption(
            Image::render(block.alt(), &block.content),
            block.caption(),
        ),
        BlockType::Video => with_caption(Video::render(&block.content), block.caption()),
        BlockType::Code => {
            let tag = CodeFence::render_tag(
                block.metadata.language.as_deref().unwrap_or_default(),
                block.filename().unwrap_or_default(),
            );
            format!(
                "{fence}{tag}\n{}\n{fence}\n\n",
                block.content,
                fence = CodeFence::BACKTICKS
            )
        }
        BlockType::Quote => format!("{}\n", Quote::render(&block.content, block.author())),
        BlockType::List => list(ListKind::Bullet, block),
        BlockType::NumberedList => list(ListKind::Numbered, block),
        BlockType::Separator => "---\n\n".to_string(),
    }
}

fn with_caption(line: String, caption: Option<&str>) -> String {
    match caption {
        Some(caption) => format!("{line}\n{}\n\n", Caption::render(caption)),
        None => format!("{line}\n\n"),
    }
}

fn list(kind: ListKind, block: &ContentBlock) -> String {
    if block.metadata.items.is_none() {
        return "\n".to_string();
    }
    format!("{}\n\n", kind.render_items(block.items()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::types::BlockMetadata;
    use pretty_assertions::assert_eq;

    fn block(block_type: BlockType, content: &str, metadata: BlockMetadata) -> ContentBlock {
        ContentBlock::new(block_type, content, metadata)
    }

    #[test]
    fn paragraph() {
        let b = block(BlockType::Paragraph, "Hello\nworld", BlockMetadata::default());
        assert_eq!(block_to_markdown(&b), "Hello\nworld\n\n");
    }

    #[test]
    fn heading_without_level_defaults_to_h1() {
        let b = block(BlockType::Heading, "Title", BlockMetadata::default());
        assert_eq!(block_to_markdown(&b), "# Title\n\n");
    }

    #[test]
    fn heading_level_three() {
        let b = block(
            BlockType::Heading,
            "Sub",
            BlockMetadata {
                level: Some(3),
                ..Default::default()
            },
        );
        assert_eq!(block_to_markdown(&b), "### Sub\n\n");
    }

    #[test]
    fn image_with_caption() {
        let b = block(
            BlockType::Image,
            "/img/cat.png",
            BlockMetadata {
                alt: Some("cat".into()),
                caption: Some("A cat".into()),
                ..Default::default()
            },
        );
        assert_eq!(block_to_markdown(&b), "![cat](/img/cat.png)\n*A cat*\n\n");
    }

    #[test]
    fn image_without_alt_or_caption() {
        let b = block(BlockType::Image, "u.png", BlockMetadata::default());
        assert_eq!(block_to_markdown(&b), "![Image](u.png)\n\n");
    }

    #[test]
    fn video_with_caption() {
        let b = block(
            BlockType::Video,
            "https://youtu.be/x",
            BlockMetadata {
                caption: Some("Talk".into()),
                ..Default::default()
            },
        );
        assert_eq!(block_to_markdown(&b), "[Video](https://youtu.be/x)\n*Talk*\n\n");
    }

    #[test]
    fn code_with_language_and_filename() {
        let b = block(
            BlockType::Code,
            "console.log(1)",
            BlockMetadata {
                language: Some("javascript".into()),
                filename: Some("app.js".into()),
                ..Default::default()
            },
        );
        assert_eq!(
            block_to_markdown(&b),
            "```javascript:app.js\nconsole.log(1)\n```\n\n"
        );
    }

    #[test]
    fn code_without_metadata() {
        let b = block(BlockType::Code, "x", BlockMetadata::default());
        assert_eq!(block_to_markdown(&b), "```\nx\n```\n\n");
    }

    #[test]
    fn quote_with_author() {
        let b = block(
            BlockType::Quote,
            "Talk is cheap.",
            BlockMetadata {
                author: Some("Linus".into()),
                ..Default::default()
            },
        );
        assert_eq!(
            block_to_markdown(&b),
            "> Talk is cheap.\n> \n> — Linus\n\n"
        );
    }

    #[test]
    fn quote_with_empty_author_omits_trailer() {
        let b = block(
            BlockType::Quote,
            "a\nb",
            BlockMetadata {
                author: Some(String::new()),
                ..Default::default()
            },
        );
        assert_eq!(block_to_markdown(&b), "> a\n> b\n\n");
    }

    #[test]
    fn lists() {
        let items = BlockMetadata {
            items: Some(vec!["a".into(), "".into(), "b".into()]),
            ..Default::default()
        };
        let bullet = block(BlockType::List, "", items.clone());
        let numbered = block(BlockType::NumberedList, "", items);
        assert_eq!(block_to_markdown(&bullet), "- a\n- b\n\n");
        assert_eq!(block_to_markdown(&numbered), "1. a\n2. b\n\n");
    }

    #[test]
    fn list_without_items_is_a_bare_newline() {
        let b = block(BlockType::List, "", BlockMetadata::default());
        assert_eq!(block_to_markdown(&b), "\n");
    }

    #[test]
    fn separator() {
        let b = block(BlockType::Separator, "", BlockMetadata::default());
        assert_eq!(block_to_markdown(&b), "---\n\n");
    }

    #[test]
    fn sequence_is_concatenated_in_order() {
        let blocks = vec![
            block(BlockType::Heading, "T", BlockMetadata::default()),
            block(BlockType::Separator, "", BlockMetadata::default()),
            block(BlockType::Paragraph, "p", BlockMetadata::default()),
        ];
        assert_eq!(blocks_to_markdown(&blocks), "# T\n\n---\n\np\n\n");
    }
}

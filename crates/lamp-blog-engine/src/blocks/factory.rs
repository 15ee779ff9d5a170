use super::types::{BlockMetadata, BlockType, ContentBlock};

/// A new block of the given type with a fresh id, empty content and the
/// minimal metadata that type needs.
pub fn create_empty_block(block_type: BlockType) -> ContentBlock {
    let metadata = match block_type {
        BlockType::Heading => BlockMetadata {
            level: Some(1),
            ..Default::default()
        },
        BlockType::List | BlockType::NumberedList => BlockMetadata {
            items: Some(vec![String::new()]),
            ..Default::default()
        },
        BlockType::Code => BlockMetadata {
            language: Some(String::new()),
            filename: Some(String::new()),
            ..Default::default()
        },
        BlockType::Image => BlockMetadata {
            alt: Some(String::new()),
            caption: Some(String::new()),
            ..Default::default()
        },
        BlockType::Video => BlockMetadata {
            caption: Some(String::new()),
            ..Default::default()
        },
        BlockType::Quote => BlockMetadata {
            author: Some(String::new()),
            ..Default::default()
        },
        BlockType::Paragraph | BlockType::Separator => BlockMetadata::default(),
    };
    ContentBlock::new(block_type, "", metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn every_type_starts_empty(
        #[values(
            BlockType::Paragraph,
            BlockType::Heading,
            BlockType::Image,
            BlockType::Code,
            BlockType::Quote,
            BlockType::List,
            BlockType::NumberedList,
            BlockType::Video,
            BlockType::Separator
        )]
        block_type: BlockType,
    ) {
        let block = create_empty_block(block_type);
        assert_eq!(block.block_type, block_type);
        assert_eq!(block.content, "");
    }

    #[test]
    fn heading_starts_at_level_one() {
        assert_eq!(create_empty_block(BlockType::Heading).metadata.level, Some(1));
    }

    #[test]
    fn lists_start_with_one_blank_item() {
        let block = create_empty_block(BlockType::NumberedList);
        assert_eq!(block.items(), [""]);
    }

    #[test]
    fn code_starts_without_filename() {
        let block = create_empty_block(BlockType::Code);
        assert_eq!(block.metadata.filename.as_deref(), Some(""));
        assert_eq!(block.code_language(), "text");
    }

    #[test]
    fn ids_are_fresh() {
        let a = create_empty_block(BlockType::Paragraph);
        let b = create_empty_block(BlockType::Paragraph);
        assert_ne!(a.id, b.id);
    }
}

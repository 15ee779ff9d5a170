use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::language::language_from_filename;

use super::kinds::CodeFence;

/// Identifier of a block within an editing session.
///
/// Freshly created blocks get `block-<uuid>`; ids read back from JSON are kept
/// verbatim so an editor can round-trip its own ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new() -> Self {
        Self(format!("block-{}", Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The kind of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    Paragraph,
    Heading,
    Image,
    Code,
    Quote,
    List,
    NumberedList,
    Video,
    Separator,
}

impl BlockType {
    pub const ALL: [BlockType; 9] = [
        BlockType::Paragraph,
        BlockType::Heading,
        BlockType::Image,
        BlockType::Code,
        BlockType::Quote,
        BlockType::List,
        BlockType::NumberedList,
        BlockType::Video,
        BlockType::Separator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading => "heading",
            BlockType::Image => "image",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::List => "list",
            BlockType::NumberedList => "numbered-list",
            BlockType::Video => "video",
            BlockType::Separator => "separator",
        }
    }

    /// Whether this is one of the two list kinds (bulleted or numbered).
    pub fn is_list(&self) -> bool {
        matches!(self, BlockType::List | BlockType::NumberedList)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown block type: {0}")]
pub struct UnknownBlockType(pub String);

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}

/// Type-dependent optional attributes of a block.
///
/// Every field is optional; readers go through the accessors on
/// [`ContentBlock`], which substitute defaults for anything missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMetadata {
    /// Heading level, 1-6.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    /// Code block language identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Code block filename (or bare language tag).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Image/video caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// List entries, in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
    /// Quote attribution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// One discrete, typed unit of editable content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub metadata: BlockMetadata,
}

impl ContentBlock {
    /// Create a block with a fresh id.
    pub fn new(block_type: BlockType, content: impl Into<String>, metadata: BlockMetadata) -> Self {
        Self {
            id: BlockId::new(),
            block_type,
            content: content.into(),
            metadata,
        }
    }

    /// Heading level, defaulting to 1 and clamped to 1-6.
    pub fn heading_level(&self) -> u8 {
        self.metadata.level.map(|l| l.clamp(1, 6)).unwrap_or(1)
    }

    /// List entries; empty when the block carries none.
    pub fn items(&self) -> &[String] {
        self.metadata.items.as_deref().unwrap_or(&[])
    }

    pub fn alt(&self) -> Option<&str> {
        non_empty(&self.metadata.alt)
    }

    pub fn caption(&self) -> Option<&str> {
        non_empty(&self.metadata.caption)
    }

    pub fn author(&self) -> Option<&str> {
        non_empty(&self.metadata.author)
    }

    pub fn filename(&self) -> Option<&str> {
        non_empty(&self.metadata.filename)
    }

    /// The language a code block should be highlighted as.
    ///
    /// Explicit `language` metadata wins; otherwise it is derived from the
    /// filename (which may itself be a bare language name).
    pub fn code_language(&self) -> String {
        match non_empty(&self.metadata.language) {
            Some(language) => language.to_string(),
            None => language_from_filename(self.filename().unwrap_or_default()),
        }
    }

    /// The subset of metadata that matters for this block's type, normalized
    /// so absent and empty values compare equal.
    pub fn relevant_metadata(&self) -> BlockMetadata {
        let owned = |v: Option<&str>| v.map(str::to_string);
        match self.block_type {
            BlockType::Heading => BlockMetadata {
                level: Some(self.heading_level()),
                ..Default::default()
            },
            BlockType::Code => {
                // Compare what the fence tag would say, not how it was entered.
                let tag = CodeFence::render_tag(
                    non_empty(&self.metadata.language).unwrap_or_default(),
                    self.filename().unwrap_or_default(),
                );
                let (language, filename) = CodeFence::split_tag(&tag);
                BlockMetadata {
                    language: owned(Some(language).filter(|s| !s.is_empty())),
                    filename: owned(Some(filename).filter(|s| !s.is_empty())),
                    ..Default::default()
                }
            }
            BlockType::Image => BlockMetadata {
                alt: owned(self.alt()),
                caption: owned(self.caption()),
                ..Default::default()
            },
            BlockType::Video => BlockMetadata {
                caption: owned(self.caption()),
                ..Default::default()
            },
            BlockType::Quote => BlockMetadata {
                author: owned(self.author()),
                ..Default::default()
            },
            BlockType::List | BlockType::NumberedList => BlockMetadata {
                items: Some(
                    self.items()
                        .iter()
                        .filter(|item| !item.trim().is_empty())
                        .map(|item| item.trim_start().to_string())
                        .collect(),
                ),
                ..Default::default()
            },
            BlockType::Paragraph | BlockType::Separator => BlockMetadata::default(),
        }
    }

    /// Same type, content and relevant metadata. Ids are ignored.
    pub fn is_equivalent(&self, other: &ContentBlock) -> bool {
        self.block_type == other.block_type
            && self.content == other.content
            && self.relevant_metadata() == other.relevant_metadata()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(BlockType::Paragraph, "paragraph")]
    #[case(BlockType::NumberedList, "numbered-list")]
    #[case(BlockType::Separator, "separator")]
    fn block_type_names(#[case] block_type: BlockType, #[case] name: &str) {
        assert_eq!(block_type.as_str(), name);
        assert_eq!(name.parse::<BlockType>().unwrap(), block_type);
        assert_eq!(
            serde_json::to_string(&block_type).unwrap(),
            format!("\"{name}\"")
        );
    }

    #[test]
    fn unknown_block_type_is_rejected() {
        let err = "table".parse::<BlockType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown block type: table");
    }

    #[test]
    fn fresh_ids_are_unique() {
        let a = BlockId::new();
        let b = BlockId::new();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("block-"));
    }

    #[rstest]
    #[case(None, 1)]
    #[case(Some(0), 1)]
    #[case(Some(3), 3)]
    #[case(Some(9), 6)]
    fn heading_level_defaults_and_clamps(#[case] level: Option<u8>, #[case] expected: u8) {
        let block = ContentBlock::new(
            BlockType::Heading,
            "Title",
            BlockMetadata {
                level,
                ..Default::default()
            },
        );
        assert_eq!(block.heading_level(), expected);
    }

    #[test]
    fn code_language_prefers_explicit_metadata() {
        let block = ContentBlock::new(
            BlockType::Code,
            "",
            BlockMetadata {
                language: Some("typescript".into()),
                filename: Some("main.rs".into()),
                ..Default::default()
            },
        );
        assert_eq!(block.code_language(), "typescript");
    }

    #[test]
    fn code_language_falls_back_to_filename() {
        let block = ContentBlock::new(
            BlockType::Code,
            "",
            BlockMetadata {
                language: Some(String::new()),
                filename: Some("main.rs".into()),
                ..Default::default()
            },
        );
        assert_eq!(block.code_language(), "rust");
    }

    #[test]
    fn equivalence_ignores_ids_and_irrelevant_metadata() {
        let a = ContentBlock::new(
            BlockType::Paragraph,
            "text",
            BlockMetadata {
                level: Some(2),
                ..Default::default()
            },
        );
        let b = ContentBlock::new(BlockType::Paragraph, "text", BlockMetadata::default());
        assert!(a.is_equivalent(&b));
    }

    #[test]
    fn equivalence_treats_empty_caption_as_absent() {
        let a = ContentBlock::new(
            BlockType::Image,
            "u.png",
            BlockMetadata {
                alt: Some("alt".into()),
                caption: Some(String::new()),
                ..Default::default()
            },
        );
        let b = ContentBlock::new(
            BlockType::Image,
            "u.png",
            BlockMetadata {
                alt: Some("alt".into()),
                ..Default::default()
            },
        );
        assert!(a.is_equivalent(&b));
    }

    #[test]
    fn equivalence_compares_list_items() {
        let list = |items: &[&str]| {
            ContentBlock::new(
                BlockType::List,
                "",
                BlockMetadata {
                    items: Some(items.iter().map(|s| s.to_string()).collect()),
                    ..Default::default()
                },
            )
        };
        assert!(list(&["a", "", "b"]).is_equivalent(&list(&["a", "b"])));
        assert!(!list(&["a", "b"]).is_equivalent(&list(&["b", "a"])));
    }

    #[test]
    fn json_shape_uses_type_key_and_omits_absent_metadata() {
        let block = ContentBlock {
            id: BlockId::from("block-1"),
            block_type: BlockType::Heading,
            content: "Title".into(),
            metadata: BlockMetadata {
                level: Some(2),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "block-1",
                "type": "heading",
                "content": "Title",
                "metadata": { "level": 2 }
            })
        );
    }

    #[test]
    fn json_without_metadata_deserializes() {
        let block: ContentBlock =
            serde_json::from_str(r#"{"id":"b","type":"separator"}"#).unwrap();
        assert_eq!(block.block_type, BlockType::Separator);
        assert_eq!(block.content, "");
        assert_eq!(block.metadata, BlockMetadata::default());
    }
}

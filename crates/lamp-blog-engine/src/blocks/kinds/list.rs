use std::sync::LazyLock;

use regex::Regex;

use crate::blocks::BlockType;

static BULLET_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+(.*)$").expect("valid bullet regex"));
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s+(.*)$").expect("valid numbered regex"));

/// Which of the two list flavours a list item line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `-`, `*` or `+` markers.
    Bullet,
    /// `1.`, `2.`, ... markers.
    Numbered,
}

impl ListKind {
    /// Parses a list item line into its kind and item text.
    pub fn parse_item(line: &str) -> Option<(ListKind, &str)> {
        if let Some(caps) = BULLET_ITEM.captures(line) {
            return caps.get(1).map(|m| (ListKind::Bullet, m.as_str()));
        }
        NUMBERED_ITEM
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| (ListKind::Numbered, m.as_str()))
    }

    pub fn block_type(self) -> BlockType {
        match self {
            ListKind::Bullet => BlockType::List,
            ListKind::Numbered => BlockType::NumberedList,
        }
    }

    /// Renders the non-blank items, one per line, without a trailing newline.
    pub fn render_items(self, items: &[String]) -> String {
        items
            .iter()
            .filter(|item| !item.trim().is_empty())
            .enumerate()
            .map(|(index, item)| match self {
                ListKind::Bullet => format!("- {item}"),
                ListKind::Numbered => format!("{}. {item}", index + 1),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

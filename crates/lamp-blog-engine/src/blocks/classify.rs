use std::sync::LazyLock;

use regex::Regex;

use super::kinds::{Caption, CodeFence, Image, ListKind, Quote, Video};

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("valid heading regex"));

/// What a line opens or continues, decided from the line alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Heading { level: u8, text: String },
    FenceOpen { tag: String },
    Image { alt: String, url: String },
    Video { url: String },
    ListItem { kind: ListKind, text: String },
    Quote { text: String },
    Separator,
    Blank,
    Text,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. The builder decides what the
/// facts mean given the block that is currently open.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// The raw line, without its trailing `\n`.
    pub text: String,
    /// The first matching line form, in precedence order.
    pub kind: LineKind,
    /// Whether the line starts with a fence marker (closes an open fence).
    pub is_fence_marker: bool,
    /// Caption text if the line is wrapped in single asterisks.
    pub caption: Option<String>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`]. A trailing `\r` from CRLF
    /// input is not part of the line.
    pub fn classify(&self, line: &str) -> LineClass {
        let line = line.trim_end_matches(['\r', '\n']);
        LineClass {
            text: line.to_string(),
            kind: Self::kind(line),
            is_fence_marker: CodeFence::is_marker(line),
            caption: Caption::parse(line).map(str::to_string),
        }
    }

    fn kind(line: &str) -> LineKind {
        if let Some(caps) = HEADING.captures(line) {
            let level = caps.get(1).map_or(1, |m| m.as_str().len()) as u8;
            let text = caps.get(2).map_or("", |m| m.as_str()).to_string();
            return LineKind::Heading { level, text };
        }
        if let Some(tag) = CodeFence::open_tag(line) {
            return LineKind::FenceOpen {
                tag: tag.to_string(),
            };
        }
        if let Some((alt, url)) = Image::parse(line) {
            return LineKind::Image {
                alt: alt.to_string(),
                url: url.to_string(),
            };
        }
        if let Some(url) = Video::parse(line) {
            return LineKind::Video {
                url: url.to_string(),
            };
        }
        if let Some((kind, text)) = ListKind::parse_item(line) {
            return LineKind::ListItem {
                kind,
                text: text.to_string(),
            };
        }
        if let Some(text) = Quote::strip_prefix(line) {
            return LineKind::Quote {
                text: text.to_string(),
            };
        }
        let trimmed = line.trim();
        if trimmed == "---" {
            return LineKind::Separator;
        }
        if trimmed.is_empty() {
            return LineKind::Blank;
        }
        LineKind::Text
    }
}

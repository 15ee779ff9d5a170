use std::sync::LazyLock;

use regex::Regex;

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[(.*?)\]\((.*?)\)").expect("valid image regex"));
static VIDEO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[Video\]\((.*?)\)").expect("valid video regex"));
static CAPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*.*\*$").expect("valid caption regex"));

/// `![alt](url)` at the start of a line.
pub struct Image;

impl Image {
    pub const DEFAULT_ALT: &'static str = "Image";

    /// Returns `(alt, url)`.
    pub fn parse(line: &str) -> Option<(&str, &str)> {
        let caps = IMAGE.captures(line)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }

    pub fn render(alt: Option<&str>, url: &str) -> String {
        format!("![{}]({url})", alt.unwrap_or(Self::DEFAULT_ALT))
    }
}

/// `[Video](url)` at the start of a line.
pub struct Video;

impl Video {
    pub fn parse(line: &str) -> Option<&str> {
        Some(VIDEO.captures(line)?.get(1)?.as_str())
    }

    pub fn render(url: &str) -> String {
        format!("[Video]({url})")
    }
}

/// A line wrapped in single asterisks directly below an image or video.
pub struct Caption;

impl Caption {
    pub fn parse(line: &str) -> Option<&str> {
        if !CAPTION.is_match(line) {
            return None;
        }
        let inner = line.strip_prefix('*').unwrap_or(line);
        Some(inner.strip_suffix('*').unwrap_or(inner))
    }

    pub fn render(caption: &str) -> String {
        format!("*{caption}*")
    }
}

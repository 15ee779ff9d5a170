/// Fenced code block syntax.
///
/// Fences are raw zones: once open, every line is taken verbatim until a line
/// that starts with the fence marker again.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether the line opens or closes a fence.
    pub fn is_marker(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }

    /// The info tag of an opening fence line: everything after the marker,
    /// trimmed. Filenames may contain spaces.
    pub fn open_tag(line: &str) -> Option<&str> {
        Some(line.strip_prefix(Self::BACKTICKS)?.trim())
    }

    /// Splits a fence tag into `(language, filename)`.
    ///
    /// `javascript:app.js` names both; a bare tag is a filename (or a bare
    /// language name standing in for one) and leaves the language empty.
    pub fn split_tag(tag: &str) -> (&str, &str) {
        match tag.split_once(':') {
            Some((language, filename)) => (language, filename),
            None => ("", tag),
        }
    }

    /// Builds the fence tag for a code block.
    ///
    /// The filename alone is enough when it already denotes the language;
    /// otherwise both are written as `language:filename`.
    pub fn render_tag(language: &str, filename: &str) -> String {
        if filename.is_empty() {
            language.to_string()
        } else if language.is_empty() || language == filename {
            filename.to_string()
        } else {
            format!("{language}:{filename}")
        }
    }
}

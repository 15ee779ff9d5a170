/// Blockquote syntax, including the attribution trailer.
///
/// An attributed quote is written as its lines followed by an empty quote
/// line and `> — author`.
pub struct Quote;

impl Quote {
    pub const PREFIX: &'static str = "> ";
    pub const AUTHOR_MARK: &'static str = "— ";

    /// The text after the `> ` prefix, if the line is a quote line.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX)
    }

    /// Separates a trailing attribution from accumulated quote text.
    pub fn split_author(text: &str) -> (String, Option<String>) {
        let lines: Vec<&str> = text.split('\n').collect();
        if let [body @ .., "", last] = lines.as_slice()
            && let Some(author) = last.strip_prefix(Self::AUTHOR_MARK)
        {
            return (body.join("\n"), Some(author.to_string()));
        }
        (text.to_string(), None)
    }

    /// Renders quote text and optional author, each line newline-terminated.
    pub fn render(text: &str, author: Option<&str>) -> String {
        let mut out: String = text
            .split('\n')
            .map(|line| format!("{}{line}\n", Self::PREFIX))
            .collect();
        if let Some(author) = author {
            out.push_str(Self::PREFIX);
            out.push('\n');
            out.push_str(&format!("{}{}{author}\n", Self::PREFIX, Self::AUTHOR_MARK));
        }
        out
    }
}

//! Highlighting language lookup for code blocks.
//!
//! A code block's tag is either a bare language name (`ts`, `shell`) or a
//! filename (`main.rs`). Both resolve to the same canonical language names.

/// Language for a bare name, used when the input has no `.`.
fn alias(name: &str) -> Option<&'static str> {
    Some(match name {
        "js" | "javascript" => "javascript",
        "ts" | "typescript" => "typescript",
        "py" | "python" => "python",
        "java" => "java",
        "cpp" | "c++" => "cpp",
        "c" => "c",
        "cs" | "csharp" | "c#" => "csharp",
        "php" => "php",
        "rb" | "ruby" => "ruby",
        "go" => "go",
        "rust" => "rust",
        "swift" => "swift",
        "dart" => "dart",
        "bash" | "shell" | "sh" => "bash",
        "html" => "html",
        "css" => "css",
        "scss" => "scss",
        "sass" => "sass",
        "json" => "json",
        "xml" => "xml",
        "yaml" | "yml" => "yaml",
        "sql" => "sql",
        "markdown" | "md" => "markdown",
        _ => return None,
    })
}

/// Language for a file extension (already lowercased).
fn extension(ext: &str) -> Option<&'static str> {
    Some(match ext {
        "js" => "javascript",
        "jsx" => "jsx",
        "ts" => "typescript",
        "tsx" => "tsx",
        "html" | "htm" => "html",
        "css" => "css",
        "scss" => "scss",
        "sass" => "sass",
        "less" => "less",
        "py" | "pyw" => "python",
        "java" => "java",
        "kt" | "kts" => "kotlin",
        "scala" => "scala",
        "groovy" => "groovy",
        "c" | "h" => "c",
        "cpp" | "cc" | "cxx" | "hpp" => "cpp",
        "cs" => "csharp",
        "php" => "php",
        "rb" => "ruby",
        "go" => "go",
        "rs" => "rust",
        "swift" => "swift",
        "dart" => "dart",
        "sh" | "bash" | "zsh" | "fish" => "bash",
        "ps1" => "powershell",
        "json" => "json",
        "xml" => "xml",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "sql" => "sql",
        "conf" | "ini" | "cfg" => "ini",
        "dockerfile" => "docker",
        "md" | "mdx" => "markdown",
        "vue" => "vue",
        "svelte" => "svelte",
        "lua" => "lua",
        "r" => "r",
        "matlab" | "m" => "matlab",
        "asm" | "s" => "assembly",
        _ => return None,
    })
}

/// Languages the highlighter is expected to know about.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "javascript", "typescript", "jsx", "tsx", "html", "css", "scss", "sass", "python", "java",
    "kotlin", "c", "cpp", "csharp", "php", "ruby", "go", "rust", "swift", "dart", "bash",
    "powershell", "json", "xml", "yaml", "sql", "dockerfile", "markdown", "vue", "svelte", "lua",
    "r", "text",
];

/// Resolve a fence tag (bare language or filename) to a language name.
///
/// Unknown names and extensions pass through lowercased. An empty input, or
/// a filename ending in `.`, is plain `text`.
pub fn language_from_filename(input: &str) -> String {
    if input.is_empty() {
        return "text".to_string();
    }

    if !input.contains('.') {
        let name = input.trim().to_lowercase();
        return alias(&name).map(str::to_string).unwrap_or(name);
    }

    let ext = input.rsplit('.').next().unwrap_or_default().to_lowercase();
    if ext.is_empty() {
        return "text".to_string();
    }
    extension(&ext).map(str::to_string).unwrap_or(ext)
}

/// Human-readable name for a language, e.g. `csharp` → `C#`.
pub fn language_display_name(language: &str) -> String {
    let known = match language {
        "javascript" => "JavaScript",
        "typescript" => "TypeScript",
        "jsx" => "React JSX",
        "tsx" => "React TSX",
        "cpp" => "C++",
        "csharp" => "C#",
        "bash" => "Bash/Shell",
        "powershell" => "PowerShell",
        "html" => "HTML",
        "css" => "CSS",
        "scss" => "SCSS",
        "sass" => "Sass",
        "json" => "JSON",
        "yaml" => "YAML",
        "xml" => "XML",
        "sql" => "SQL",
        "dockerfile" => "Dockerfile",
        "markdown" => "Markdown",
        _ => return capitalize(language),
    };
    known.to_string()
}

/// Whether `language` (a canonical name) is one the highlighter knows.
pub fn is_supported(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

/// Whether a tag looks like a filename rather than a language name.
pub fn is_filename(input: &str) -> bool {
    input.contains('.') && !input.contains(' ') && input.chars().count() > 2
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

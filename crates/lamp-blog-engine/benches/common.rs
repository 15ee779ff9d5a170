// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_post_markdown(sections: usize) -> String {
    let base = "## Section\n\nParagraph with some content.\nAnd a second line.\n\n![Screenshot](/img/shot.png)\n*A caption*\n\n```rust:main.rs\nfn main() {\n    println!(\"Hello\");\n}\n```\n\n> Quoted wisdom\n> \n> — Someone\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n---\n\n";
    base.repeat(sections)
}

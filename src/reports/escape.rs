//! Escaping utilities for Markdown output.
//!
//! Sub-dimension names, recommendation text and comments come from answer
//! and table files and may contain Markdown syntax. Anything embedded in a
//! Markdown report goes through one of these functions first.

/// Escape a string for safe inclusion in Markdown table cells.
///
/// Pipes would split the cell and newlines would end the row.
///
/// # Examples
///
/// ```
/// use maturity_roadmap::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("Build | Deploy"), "Build \\| Deploy");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// ```
pub fn escape_markdown_table(s: &str) -> String {
    escape_with(s, |c| match c {
        '|' => Some("\\|"),
        '`' => Some("\\`"),
        '[' => Some("\\["),
        ']' => Some("\\]"),
        '\n' => Some(" "),
        '\r' => Some(""),
        _ => None,
    })
}

/// Escape a string for safe inclusion in Markdown inline content
/// (headings, list items, paragraphs).
///
/// # Examples
///
/// ```
/// use maturity_roadmap::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
/// assert_eq!(escape_markdown_inline("L2→L3"), "L2→L3");
/// ```
pub fn escape_markdown_inline(s: &str) -> String {
    escape_with(s, |c| match c {
        '*' => Some("\\*"),
        '_' => Some("\\_"),
        '`' => Some("\\`"),
        '[' => Some("\\["),
        ']' => Some("\\]"),
        '#' => Some("\\#"),
        '!' => Some("\\!"),
        '~' => Some("\\~"),
        '|' => Some("\\|"),
        '<' => Some("\\<"),
        '>' => Some("\\>"),
        '\n' => Some(" "),
        '\r' => Some(""),
        _ => None,
    })
}

fn escape_with(s: &str, replacement: impl Fn(char) -> Option<&'static str>) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match replacement(c) {
            Some(r) => result.push_str(r),
            None => result.push(c),
        }
    }
    result
}

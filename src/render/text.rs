//! Run text transformation for HTML output.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Non-breaking space entity.
pub const NBSP: &str = "&nbsp;";

/// Replacement for one tab and for one indentation level.
pub const TAB_NBSP: &str = "&nbsp;&nbsp;&nbsp;&nbsp;";

fn leading_spaces() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^ +").expect("valid pattern"))
}

fn wide_spaces() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" {4,}").expect("valid pattern"))
}

fn spaces_to_nbsp(caps: &Captures) -> String {
    NBSP.repeat(caps[0].len())
}

/// Transform raw run text into HTML paragraph content.
///
/// Leading spaces and runs of four or more spaces become `&nbsp;` (one per
/// space); shorter gaps stay literal. Tabs become four `&nbsp;`, and each
/// newline closes the current paragraph and opens another.
pub fn transform_text(text: &str) -> String {
    let text = leading_spaces().replace(text, spaces_to_nbsp);
    let text = wide_spaces().replace_all(&text, spaces_to_nbsp);
    text.replace('\t', TAB_NBSP).replace('\n', "</p><p>")
}

/// Escape the characters that would otherwise be read as markup.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

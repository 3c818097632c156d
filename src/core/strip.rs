use once_cell::sync::Lazy;
use regex::Regex;

// keyword, optional whitespace, then everything between the first '(' and the last ')'
static BODY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\s*\w+\s*\((.*)\)\s*$").expect("body pattern is valid"));

/// Strips the leading keyword and the outermost parentheses from WKT-like text.
///
/// Inner parentheses (polygon rings, multi-geometry parts) are left in place
/// for the splitter and tokenizer. Returns `None` when there is no
/// parenthesized body to expose.
pub fn strip_to_body(text: &str) -> Option<&str> {
    BODY.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

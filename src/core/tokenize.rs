use crate::core::detect::{Delimiter, plain_delimiter};

fn is_token_boundary(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}

/// Splits a geometry part into comma-separated groups of ordinate tokens.
///
/// Whitespace separates ordinates and any leftover parentheses are treated
/// as separators. Empty tokens and groups are dropped; source order is kept.
pub fn token_groups(body: &str) -> Vec<Vec<&str>> {
    body.split(',')
        .map(|group| {
            group
                .split(is_token_boundary)
                .filter(|token| !token.is_empty())
                .collect::<Vec<_>>()
        })
        .filter(|group| !group.is_empty())
        .collect()
}

/// Flat ordinate tokens of a geometry part, in source order.
pub fn tokenize(body: &str) -> Vec<&str> {
    token_groups(body).into_iter().flatten().collect()
}

/// Splits plain text into non-empty groups on commas and line breaks.
pub fn plain_groups(text: &str) -> Vec<&str> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|group| !group.is_empty())
        .collect()
}

/// Tokenizes plain groups according to the delimiter of the first group.
///
/// Space-delimited groups keep their own whitespace-separated tokens.
/// Comma-delimited groups are single ordinates, regrouped two at a time.
pub fn tokenize_plain<'a>(groups: &[&'a str]) -> Vec<Vec<&'a str>> {
    match groups.first().map(|first| plain_delimiter(first)) {
        Some(Delimiter::Space) => groups
            .iter()
            .map(|group| group.split_whitespace().collect())
            .collect(),
        Some(Delimiter::Comma) => groups.chunks(2).map(<[&str]>::to_vec).collect(),
        None => Vec::new(),
    }
}

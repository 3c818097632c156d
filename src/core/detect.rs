/// How a plain (non-geometry) list separates the two ordinates of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// `lat lon, lat lon` or one `lat lon` pair per line
    Space,
    /// `lat,lon,lat,lon`
    Comma,
}

/// Returns the leading keyword of `text`, if it starts with one.
///
/// A keyword is a run of word characters whose first character is a letter,
/// so `POINT(1 2)` yields `POINT` while `-30 20` and `30 10` yield nothing.
pub fn keyword(text: &str) -> Option<&str> {
    let trimmed = text.trim_start();
    let end = trimmed
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(trimmed.len());
    let word = &trimmed[..end];

    match word.chars().next() {
        Some(c) if c.is_alphabetic() || c == '_' => Some(word),
        _ => None,
    }
}

/// True when the input starts with a keyword and should be treated as WKT-like.
///
/// Any leading word is accepted, not only the known geometry keywords.
pub fn is_geometry_like(text: &str) -> bool {
    keyword(text).is_some()
}

/// True when the keyword names a multi-part geometry (`MULTIPOINT`, `MULTIPOLYGON`, ...).
///
/// The match is case-sensitive: keywords are expected in upper case.
pub fn is_multi_part(text: &str) -> bool {
    keyword(text).is_some_and(|k| k.contains("MULTI"))
}

/// Decides the delimiter of a plain list from its first group.
pub fn plain_delimiter(first_group: &str) -> Delimiter {
    if first_group.split_whitespace().count() > 1 {
        Delimiter::Space
    } else {
        Delimiter::Comma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "LINESTRING (30 10, 10 30, 40 40)";
    const POLYGON: &str = "POLYGON ((30 10, 40 40, 20 40, 10 20, 30 10))";
    const POINT: &str = "POINT (30 10)";
    const UNKNOWN: &str = "-30 20, -45 40, -10 15";
    const MULTI_POLYGON: &str =
        "MULTIPOLYGON (((30 20, 45 40, 10 40, 30 20)), ((15 5, 40 10, 10 20, 5 10, 15 5)))";
    const MULTI_POINT: &str = "MULTIPOINT ((10 40), (40 30), (20 20), (30 10))";
    const MULTI_LINE: &str =
        "MULTILINESTRING ((10 10, 20 20, 10 40), (40 40, 30 30, 40 20, 30 10))";

    #[test]
    fn test_recognizes_geometry_strings() {
        for input in [LINE, POLYGON, POINT, MULTI_POLYGON, MULTI_POINT, MULTI_LINE] {
            assert!(is_geometry_like(input), "'{}' should be geometry-like", input);
        }
    }

    #[test]
    fn test_plain_lists_are_not_geometry() {
        assert!(!is_geometry_like(UNKNOWN));
        assert!(!is_geometry_like("-122 45"));
        assert!(!is_geometry_like("30 10, 40 40"));
        assert!(!is_geometry_like(""));
    }

    #[test]
    fn test_any_leading_word_is_geometry_like() {
        assert!(is_geometry_like("  herp derp"));
        assert!(is_geometry_like("CIRCLE (1 2)"));
    }

    #[test]
    fn test_keyword_without_space() {
        assert_eq!(keyword("POINT(30 10)"), Some("POINT"));
        assert_eq!(keyword("  POINT (30 10)"), Some("POINT"));
        assert_eq!(keyword("42 POINT"), None);
    }

    #[test]
    fn test_is_multi_part() {
        assert!(is_multi_part(MULTI_POLYGON));
        assert!(is_multi_part(MULTI_LINE));
        assert!(is_multi_part(MULTI_POINT));
        assert!(!is_multi_part("multipoint ((1 2), (3 4))"));
        assert!(!is_multi_part(UNKNOWN));
        assert!(!is_multi_part(POLYGON));
    }

    #[test]
    fn test_plain_delimiter() {
        assert_eq!(plain_delimiter("-30 20"), Delimiter::Space);
        assert_eq!(plain_delimiter("-30"), Delimiter::Comma);
        assert_eq!(plain_delimiter("  -30\t"), Delimiter::Comma);
    }
}

use crate::core::detect::is_multi_part;
use crate::core::strip::strip_to_body;
use crate::util::error::MapPointError;
use once_cell::sync::Lazy;
use regex::Regex;

// `),` joins sibling parts; whitespace may sit between the two
static PART_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\)\s*,").expect("separator pattern is valid"));

/// Splits WKT-like text into one substring per part.
///
/// Single-part geometries yield their whole body. Each part may still carry
/// its own nested parentheses.
pub fn split_parts(text: &str) -> Result<Vec<&str>, MapPointError> {
    let body = strip_to_body(text).ok_or_else(|| MapPointError::malformed(text))?;

    if is_multi_part(text) {
        Ok(PART_SEPARATOR.split(body).collect())
    } else {
        Ok(vec![body])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_part() -> Result<(), MapPointError> {
        let parts = split_parts("LINESTRING (30 10, 10 30, 40 40)")?;
        assert_eq!(parts, vec!["30 10, 10 30, 40 40"]);
        Ok(())
    }

    #[test]
    fn test_polygon_is_single_part() -> Result<(), MapPointError> {
        let parts = split_parts("POLYGON ((30 10, 40 40, 20 40, 10 20, 30 10))")?;
        assert_eq!(parts.len(), 1);
        Ok(())
    }

    #[test]
    fn test_multi_polygon() -> Result<(), MapPointError> {
        let parts = split_parts(
            "MULTIPOLYGON (((30 20, 45 40, 10 40, 30 20)), ((15 5, 40 10, 10 20, 5 10, 15 5)))",
        )?;
        assert_eq!(parts.len(), 2);
        assert!(parts[0].contains("30 20, 45 40"));
        assert!(parts[1].contains("15 5, 40 10"));
        Ok(())
    }

    #[test]
    fn test_multi_point() -> Result<(), MapPointError> {
        let parts = split_parts("MULTIPOINT ((10 40), (40 30), (20 20), (30 10))")?;
        assert_eq!(parts.len(), 4);
        Ok(())
    }

    #[test]
    fn test_separator_with_spaces() -> Result<(), MapPointError> {
        let parts = split_parts("MULTILINESTRING ((10 10, 20 20) , (40 40, 30 30))")?;
        assert_eq!(parts.len(), 2);
        Ok(())
    }

    #[test]
    fn test_malformed() {
        let result = split_parts("MULTIPOLYGON (((30 20, 45 40");
        assert!(matches!(
            result,
            Err(MapPointError::MalformedGeometryBody(_))
        ));
    }
}

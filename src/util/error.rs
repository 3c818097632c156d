/// Error type for mappoint-rs operations.
#[derive(Debug, PartialEq)]
pub enum MapPointError {
    /// Geometry-like input has no parenthesized coordinate body.
    MalformedGeometryBody(String),
    /// An ordinate token could not be parsed as a number.
    UnparseableOrdinate {
        token: String,
        /// Zero-based index of the token within its part.
        position: usize,
        /// Zero-based index of the part the token belongs to.
        part: usize,
    },
    /// A part holds an odd number of ordinates, so the last one has no partner.
    OddOrdinateCount { count: usize, part: usize },
    /// A comma-separated group holds something other than exactly two ordinates.
    UnpairedGroup {
        /// Zero-based index of the group within its part.
        group: usize,
        count: usize,
        part: usize,
    },
    /// File I/O error.
    IoError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// Failed to render a result (JSON, GeoJSON).
    SerializationError(String),
}

const SNIPPET_LEN: usize = 40;

impl MapPointError {
    pub(crate) fn malformed(input: &str) -> Self {
        let trimmed = input.trim();
        let snippet = match trimmed.char_indices().nth(SNIPPET_LEN) {
            Some((idx, _)) => format!("{}...", &trimmed[..idx]),
            None => trimmed.to_string(),
        };
        MapPointError::MalformedGeometryBody(snippet)
    }
}

impl std::fmt::Display for MapPointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapPointError::MalformedGeometryBody(input) => {
                write!(f, "Malformed geometry body: '{}'", input)
            }
            MapPointError::UnparseableOrdinate {
                token,
                position,
                part,
            } => write!(
                f,
                "Unparseable ordinate '{}' at position {} of part {}",
                token, position, part
            ),
            MapPointError::OddOrdinateCount { count, part } => write!(
                f,
                "Odd number of ordinates ({}) in part {}",
                count, part
            ),
            MapPointError::UnpairedGroup { group, count, part } => write!(
                f,
                "Group {} of part {} holds {} ordinate(s), expected 2",
                group, part, count
            ),
            MapPointError::IoError(msg) => write!(f, "IO error: {}", msg),
            MapPointError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            MapPointError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for MapPointError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_truncates_long_input() {
        let long = format!("POLYGON (({}", "1 ".repeat(100));
        match MapPointError::malformed(&long) {
            MapPointError::MalformedGeometryBody(snippet) => {
                assert!(snippet.ends_with("..."));
                assert_eq!(snippet.chars().count(), SNIPPET_LEN + 3);
            }
            other => panic!("Expected MalformedGeometryBody, got {:?}", other),
        }
    }

    #[test]
    fn test_display_unparseable_ordinate() {
        let err = MapPointError::UnparseableOrdinate {
            token: "herp".to_string(),
            position: 0,
            part: 1,
        };
        assert_eq!(
            err.to_string(),
            "Unparseable ordinate 'herp' at position 0 of part 1"
        );
    }
}

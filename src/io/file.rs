use crate::api::parser::{ParseConfig, parse_with_config};
use crate::util::coord::Coordinate;
use crate::util::error::MapPointError;
use log::debug;
use std::path::Path;

/// Reads a UTF-8 text file and parses its whole contents as one input.
pub fn parse_file(
    path: impl AsRef<Path>,
    config: &ParseConfig,
) -> Result<Vec<Vec<Coordinate>>, MapPointError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| MapPointError::IoError(format!("{}: {}", path.display(), e)))?;
    debug!("Read {} byte(s) from {}", contents.len(), path.display());

    parse_with_config(&contents, config)
}

use crate::api::parser::{ParseConfig, parse_with_config};
use crate::util::coord::Coordinate;
use crate::util::error::MapPointError;
use log::debug;
use rayon::prelude::*;
use std::fs::File;
use std::path::Path;

/// Parses every cell of a geometry column in a CSV file.
///
/// Each cell may hold WKT-like text or a plain coordinate list. The sequences
/// of all rows are concatenated in row order. Any row that fails to parse
/// fails the whole file.
///
/// # Example
///
/// ```no_run
/// use mappoint_rs::{ParseConfig, parse_csv_column};
///
/// let sequences = parse_csv_column("routes.csv", "geometry", &ParseConfig::new()).unwrap();
/// println!("{} sequences", sequences.len());
/// ```
pub fn parse_csv_column(
    csv_path: impl AsRef<Path>,
    column: &str,
    config: &ParseConfig,
) -> Result<Vec<Vec<Coordinate>>, MapPointError> {
    let file = File::open(csv_path).map_err(|e| MapPointError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| MapPointError::CsvError(e.to_string()))?
        .clone();

    let idx = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| MapPointError::CsvError(format!("Geometry column '{}' not found", column)))?;

    let mut cells = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| MapPointError::CsvError(e.to_string()))?;
        let cell = record.get(idx).ok_or_else(|| {
            MapPointError::CsvError(format!("Missing geometry column at index {}", idx))
        })?;
        cells.push(cell.to_string());
    }
    debug!("Read {} row(s) from column '{}'", cells.len(), column);

    let parsed: Vec<Vec<Vec<Coordinate>>> = cells
        .par_iter()
        .map(|cell| parse_with_config(cell, config))
        .collect::<Result<_, _>>()?;

    Ok(parsed.into_iter().flatten().collect())
}

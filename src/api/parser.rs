use crate::core::convert::to_coordinates;
use crate::core::detect::is_geometry_like;
use crate::core::pairs::build_group_pairs;
use crate::core::split::split_parts;
use crate::core::tokenize::{plain_groups, token_groups, tokenize_plain};
use crate::util::coord::{AxisOrder, Coordinate};
use crate::util::error::MapPointError;
use log::{debug, trace};
use rayon::prelude::*;

/// Configuration for a parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseConfig {
    /// Axis order for plain lists. WKT-like input is always longitude-first.
    pub axis_order: AxisOrder,
    /// Drop a trailing unpaired ordinate, pair ordinates across comma groups of
    /// the wrong size, and read unparseable ordinates as `0.0` instead of failing.
    pub lenient: bool,
}

impl ParseConfig {
    /// Strict config with latitude-first plain lists.
    ///
    /// # Example
    /// ```
    /// use mappoint_rs::ParseConfig;
    ///
    /// let config = ParseConfig::new().longitude_first(true).lenient(true);
    /// assert!(config.lenient);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn longitude_first(mut self, longitude_first: bool) -> Self {
        self.axis_order = AxisOrder::from_longitude_first(longitude_first);
        self
    }

    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }
}

pub trait ParseCoordinates {
    fn parse_coordinates(
        &self,
        config: &ParseConfig,
    ) -> Result<Vec<Vec<Coordinate>>, MapPointError>;
}

impl<S: AsRef<str> + ?Sized> ParseCoordinates for S {
    fn parse_coordinates(
        &self,
        config: &ParseConfig,
    ) -> Result<Vec<Vec<Coordinate>>, MapPointError> {
        parse_with_config(self.as_ref(), config)
    }
}

/// Parses WKT-like text or a plain coordinate list into coordinate sequences.
///
/// `longitude_first_default` only applies to plain lists; WKT-like input is
/// always read as `lon lat`.
///
/// # Example
/// ```
/// use mappoint_rs::parse;
///
/// # fn main() -> Result<(), mappoint_rs::MapPointError> {
/// let sequences = parse("POLYGON ((30 10, 40 40, 20 40, 30 10))", false)?;
/// assert_eq!(sequences.len(), 1);
/// assert_eq!(sequences[0][0].latitude, 10.0);
/// # Ok(())
/// # }
/// ```
pub fn parse(
    text: &str,
    longitude_first_default: bool,
) -> Result<Vec<Vec<Coordinate>>, MapPointError> {
    parse_with_config(
        text,
        &ParseConfig::new().longitude_first(longitude_first_default),
    )
}

/// Same as [`parse`], with explicit configuration.
pub fn parse_with_config(
    text: &str,
    config: &ParseConfig,
) -> Result<Vec<Vec<Coordinate>>, MapPointError> {
    // files saved with a UTF-8 byte order mark; `trim` leaves U+FEFF in place
    let trimmed = text.trim_start_matches('\u{FEFF}').trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if is_geometry_like(trimmed) {
        let parts = split_parts(trimmed)?;
        debug!(
            "Geometry-like input with {} part(s), reading as longitude-first",
            parts.len()
        );
        let groups: Vec<Vec<Vec<&str>>> = parts.into_iter().map(token_groups).collect();
        convert_parts(&groups, AxisOrder::LongitudeFirst, config.lenient)
    } else {
        let groups = plain_groups(trimmed);
        debug!(
            "Plain input with {} group(s), reading as {:?}",
            groups.len(),
            config.axis_order
        );
        convert_parts(&[tokenize_plain(&groups)], config.axis_order, config.lenient)
    }
}

/// Parses a list of already separated entries, one pair (or one ordinate) each.
///
/// No geometry detection is done; the configured axis order always applies.
pub fn parse_entries<S: AsRef<str>>(
    entries: &[S],
    config: &ParseConfig,
) -> Result<Vec<Vec<Coordinate>>, MapPointError> {
    let groups: Vec<&str> = entries
        .iter()
        .map(|entry| entry.as_ref().trim())
        .filter(|entry| !entry.is_empty())
        .collect();
    convert_parts(&[tokenize_plain(&groups)], config.axis_order, config.lenient)
}

/// Parses independent inputs in parallel. Results keep the order of `inputs`.
pub fn parse_batch<S: AsRef<str> + Sync>(
    inputs: &[S],
    config: &ParseConfig,
) -> Vec<Result<Vec<Vec<Coordinate>>, MapPointError>> {
    inputs
        .par_iter()
        .map(|input| parse_with_config(input.as_ref(), config))
        .collect()
}

fn convert_parts(
    parts: &[Vec<Vec<&str>>],
    axis_order: AxisOrder,
    lenient: bool,
) -> Result<Vec<Vec<Coordinate>>, MapPointError> {
    let mut sequences = Vec::with_capacity(parts.len());

    for (part, groups) in parts.iter().enumerate() {
        trace!("Part {} has {} ordinate group(s)", part, groups.len());
        let pairs = build_group_pairs(groups, part, lenient)?;
        let coordinates = to_coordinates(&pairs, axis_order, part, lenient)?;
        if !coordinates.is_empty() {
            sequences.push(coordinates);
        }
    }

    Ok(sequences)
}

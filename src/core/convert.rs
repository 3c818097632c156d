use crate::core::pairs::OrdinatePair;
use crate::util::coord::{AxisOrder, Coordinate};
use crate::util::error::MapPointError;
use log::warn;

/// Parses one ordinate token.
///
/// Non-numeric and non-finite tokens are an error, or `0.0` when `lenient`.
pub fn parse_ordinate(
    token: &str,
    position: usize,
    part: usize,
    lenient: bool,
) -> Result<f64, MapPointError> {
    match token.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ if lenient => {
            warn!(
                "Substituting 0.0 for unparseable ordinate '{}' at position {} of part {}",
                token, position, part
            );
            Ok(0.0)
        }
        _ => Err(MapPointError::UnparseableOrdinate {
            token: token.to_string(),
            position,
            part,
        }),
    }
}

/// Converts ordinate pairs to coordinates under a single axis order.
pub fn to_coordinates(
    pairs: &[OrdinatePair<'_>],
    axis_order: AxisOrder,
    part: usize,
    lenient: bool,
) -> Result<Vec<Coordinate>, MapPointError> {
    pairs
        .iter()
        .map(|pair| {
            let first = parse_ordinate(pair.first, pair.first_position(), part, lenient)?;
            let second = parse_ordinate(pair.second, pair.second_position(), part, lenient)?;

            Ok(match axis_order {
                AxisOrder::LongitudeFirst => Coordinate::new(second, first),
                AxisOrder::LatitudeFirst => Coordinate::new(first, second),
            })
        })
        .collect()
}

use geo_types::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A single latitude/longitude position.
///
/// No range checks are applied; out-of-range values pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Which ordinate of a pair comes first in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisOrder {
    /// `lat lon` pairs
    #[default]
    LatitudeFirst,
    /// `lon lat` pairs, as in WKT
    LongitudeFirst,
}

impl AxisOrder {
    pub fn from_longitude_first(longitude_first: bool) -> Self {
        if longitude_first {
            AxisOrder::LongitudeFirst
        } else {
            AxisOrder::LatitudeFirst
        }
    }

    pub fn is_longitude_first(self) -> bool {
        self == AxisOrder::LongitudeFirst
    }
}

// geo_types uses x = longitude, y = latitude.
impl From<Coordinate> for Coord<f64> {
    fn from(c: Coordinate) -> Self {
        Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(c: Coord<f64>) -> Self {
        Coordinate::new(c.y, c.x)
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(c: Coordinate) -> Self {
        Point::new(c.longitude, c.latitude)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(p: Point<f64>) -> Self {
        Coordinate::new(p.y(), p.x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_conversion_puts_longitude_on_x() {
        let c = Coordinate::new(53.48, -2.24);
        let coord: Coord<f64> = c.into();
        assert_eq!(coord.x, -2.24);
        assert_eq!(coord.y, 53.48);
        assert_eq!(Coordinate::from(coord), c);
    }

    #[test]
    fn test_point_roundtrip() {
        let c = Coordinate::new(10.0, 30.0);
        let pt: Point<f64> = c.into();
        assert_eq!(pt.x(), 30.0);
        assert_eq!(Coordinate::from(pt), c);
    }

    #[test]
    fn test_axis_order_from_flag() {
        assert_eq!(AxisOrder::default(), AxisOrder::LatitudeFirst);
        assert!(AxisOrder::from_longitude_first(true).is_longitude_first());
        assert!(!AxisOrder::from_longitude_first(false).is_longitude_first());
    }
}

use crate::util::coord::Coordinate;
use crate::util::error::MapPointError;
use geo_types::{Geometry, LineString, MultiLineString};

/// Output format for parsed coordinate sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeometryFormat {
    /// Well-Known Text (e.g., "LINESTRING(30 10,10 30)")
    #[default]
    Wkt,
    /// GeoJSON geometry
    GeoJson,
    /// JSON array of sequences of `{"latitude", "longitude"}` objects
    Json,
}

pub fn to_line_string(sequence: &[Coordinate]) -> LineString<f64> {
    sequence.iter().copied().collect()
}

/// Builds one line string per sequence, with x = longitude and y = latitude.
pub fn to_multi_line_string(sequences: &[Vec<Coordinate>]) -> MultiLineString<f64> {
    MultiLineString::new(sequences.iter().map(|s| to_line_string(s)).collect())
}

/// A single sequence becomes a `LineString`, anything else a `MultiLineString`.
pub fn to_geometry(sequences: &[Vec<Coordinate>]) -> Geometry<f64> {
    match sequences {
        [single] => Geometry::LineString(to_line_string(single)),
        _ => Geometry::MultiLineString(to_multi_line_string(sequences)),
    }
}

pub fn format_sequences(
    sequences: &[Vec<Coordinate>],
    format: GeometryFormat,
) -> Result<String, MapPointError> {
    match format {
        GeometryFormat::Wkt => Ok(geometry_to_wkt(&to_geometry(sequences))),
        GeometryFormat::GeoJson => Ok(geometry_to_geojson(&to_geometry(sequences))),
        GeometryFormat::Json => serde_json::to_string(sequences)
            .map_err(|e| MapPointError::SerializationError(e.to_string())),
    }
}

fn geometry_to_wkt(geometry: &Geometry<f64>) -> String {
    use wkt::ToWkt;
    geometry.wkt_string()
}

fn geometry_to_geojson(geometry: &Geometry<f64>) -> String {
    let geom = geojson::Geometry::new(geojson::Value::from(geometry));
    geom.to_string()
}

//! # mappoint-rs
//!
//! Turns loosely structured location text into latitude/longitude sequences.
//! Two kinds of input are understood:
//!
//! - WKT-like geometry: `POINT`, `LINESTRING`, `POLYGON` and their `MULTI*`
//!   variants. These are always read as `lon lat`.
//! - Plain lists such as `"-30 20, -45 40"` or `"45.5,-122.6,45.6,-122.7"`,
//!   read in the caller's axis order.
//!
//! ### 1. `parse` - One Input
//!
//! ```
//! use mappoint_rs::parse;
//!
//! # fn main() -> Result<(), mappoint_rs::MapPointError> {
//! let sequences = parse("MULTIPOINT ((10 40), (40 30))", false)?;
//! assert_eq!(sequences.len(), 2);
//!
//! // A single point is repeated so it can be drawn as a line.
//! let point = parse("POINT(30 10)", false)?;
//! assert_eq!(point[0].len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `ParseConfig` - Axis Order and Leniency
//!
//! ```
//! use mappoint_rs::{ParseConfig, ParseCoordinates};
//!
//! # fn main() -> Result<(), mappoint_rs::MapPointError> {
//! let config = ParseConfig::new().longitude_first(true).lenient(true);
//! let sequences = "20 -30, 40 -45, 99".parse_coordinates(&config)?;
//! assert_eq!(sequences[0][0].latitude, -30.0);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. Files and Output
//!
//! ```no_run
//! use mappoint_rs::{GeometryFormat, ParseConfig, format_sequences, parse_file};
//!
//! let sequences = parse_file("route.txt", &ParseConfig::new()).unwrap();
//! println!("{}", format_sequences(&sequences, GeometryFormat::GeoJson).unwrap());
//! ```
//!

pub mod api;
pub mod core;
pub mod io;
pub mod util;

pub use api::{
    GeometryFormat, ParseConfig, ParseCoordinates, format_sequences, parse, parse_batch,
    parse_entries, parse_with_config, to_geometry, to_line_string, to_multi_line_string,
};
pub use self::core::{is_geometry_like, is_multi_part};
pub use io::{parse_csv_column, parse_file};
pub use util::{AxisOrder, Coordinate, MapPointError};

pub use geo_types;

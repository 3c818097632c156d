pub mod output;
pub mod parser;

pub use output::{
    GeometryFormat, format_sequences, to_geometry, to_line_string, to_multi_line_string,
};
pub use parser::{
    ParseConfig, ParseCoordinates, parse, parse_batch, parse_entries, parse_with_config,
};

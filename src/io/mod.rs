pub mod csv;
pub mod file;

pub use self::csv::parse_csv_column;
pub use self::file::parse_file;

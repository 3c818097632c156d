pub mod coord;
pub mod error;

pub use coord::{AxisOrder, Coordinate};
pub use error::MapPointError;

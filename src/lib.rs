pub mod cs;
pub mod error;
pub mod harness;

pub use cs::select;
pub use cs::select::{Algorithm, Direction, Rank};
pub use error::{Error, Result};

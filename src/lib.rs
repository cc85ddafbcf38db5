mod grid;
mod server;
mod solver;

pub use grid::{Grid, ParseGridError};
pub use server::router;
pub use solver::{fits, solve};

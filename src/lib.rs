pub mod config;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod maze;

pub use input::{parse_grid, parse_grid_str};
pub use maze::{Cell, Outcome, Traversal};

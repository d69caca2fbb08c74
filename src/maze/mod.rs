//! The traversal engine: one traveler, one grid, one terminal outcome.

mod cell;
pub mod cycle;
pub mod engine;
mod grid;
pub mod modifier;
mod path;
mod traveler;

pub use cell::Cell;
pub use cycle::{CycleDetection, CycleDetector};
pub use engine::{Outcome, State, Traversal};
pub use grid::Grid;
pub use modifier::Modifier;
pub use path::{PathRecorder, PathStep};
pub use traveler::Traveler;

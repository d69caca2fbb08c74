// This interior module is private; we reexport its contents.
#[allow(clippy::module_inception)]
mod map;
mod traversable;

pub mod tile;

pub use map::{Map, MapConversionErr};
pub use traversable::Traversable;

// stitch-core/src/types/mod.rs

pub mod color;
pub mod geometry;
pub mod grid;
pub mod pattern;

pub use color::Color;
pub use geometry::{Point, Segment};
pub use grid::Grid;
pub use pattern::{Pattern, PatternList};

//! # Stitchgrid
//!
//! Draws stitch patterns: horizontal, vertical and diagonal line families
//! over a cell grid, each switched on and off by repeating binary patterns.
//! Geometry comes from `stitch-core`; this crate supplies the pens that put
//! it somewhere visible.
//!
//! ## Modules
//!
//! - `backends`: SVG document and colored terminal pens.
//! - `cli`: Command-line arguments and the render/watch driver.
//! - `watcher`: Configuration file watching for live redraws.

pub mod backends;
pub mod cli;
pub mod watcher;

pub use crate::backends::{SvgPen, TerminalPen};
pub use stitch_core::{render, RenderConfig};

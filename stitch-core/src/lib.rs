//! # Stitch Core
//!
//! Pure pattern-to-geometry core for stitch grid rendering.
//! Turns repeating binary patterns plus a cell grid into ordered line
//! segments, without any drawing backend.
//!
//! ## Features
//!
//! - **serde**: JSON configuration loading and pattern (de)serialization
//! - **colored**: Truecolor terminal painting for [`Color`] (on by default)
//!
//! ## Example
//!
//! ```
//! use stitch_core::{render, RecordingPen, RenderConfig};
//!
//! let config = RenderConfig::default();
//! let mut pen = RecordingPen::new();
//! render(&config, &mut pen);
//! assert!(!pen.segments().is_empty());
//! ```

pub mod config;
pub mod families;
pub mod pen;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use config::{BackgroundConfig, FamilyConfig, GridConfig, RenderConfig};
pub use families::{background, Family};
pub use pen::{draw_segment, Pen, PenCommand, RecordingPen};
pub use render::{layers, render, Layer, RenderStats};
pub use types::{Color, Grid, Pattern, PatternList, Point, Segment};

//! Concrete pens that turn a render pass into output.

pub mod svg;
pub mod terminal;

pub use self::svg::SvgPen;
pub use self::terminal::TerminalPen;

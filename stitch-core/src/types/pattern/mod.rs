//! Repeating binary patterns that switch stitches on and off
//!
//! A pattern like `"0011"` repeats forever along a row, column or diagonal;
//! a pattern list hands its patterns out round-robin to successive lines.

mod repeat;
mod list;


// Re-export public types
pub use repeat::Pattern;
pub use list::PatternList;

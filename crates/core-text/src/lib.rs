//! Per-code-point display width.
//!
//! Text here is always iterated as Unicode scalar values (`char`), so a code
//! point outside the BMP is one unit regardless of how it is encoded.

pub mod width;

pub use width::{AmbiguousWidth, WidthClass, WidthTable};

/// Number of Unicode scalar values in `s`.
#[inline]
pub fn code_points(s: &str) -> usize {
    s.chars().count()
}

/// Display cells of `s` under the standard table.
#[inline]
pub fn str_width(s: &str) -> usize {
    WidthTable::STANDARD.str_width(s)
}

//! Visible length of strings as a terminal draws them.
//!
//! ANSI / VT escape sequences (SGR colours, cursor movement, OSC titles and
//! hyperlinks) take no cells and are discounted. The rest is counted per
//! Unicode code point, either as one unit each (the default) or as terminal
//! cells from a width table.
//!
//! ```
//! assert_eq!(unicode_length::get("\u{1b}[1mbold\u{1b}[22m"), Ok(4));
//! assert_eq!(unicode_length::width("汉字"), 4);
//! assert!(unicode_length::ansi_regex().is_match("foo\u{1b}[4mcake"));
//! ```

pub mod error;
pub mod input;
pub mod length;

pub use core_ansi::{
    ANSI_PATTERN, EscapeKind, EscapeToken, Span, ansi_regex, has_escapes, spans, strip, strip_all,
    tokens,
};
pub use core_config::{LengthConfig, WidthMode};
pub use core_text::{AmbiguousWidth, WidthClass, WidthTable};
pub use error::InvalidInputError;
pub use input::Input;
pub use length::{LengthCalculator, get, width};

/// Pattern type returned by [`ansi_regex`].
pub use regex::Regex;

//! Visible length of terminal strings.
//!
//! Two passes over the input:
//! 1. remove every escape sequence recognized by `core_ansi`, repeating
//!    until removal reveals no new sequence;
//! 2. walk what remains code point by code point and sum the per-code-point
//!    contribution for the configured `WidthMode`.
//!
//! Validation happens before either pass. Nothing is cached between calls.

use crate::error::InvalidInputError;
use crate::input::Input;
use core_config::{LengthConfig, WidthMode};
use core_text::WidthTable;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthCalculator {
    mode: WidthMode,
    table: &'static WidthTable,
}

impl Default for LengthCalculator {
    fn default() -> Self {
        Self::from_config(&LengthConfig::default())
    }
}

impl LengthCalculator {
    pub const fn new(mode: WidthMode, table: &'static WidthTable) -> Self {
        Self { mode, table }
    }

    pub const fn from_config(config: &LengthConfig) -> Self {
        Self::new(config.mode, config.table())
    }

    /// Terminal cells, ambiguous-width code points narrow.
    pub const fn columns() -> Self {
        Self::new(WidthMode::Columns, &WidthTable::STANDARD)
    }

    pub const fn mode(&self) -> WidthMode {
        self.mode
    }

    /// Validate a caller value and measure it.
    ///
    /// # Errors
    /// `InvalidInputError::Missing` for absent input and
    /// `InvalidInputError::NotAString` for non-text values.
    pub fn get<'a>(&self, input: impl Into<Input<'a>>) -> Result<usize, InvalidInputError> {
        match input.into() {
            Input::Text(text) => Ok(self.measure(text)),
            Input::Missing => {
                debug!(target: "length", "missing_input");
                Err(InvalidInputError::Missing)
            }
            Input::Other(value) => {
                debug!(target: "length", value_bytes = value.len(), "non_text_input");
                Err(InvalidInputError::NotAString(value))
            }
        }
    }

    /// Measure text that is already known to be a string.
    pub fn measure(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let visible = core_ansi::strip_all(text);
        let length = match self.mode {
            WidthMode::CodePoints => core_text::code_points(&visible),
            WidthMode::Columns => self.table.str_width(&visible),
        };
        trace!(
            target: "length",
            input_bytes = text.len(),
            visible_bytes = visible.len(),
            mode = ?self.mode,
            length,
            "length_measured"
        );
        length
    }
}

/// Visible length with the default calculator (one unit per code point).
///
/// # Errors
/// See [`LengthCalculator::get`].
pub fn get<'a>(input: impl Into<Input<'a>>) -> Result<usize, InvalidInputError> {
    LengthCalculator::default().get(input)
}

/// Terminal cell width of `text` once escape sequences are removed.
pub fn width(text: &str) -> usize {
    LengthCalculator::columns().measure(text)
}

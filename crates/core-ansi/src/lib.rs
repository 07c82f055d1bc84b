//! ANSI / VT escape sequence recognition.
//!
//! Escape sequences occupy zero terminal cells. This crate owns the single
//! pattern that recognizes them and the helpers built on it: stripping,
//! tokenization into byte ranges, and splitting into text / escape spans.
//! Malformed or unterminated sequences are never an error; they are simply
//! not matched and remain part of the text.

pub mod pattern;
pub mod token;

pub use pattern::{ANSI_PATTERN, ansi_regex};
pub use token::{
    EscapeKind, EscapeToken, Span, has_escapes, spans, strip, strip_all, tokens,
};

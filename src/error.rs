//! Caller-facing error type.

use thiserror::Error;

/// Raised before any matching when `get` receives something it cannot measure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("Missing input")]
    Missing,
    /// Carries the display form of the offending value.
    #[error("Invalid input: {0}")]
    NotAString(String),
}

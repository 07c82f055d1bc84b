//! Length measurement configuration.
//!
//! Parses an optional `[length]` table from a TOML document supplied by the
//! host (this crate performs no file discovery or I/O):
//!
//! ```toml
//! [length]
//! mode = "columns"     # or "code-points" (default)
//! ambiguous = "wide"   # or "narrow" (default)
//! ```
//!
//! Unknown fields are ignored so hosts can keep their own settings in the
//! same document.

use anyhow::{Context, Result};
use core_text::{AmbiguousWidth, WidthTable};
use serde::Deserialize;
use tracing::{info, warn};

/// How remaining code points are counted after escapes are stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidthMode {
    /// One unit per code point.
    #[default]
    CodePoints,
    /// Terminal cells per code point (0, 1 or 2).
    Columns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct LengthConfig {
    #[serde(default)]
    pub mode: WidthMode,
    #[serde(default)]
    pub ambiguous: AmbiguousWidth,
}

impl LengthConfig {
    pub const fn new(mode: WidthMode, ambiguous: AmbiguousWidth) -> Self {
        Self { mode, ambiguous }
    }

    pub const fn columns() -> Self {
        Self::new(WidthMode::Columns, AmbiguousWidth::Narrow)
    }

    /// Static width table matching the ambiguous-width policy.
    pub const fn table(&self) -> &'static WidthTable {
        WidthTable::for_ambiguous(self.ambiguous)
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub length: LengthConfig,
}

/// Parse a TOML document, reporting syntax or type errors.
pub fn try_parse(content: &str) -> Result<LengthConfig> {
    let file: ConfigFile =
        toml::from_str(content).context("parsing [length] configuration")?;
    info!(
        target: "config",
        mode = ?file.length.mode,
        ambiguous = ?file.length.ambiguous,
        "length_config_loaded"
    );
    Ok(file.length)
}

/// Parse a TOML document, falling back to defaults on error.
pub fn parse(content: &str) -> LengthConfig {
    match try_parse(content) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(target: "config", error = %e, "length_config_invalid_using_defaults");
            LengthConfig::default()
        }
    }
}

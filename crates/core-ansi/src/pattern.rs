//! ANSI / VT escape sequence pattern.
//!
//! Branch order matters: the `regex` crate resolves alternation
//! leftmost-first, so the more specific grammars (OSC, then CSI) are tried
//! before the legacy fallback and the bare two-character form.
//!
//! Known gap: sequences whose final byte is a digit (`ESC 7`, `ESC ( 0`,
//! `ESC # 8`) share their alphabet with the text that may follow them. When
//! more digits come next the match boundary is not guaranteed; no heuristic
//! tries to resolve it.
//!
//! The legacy prefixes `(`, `)`, `#`, `;` and `?` always introduce a longer
//! sequence: `ESC #` alone is not a match, and `ESC # A` is matched whole.

use regex::Regex;
use std::sync::LazyLock;

pub const ANSI_PATTERN: &str = concat!(
    // OSC: ESC ] (or 8-bit 0x9D) ... terminated by BEL, ESC \ or 8-bit ST
    r"(?:(?:\x1B\]|\x{9D})[^\x07\x1B\x{9C}]*(?:\x07|\x1B\\|\x{9C}))",
    "|",
    // CSI: ESC [ (or 8-bit 0x9B), params 0x30-0x3F, intermediates 0x20-0x2F, final 0x40-0x7E
    r"(?:(?:\x1B\[|\x{9B})[0-?]*[ -/]*[@-~])",
    "|",
    // Legacy / nF: charset selection, DEC line attributes, VT52, bare status queries
    r"(?:[\x1B\x{9B}][()#;?]*(?:[0-9]{1,4}(?:[;:][0-9]{0,4})*)?[0-9A-PR-TZcf-nq-uy=><~])",
    "|",
    // Two-character: ESC + one printable byte that does not open a longer form
    // ([ ] and the legacy prefixes ( ) # ; ?)
    r#"(?:\x1B[ -"$-'*-:<->@-Z\\^-~])"#,
);

static ANSI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ANSI_PATTERN).expect("ANSI pattern is valid"));

/// Shared compiled pattern for in-crate scanning.
#[inline]
pub(crate) fn compiled() -> &'static Regex {
    &ANSI_REGEX
}

/// Return a handle to the escape sequence pattern.
///
/// Each call yields an independent `Regex`; cloning shares the compiled
/// program. `Regex` carries no "last index" between searches, so the result of
/// a match depends only on the haystack, never on earlier calls.
pub fn ansi_regex() -> Regex {
    ANSI_REGEX.clone()
}

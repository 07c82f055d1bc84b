//! Code point display width table.
//!
//! `WidthTable::class` is the single authority for how many terminal cells a
//! code point occupies once escape sequences have been removed.
//!
//! Lookup precedence:
//! 1. Static override ranges (terminal conventions where the Unicode data and
//!    what terminals actually draw disagree, plus control characters).
//! 2. `unicode_width` data, using the CJK tables when ambiguous-width code
//!    points are configured wide.
//! 3. Narrow (1) for anything unassigned or unknown.
//!
//! Invariants:
//! - Tables are immutable statics; lookups never allocate or lock.
//! - `OVERRIDES` stays sorted by range start with no overlaps (binary search
//!   relies on it; enforced by `override_table_sorted`).

use serde::Deserialize;
use unicode_width::UnicodeWidthChar;

/// Terminal cell class of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WidthClass {
    Zero,
    Narrow,
    Wide,
}

impl WidthClass {
    #[inline]
    pub const fn cells(self) -> usize {
        match self {
            WidthClass::Zero => 0,
            WidthClass::Narrow => 1,
            WidthClass::Wide => 2,
        }
    }
}

/// Policy for East Asian Ambiguous code points (e.g. `±`, `Ω`, box drawing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AmbiguousWidth {
    #[default]
    Narrow,
    Wide,
}

use WidthClass::{Narrow, Zero};

static OVERRIDES: &[(char, char, WidthClass)] = &[
    ('\u{0000}', '\u{001F}', Zero),   // C0 controls
    ('\u{007F}', '\u{009F}', Zero),   // DEL + C1 controls
    ('\u{00AD}', '\u{00AD}', Narrow), // soft hyphen, drawn by terminals
    ('\u{1160}', '\u{11FF}', Zero),   // Hangul medial vowels / final consonants
    ('\u{200B}', '\u{200F}', Zero),   // ZWSP, ZWNJ, ZWJ, LRM, RLM
    ('\u{2028}', '\u{202E}', Zero),   // line/paragraph separators, bidi embeddings
    ('\u{2060}', '\u{2064}', Zero),   // word joiner, invisible operators
    ('\u{FE00}', '\u{FE0F}', Zero),   // variation selectors
    ('\u{FEFF}', '\u{FEFF}', Zero),   // BOM / ZWNBSP
];

fn override_class(c: char) -> Option<WidthClass> {
    let mut lo = 0usize;
    let mut hi = OVERRIDES.len();
    while lo < hi {
        let mid = (lo + hi) / 2;
        let (start, end, class) = OVERRIDES[mid];
        if c < start {
            hi = mid;
        } else if c > end {
            lo = mid + 1;
        } else {
            return Some(class);
        }
    }
    None
}

/// Immutable width classification for code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthTable {
    ambiguous: AmbiguousWidth,
}

impl WidthTable {
    /// Ambiguous code points narrow (the common Western terminal default).
    pub const STANDARD: WidthTable = WidthTable {
        ambiguous: AmbiguousWidth::Narrow,
    };
    /// Ambiguous code points wide (CJK locales).
    pub const CJK: WidthTable = WidthTable {
        ambiguous: AmbiguousWidth::Wide,
    };

    pub const fn for_ambiguous(ambiguous: AmbiguousWidth) -> &'static WidthTable {
        match ambiguous {
            AmbiguousWidth::Narrow => &Self::STANDARD,
            AmbiguousWidth::Wide => &Self::CJK,
        }
    }

    pub const fn ambiguous(&self) -> AmbiguousWidth {
        self.ambiguous
    }

    /// Classify one code point.
    pub fn class(&self, c: char) -> WidthClass {
        if c.is_ascii() && !c.is_ascii_control() {
            return Narrow;
        }
        if let Some(class) = override_class(c) {
            return class;
        }
        let width = match self.ambiguous {
            AmbiguousWidth::Narrow => c.width(),
            AmbiguousWidth::Wide => c.width_cjk(),
        };
        match width {
            Some(0) => Zero,
            Some(2) => WidthClass::Wide,
            _ => Narrow,
        }
    }

    #[inline]
    pub fn cells(&self, c: char) -> usize {
        self.class(c).cells()
    }

    /// Sum of per-code-point cells. The caller is responsible for removing
    /// escape sequences first.
    pub fn str_width(&self, s: &str) -> usize {
        s.chars().map(|c| self.cells(c)).sum()
    }
}

impl Default for WidthTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

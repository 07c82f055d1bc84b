//! Escape tokenization.
//!
//! Contract:
//! - Input: &str that may interleave plain text with escape sequences.
//! - Output: tokens with absolute byte offsets into the input, or spans that
//!   alternate text and escapes.
//! - Guarantees: tokens are in order and never overlap; spans are in order,
//!   non-overlapping and concatenate back to the input.
//! - Safety: does not log content; only sizes and counts are traced.

use crate::pattern::compiled;
use std::borrow::Cow;
use tracing::trace;

/// Grammar family of a recognized escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeKind {
    /// Control Sequence Introducer (`ESC [` or 0x9B).
    Csi,
    /// Operating System Command (`ESC ]` or 0x9D), terminated by BEL or ST.
    Osc,
    /// Short / legacy form (`ESC ( B`, `ESC # 6`, VT52 `ESC A`, ...).
    Escape,
}

impl EscapeKind {
    fn of(sequence: &str) -> Self {
        if sequence.starts_with("\u{1b}]") || sequence.starts_with('\u{9d}') {
            EscapeKind::Osc
        } else if sequence.starts_with("\u{1b}[") || sequence.starts_with('\u{9b}') {
            EscapeKind::Csi
        } else {
            EscapeKind::Escape
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EscapeToken {
    pub start: usize, // byte offset in input (inclusive)
    pub end: usize,   // byte offset in input (exclusive)
    pub kind: EscapeKind,
}

impl EscapeToken {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice of `input` this token was recognized from.
    ///
    /// # Panics
    /// If `input` is not the string the token came from and the token's
    /// range is out of bounds or not on a char boundary there.
    pub fn as_str<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }

    /// True for OSC 8 hyperlink openers and closers.
    ///
    /// # Panics
    /// Same as [`EscapeToken::as_str`].
    pub fn is_hyperlink(&self, input: &str) -> bool {
        if self.kind != EscapeKind::Osc {
            return false;
        }
        let body = self.as_str(input);
        body.strip_prefix("\u{1b}]")
            .or_else(|| body.strip_prefix('\u{9d}'))
            .is_some_and(|rest| rest.starts_with("8;"))
    }
}

/// One piece of an input split at escape boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Text(&'a str),
    Escape(EscapeToken, &'a str),
}

impl<'a> Span<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Span::Text(s) | Span::Escape(_, s) => s,
        }
    }
}

/// All escape sequences in `input`, in order.
pub fn tokens(input: &str) -> Vec<EscapeToken> {
    compiled()
        .find_iter(input)
        .map(|m| EscapeToken {
            start: m.start(),
            end: m.end(),
            kind: EscapeKind::of(m.as_str()),
        })
        .collect()
}

/// Split `input` into alternating text and escape spans. Empty text runs are
/// omitted.
pub fn spans(input: &str) -> Vec<Span<'_>> {
    let mut out = Vec::new();
    let mut cursor = 0usize;
    for token in tokens(input) {
        if token.start > cursor {
            out.push(Span::Text(&input[cursor..token.start]));
        }
        out.push(Span::Escape(token, token.as_str(input)));
        cursor = token.end;
    }
    if cursor < input.len() {
        out.push(Span::Text(&input[cursor..]));
    }
    out
}

/// Remove every escape sequence. Borrows when nothing matched.
pub fn strip(input: &str) -> Cow<'_, str> {
    let stripped = compiled().replace_all(input, "");
    if let Cow::Owned(ref s) = stripped {
        trace!(
            target: "ansi",
            input_bytes = input.len(),
            stripped_bytes = s.len(),
            "escapes_stripped"
        );
    }
    stripped
}

/// Strip repeatedly until nothing matches.
///
/// A single pass can join leftovers into a new sequence: removing `ESC [ m`
/// from `ESC ESC [ m A` leaves `ESC A`. The result of this function never
/// contains a match.
pub fn strip_all(input: &str) -> Cow<'_, str> {
    let mut visible = strip(input);
    loop {
        let next = match strip(&visible) {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        match next {
            Some(s) => visible = Cow::Owned(s),
            None => return visible,
        }
    }
}

pub fn has_escapes(input: &str) -> bool {
    compiled().is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_report_offsets_and_kind() {
        let s = "a\u{1b}[1mb\u{1b}]0;t\u{7}c\u{1b}(B";
        let toks = tokens(s);
        assert_eq!(toks.len(), 3);
        assert_eq!(toks[0].kind, EscapeKind::Csi);
        assert_eq!(toks[0].as_str(s), "\u{1b}[1m");
        assert_eq!((toks[0].start, toks[0].end), (1, 5));
        assert_eq!(toks[1].kind, EscapeKind::Osc);
        assert_eq!(toks[1].as_str(s), "\u{1b}]0;t\u{7}");
        assert_eq!(toks[2].kind, EscapeKind::Escape);
        assert_eq!(toks[2].as_str(s), "\u{1b}(B");
    }

    #[test]
    fn tokens_never_overlap() {
        let s = "\u{1b}[0m\u{1b}[4m\u{1b}[42m\u{1b}[31mfoo\u{1b}[39m\u{1b}[49m\u{1b}[24mfoo\u{1b}[0m";
        let toks = tokens(s);
        assert_eq!(toks.len(), 8);
        let mut prev_end = 0usize;
        for t in &toks {
            assert!(t.start >= prev_end);
            assert!(!t.is_empty());
            prev_end = t.end;
        }
    }

    #[test]
    fn spans_cover_input() {
        let s = "\u{1b}]8;;https://example.com\u{7}link\u{1b}]8;;\u{7} tail";
        let parts = spans(s);
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[1], Span::Text("link"));
        assert_eq!(parts[3], Span::Text(" tail"));
        let joined: String = parts.iter().map(Span::as_str).collect();
        assert_eq!(joined, s);
        match (parts[0], parts[2]) {
            (Span::Escape(open, _), Span::Escape(close, _)) => {
                assert!(open.is_hyperlink(s));
                assert!(close.is_hyperlink(s));
            }
            other => panic!("unexpected spans {other:?}"),
        }
    }

    #[test]
    fn spans_of_plain_text_is_single_text() {
        assert_eq!(spans("hello"), vec![Span::Text("hello")]);
        assert!(spans("").is_empty());
    }

    #[test]
    fn title_is_not_hyperlink() {
        let s = "\u{1b}]0;title\u{7}";
        let toks = tokens(s);
        assert!(!toks[0].is_hyperlink(s));
    }

    #[test]
    fn strip_borrows_when_clean() {
        assert!(matches!(strip("no escapes"), Cow::Borrowed("no escapes")));
        assert_eq!(strip("foo\u{1b}[0gbar"), "foobar");
        assert!(has_escapes("x\u{1b}[Ky"));
        assert!(!has_escapes("xy"));
    }

    #[test]
    fn strip_all_removes_sequences_revealed_by_stripping() {
        let s = "\u{1b}\u{1b}[mA";
        assert_eq!(strip(s), "\u{1b}A");
        assert_eq!(strip_all(s), "A");
        assert_eq!(strip_all("\u{1b}(\u{1b}[1mBx"), "x");
        assert_eq!(strip_all("\u{1b}[\u{1b}[0m1;31mred"), "red");
        assert!(matches!(strip_all("clean"), Cow::Borrowed("clean")));
    }

    #[test]
    #[should_panic]
    fn as_str_on_foreign_input_panics() {
        let toks = tokens("abc\u{1b}[1m");
        let _ = toks[0].as_str("ab");
    }

    #[test]
    fn unterminated_sequences_stay_as_text() {
        // Lone ESC at the end has no final byte; nothing is removed.
        assert_eq!(strip("abc\u{1b}"), "abc\u{1b}");
        // ESC [ followed by a non-final code point is not a sequence.
        assert_eq!(strip("\u{1b}[\u{4e00}"), "\u{1b}[\u{4e00}");
    }
}

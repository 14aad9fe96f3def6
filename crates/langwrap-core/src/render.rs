//! The character-run scanner and markup renderer.
//!
//! A single left-to-right pass partitions input text into maximal runs of
//! ASCII Latin letters and everything else, wrapping each run in the
//! per-run tags and the whole result in the global tags.
//!
//! Faithful port note: whitespace encountered while a run is open does NOT
//! close it. The run stays open and the whitespace lands inside the wrapped
//! slice when the run eventually closes — on a non-Latin, non-whitespace
//! character or at end of input. This matches the reference implementation's
//! observed behavior (`" eng "` becomes `" <lang ...>eng </lang>"`).

use crate::tags::TagSet;

/// True for ASCII Latin letters only (`A`-`Z`, `a`-`z`).
///
/// Digits, underscores, and accented Latin characters are not letters for
/// the purposes of run detection.
const fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// The exact whitespace set absorbed into open runs: space, tab, newline,
/// carriage return, vertical tab. Form feed and Unicode space variants are
/// deliberately excluded.
const fn is_absorbed_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B')
}

/// Wrap every Latin run in `text` with the per-run tags from `tags`, and
/// the whole result in the global tags.
///
/// O(n) time, one output allocation. Never fails; any text is renderable.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn render(text: &str, tags: &TagSet) -> String {
    let mut out = String::with_capacity(
        tags.global_open.len() + text.len() + tags.global_close.len(),
    );
    out.push_str(&tags.global_open);

    // Byte offset of the open run's first character, if any.
    let mut run_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if is_latin(c) {
            if run_start.is_none() {
                run_start = Some(i);
            }
        } else if let Some(start) = run_start {
            if !is_absorbed_whitespace(c) {
                out.push_str(&tags.open);
                out.push_str(&text[start..i]);
                out.push_str(&tags.close);
                out.push(c);
                run_start = None;
            }
            // absorbed whitespace: emit nothing, the run stays open
        } else {
            out.push(c);
        }
    }

    // End of input closes a still-open run.
    if let Some(start) = run_start {
        out.push_str(&tags.open);
        out.push_str(&text[start..]);
        out.push_str(&tags.close);
    }

    out.push_str(&tags.global_close);
    out
}

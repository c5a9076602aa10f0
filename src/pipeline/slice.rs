//! Marker search and fallback-tail slicing of extracted text.
//!
//! Pure string functions, no I/O. The marker match is an exact,
//! case-sensitive, first-occurrence substring search — never a regex.
//! When the marker is absent the output is the final
//! [`FALLBACK_TAIL_CHARS`] characters of the content.
//!
//! The window is measured in *characters*, not bytes: slicing a UTF-8
//! string at an arbitrary byte offset can split a code point, so [`tail`]
//! walks char boundaries from the end. A document shorter than the window
//! is returned whole — over-long windows are not an error.

use crate::output::SliceOutcome;

/// Size of the fallback window, in characters, written when the marker is
/// not found.
pub const FALLBACK_TAIL_CHARS: usize = 5000;

/// Slice `content` at the first occurrence of `marker`.
///
/// Returns the suffix starting at the marker, or the fallback tail window
/// when the marker is absent, together with the [`SliceOutcome`] describing
/// which policy applied.
///
/// An empty marker matches at index 0 and yields the whole content.
pub fn slice_at_marker<'a>(content: &'a str, marker: &str) -> (&'a str, SliceOutcome) {
    match content.find(marker) {
        Some(offset) => (&content[offset..], SliceOutcome::FromMarker { offset }),
        None => {
            let kept = tail(content, FALLBACK_TAIL_CHARS);
            (
                kept,
                SliceOutcome::FallbackTail {
                    chars: kept.chars().count(),
                },
            )
        }
    }
}

/// The final `max_chars` characters of `content`.
///
/// Returns the whole string when it has `max_chars` characters or fewer.
pub fn tail(content: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }
    match content.char_indices().rev().nth(max_chars - 1) {
        Some((idx, _)) => &content[idx..],
        None => content,
    }
}

//! Pipeline stages for PDF text extraction.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable — the slice
//! stage in particular is pure string code that carries the bulk of the
//! unit tests, with no pdfium in sight.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ text ──▶ slice
//! (URL/path) (pdfium) (marker/tail)
//! ```
//!
//! 1. [`input`] — canonicalise the user-supplied path or URL to a local
//!    file, validating `%PDF` magic bytes up front
//! 2. [`text`]  — extract per-page text; runs in `spawn_blocking` because
//!    pdfium is not async-safe
//! 3. [`slice`] — locate the marker in the joined content, or fall back to
//!    the fixed tail window

pub mod input;
pub mod slice;
pub mod text;

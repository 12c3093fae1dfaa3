//! # Inline Kinds
//!
//! Per-construct scanners that own their syntax delimiters.
//!
//! Each scanner exposes `find(span) -> Option<InlineMatch>` returning the
//! leftmost match of that construct, or `None` when the span contains no
//! well-formed occurrence. Malformed markers never error; they simply fail
//! to match.

pub mod emphasis;
pub mod image;
pub mod link;

pub use emphasis::{Bold, Italic};
pub use image::Image;
pub use link::Link;

/// Substring search starting at a byte offset, returning an absolute index.
pub(crate) fn find_from(s: &str, from: usize, pat: &str) -> Option<usize> {
    if from > s.len() {
        return None;
    }
    s[from..].find(pat).map(|k| from + k)
}

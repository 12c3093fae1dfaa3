//! # Inline Parsing
//!
//! Recursive expansion of inline constructs into element sub-trees.
//!
//! ## Architecture
//!
//! `render_inline` scans a flat text span for the leftmost-starting inline
//! construct, splits the span into before / construct / after, and recurses
//! on the construct's interior and on both outer spans. The base case (no
//! construct found) appends one text leaf. The target parent is an explicit
//! argument on every call, never an ambient capture.
//!
//! ## Precedence
//!
//! When two constructs start at the same position the order is: bold,
//! italic, image, link. Image beats link on `![…](…)` naturally because its
//! match starts one character earlier, at the `!`.
//!
//! ## Modules
//!
//! - **`types`**: `InlineMatch` describing a found construct and captures
//! - **`kinds`**: per-construct scanners with owned delimiters (Emphasis,
//!   Image, Link)
//! - **`parser`**: `render_inline` entry point and leftmost-match selection

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::render_inline;
pub use types::InlineMatch;

//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters.
//!
//! All delimiter constants and match functions live here, not scattered in
//! classifier or builder code. The classifier calls these; it never
//! hardcodes `#`, `- `, three backticks or `|` itself.

pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod table;

pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::ListItem;
pub use table::TableRow;

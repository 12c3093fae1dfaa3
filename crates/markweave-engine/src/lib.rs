pub mod dom;
pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use dom::{Dom, NodeId, NodeKind};
pub use parsing::{DocumentBuilder, ParseError, convert, parse_document};
pub use render::to_html;

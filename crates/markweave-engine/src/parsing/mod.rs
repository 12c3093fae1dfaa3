//! # Markdown Parsing
//!
//! Two-level parsing engine working one input line at a time.
//!
//! ## Levels
//!
//! 1. **Block parsing** (`blocks`): a `LineClassifier` assigns each line a
//!    `LineKind`, and a `DocumentBuilder` state machine turns classified
//!    lines into block-level elements (headings, lists, tables, code
//!    blocks, paragraphs) by mutating the element tree through a single
//!    `{insertion_point, block_state}` cursor.
//!
//! 2. **Inline parsing** (`inline`): whenever a block handler needs a span
//!    of text rendered, `render_inline` recursively expands bold, italic,
//!    image and link constructs into a sub-tree at the given parent.
//!
//! ## Key Invariants
//!
//! - `block_state == None` iff the insertion point is the document root
//!   (the body element in full-page mode)
//! - Code blocks are raw zones: their content lines are never
//!   re-interpreted as headings, lists or tables
//! - Malformed inline markers degrade to plain text, never to an error

pub mod blocks;
pub mod inline;

use crate::dom::Dom;

pub use blocks::{BlockState, DocumentBuilder, LineClassifier, LineKind};
pub use inline::render_inline;

/// Errors that abort a document parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A heading line arrived while a block construct was still open.
    /// Headings cannot nest inside lists, tables or paragraphs.
    #[error("heading line encountered inside an open {0} block")]
    HeadingInOpenBlock(&'static str),
}

/// Parses a whole document into an element tree.
///
/// `full_page` wraps the output in `<html><head></head><body>…</body></html>`;
/// otherwise the tree is rooted at an invisible pass-through container.
pub fn parse_document(input: &str, full_page: bool) -> Result<Dom, ParseError> {
    let mut builder = DocumentBuilder::new(full_page);
    for line in input.lines() {
        builder.process_line(line)?;
    }
    Ok(builder.finish())
}

/// Convenience: parse and render in one step.
pub fn convert(input: &str, full_page: bool) -> Result<String, ParseError> {
    let dom = parse_document(input, full_page)?;
    Ok(crate::render::to_html(&dom))
}

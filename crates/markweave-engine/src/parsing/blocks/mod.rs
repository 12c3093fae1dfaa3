//! # Block Parsing
//!
//! Line-at-a-time block construction.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is matched as a whole
//!    against the block openers in fixed priority order, producing a
//!    `LineKind` with the captures the handler needs (heading level, item
//!    text, table cells)
//!
//! 2. **Document Building** (`builder`): a `DocumentBuilder` holds the
//!    insertion-point cursor and the open-block state and applies one tree
//!    mutation per classified line
//!
//! ## Modules
//!
//! - **`types`**: `BlockState` and `LineKind`
//! - **`kinds`**: block-specific syntax with owned delimiters (Heading,
//!   ListItem, CodeFence, TableRow)
//! - **`classify`**: `LineClassifier` with the fixed priority order and the
//!   code-block override rule
//! - **`builder`**: `DocumentBuilder` state machine

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::DocumentBuilder;
pub use classify::LineClassifier;
pub use types::{BlockState, LineKind};

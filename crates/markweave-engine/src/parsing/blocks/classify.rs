use super::kinds::{CodeFence, Heading, ListItem, TableRow};
use super::types::{BlockState, LineKind};

/// Classifies individual lines for the block parsing phase.
///
/// Classification is whole-line: a construct either claims the entire line
/// or the line falls through to the next priority class.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`LineKind`], in fixed priority order:
    /// heading, unordered item, ordered item, code fence, table row,
    /// empty, other.
    ///
    /// While `state` is [`BlockState::CodeBlock`], every line that is not
    /// itself a fence is forced to [`LineKind::Other`] so code content is
    /// never re-interpreted as a heading, list or table.
    pub fn classify<'a>(&self, line: &'a str, state: BlockState) -> LineKind<'a> {
        if state == BlockState::CodeBlock {
            return if CodeFence::matches(line) {
                LineKind::CodeFence
            } else {
                LineKind::Other
            };
        }

        if let Some((level, title)) = Heading::capture(line) {
            return LineKind::Heading { level, title };
        }
        if let Some(text) = ListItem::unordered(line) {
            return LineKind::UnorderedListItem { text };
        }
        if let Some(text) = ListItem::ordered(line) {
            return LineKind::OrderedListItem { text };
        }
        if CodeFence::matches(line) {
            return LineKind::CodeFence;
        }
        if TableRow::matches(line) {
            return LineKind::TableRow {
                line,
                separator: TableRow::is_separator(line),
            };
        }
        if line.is_empty() {
            return LineKind::Empty;
        }
        LineKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> LineKind<'_> {
        LineClassifier.classify(line, BlockState::None)
    }

    #[test]
    fn heading_line() {
        assert_eq!(
            classify("## Two"),
            LineKind::Heading {
                level: 2,
                title: "Two"
            }
        );
    }

    #[test]
    fn unordered_item_line() {
        assert_eq!(
            classify("- milk"),
            LineKind::UnorderedListItem { text: "milk" }
        );
    }

    #[test]
    fn ordered_item_line() {
        assert_eq!(
            classify("2. eggs"),
            LineKind::OrderedListItem { text: "eggs" }
        );
    }

    #[test]
    fn fence_line() {
        assert_eq!(classify("```rust"), LineKind::CodeFence);
    }

    #[test]
    fn table_data_row() {
        assert_eq!(
            classify("|A|B|"),
            LineKind::TableRow {
                line: "|A|B|",
                separator: false
            }
        );
    }

    #[test]
    fn table_separator_row() {
        assert_eq!(
            classify("|---|---|"),
            LineKind::TableRow {
                line: "|---|---|",
                separator: true
            }
        );
    }

    #[test]
    fn empty_line() {
        assert_eq!(classify(""), LineKind::Empty);
    }

    #[test]
    fn prose_line() {
        assert_eq!(classify("just words"), LineKind::Other);
    }

    #[test]
    fn code_block_state_forces_other() {
        let c = LineClassifier;
        assert_eq!(
            c.classify("# not a heading", BlockState::CodeBlock),
            LineKind::Other
        );
        assert_eq!(
            c.classify("- not an item", BlockState::CodeBlock),
            LineKind::Other
        );
        // Even empty lines are verbatim code content.
        assert_eq!(c.classify("", BlockState::CodeBlock), LineKind::Other);
    }

    #[test]
    fn code_block_state_still_sees_fences() {
        let c = LineClassifier;
        assert_eq!(c.classify("```", BlockState::CodeBlock), LineKind::CodeFence);
    }
}

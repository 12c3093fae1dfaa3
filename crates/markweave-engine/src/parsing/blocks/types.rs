/// Which open block construct, if any, the insertion point sits inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    None,
    Paragraph,
    UnorderedList,
    OrderedList,
    Table,
    CodeBlock,
}

impl BlockState {
    /// Human-readable block name for error messages.
    pub fn describe(self) -> &'static str {
        match self {
            BlockState::None => "none",
            BlockState::Paragraph => "paragraph",
            BlockState::UnorderedList => "unordered list",
            BlockState::OrderedList => "ordered list",
            BlockState::Table => "table",
            BlockState::CodeBlock => "code block",
        }
    }
}

/// Classification of one input line, with the captures its handler needs.
///
/// Borrowed sub-spans point into the classified line; they are consumed
/// immediately by the matching `DocumentBuilder` handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#`-prefixed heading with marker length and title text.
    Heading { level: usize, title: &'a str },
    /// `- ` list item with its item text.
    UnorderedListItem { text: &'a str },
    /// `1.` style list item with its item text. The numeric prefix is not
    /// preserved in output.
    OrderedListItem { text: &'a str },
    /// A ``` fence line. Toggles code-block state, produces no content.
    CodeFence,
    /// A `|`-delimited row. Separator rows (`|---|---|`) are recognized
    /// here and consumed silently by the builder.
    TableRow { line: &'a str, separator: bool },
    /// A zero-length line.
    Empty,
    /// Ordinary prose, or any non-fence line inside an open code block.
    Other,
}

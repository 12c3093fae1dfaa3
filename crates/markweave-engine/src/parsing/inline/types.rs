use std::ops::Range;

/// A matched inline construct inside a span, with byte ranges for the
/// captures its handler needs. All ranges index into the scanned span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineMatch {
    /// `**…**` with the interior range.
    Bold { full: Range<usize>, inner: Range<usize> },
    /// `*…*` with the interior range.
    Italic { full: Range<usize>, inner: Range<usize> },
    /// `![alt](src)`. The alt text is stored verbatim, never recursed.
    Image {
        full: Range<usize>,
        alt: Range<usize>,
        src: Range<usize>,
    },
    /// `[label](href)`. The label is recursively parsed.
    Link {
        full: Range<usize>,
        label: Range<usize>,
        href: Range<usize>,
    },
}

impl InlineMatch {
    /// Start of the full match; used for leftmost-match selection.
    pub fn start(&self) -> usize {
        self.full().start
    }

    /// End of the full match; scanning resumes here.
    pub fn end(&self) -> usize {
        self.full().end
    }

    fn full(&self) -> &Range<usize> {
        match self {
            InlineMatch::Bold { full, .. }
            | InlineMatch::Italic { full, .. }
            | InlineMatch::Image { full, .. }
            | InlineMatch::Link { full, .. } => full,
        }
    }
}

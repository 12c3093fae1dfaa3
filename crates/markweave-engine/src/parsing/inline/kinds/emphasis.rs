use super::super::types::InlineMatch;
use super::find_from;

/// Bold (`**…**`) scanner with owned delimiter constant.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";

    /// Finds the leftmost bold construct.
    ///
    /// Matching is non-greedy: the earliest closing `**` wins. The interior
    /// must be non-empty and start and end with a non-space character;
    /// closers violating that are skipped, and an opener with no viable
    /// closer falls through to the next opener.
    pub fn find(s: &str) -> Option<InlineMatch> {
        let width = Self::DELIMITER.len();
        let mut open = 0;
        while let Some(i) = find_from(s, open, Self::DELIMITER) {
            let mut from = i + width;
            while let Some(j) = find_from(s, from, Self::DELIMITER) {
                if bounded_by_non_space(&s[i + width..j]) {
                    return Some(InlineMatch::Bold {
                        full: i..j + width,
                        inner: i + width..j,
                    });
                }
                from = j + 1;
            }
            open = i + 1;
        }
        None
    }
}

/// Italic (`*…*`) scanner with owned delimiter constant.
pub struct Italic;

impl Italic {
    pub const DELIMITER: char = '*';

    /// Finds the leftmost italic construct.
    ///
    /// Matching is greedy: the closer is the last `*` in the span. The
    /// interior must be non-empty but carries no whitespace constraint.
    pub fn find(s: &str) -> Option<InlineMatch> {
        let i = s.find(Self::DELIMITER)?;
        let j = s.rfind(Self::DELIMITER)?;
        if j < i + 2 {
            return None;
        }
        Some(InlineMatch::Italic {
            full: i..j + 1,
            inner: i + 1..j,
        })
    }
}

fn bounded_by_non_space(inner: &str) -> bool {
    let first = match inner.chars().next() {
        Some(c) => c,
        None => return false,
    };
    // Single-character interiors are their own first and last character.
    let last = inner.chars().next_back().unwrap_or(first);
    !first.is_whitespace() && !last.is_whitespace()
}

use super::super::types::InlineMatch;
use super::find_from;

/// Link (`[label](href)`) scanner with owned delimiter constants.
pub struct Link;

impl Link {
    pub const OPEN: &'static str = "[";
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: char = ')';

    /// Finds the leftmost well-formed link construct.
    ///
    /// Same shape as the image scanner without the leading `!`. On an
    /// `![…](…)` span this also matches at the `[`, one position after the
    /// image; leftmost-match selection in the parser lets the image win.
    pub fn find(s: &str) -> Option<InlineMatch> {
        let mut from = 0;
        while let Some(i) = find_from(s, from, Self::OPEN) {
            let label_start = i + Self::OPEN.len();
            if let Some(mid) = find_from(s, label_start, Self::MIDDLE) {
                let href_start = mid + Self::MIDDLE.len();
                if let Some(close) = s[href_start..].find(Self::CLOSE) {
                    let close = href_start + close;
                    return Some(InlineMatch::Link {
                        full: i..close + 1,
                        label: label_start..mid,
                        href: href_start..close,
                    });
                }
            }
            from = i + 1;
        }
        None
    }
}

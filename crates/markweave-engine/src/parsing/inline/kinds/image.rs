use super::super::types::InlineMatch;
use super::find_from;

/// Image (`![alt](src)`) scanner with owned delimiter constants.
pub struct Image;

impl Image {
    pub const OPEN: &'static str = "![";
    pub const MIDDLE: &'static str = "](";
    pub const CLOSE: char = ')';

    /// Finds the leftmost well-formed image construct.
    ///
    /// Captures are non-greedy: the first `](` after the opener bounds the
    /// alt text and the first `)` after that bounds the source. An opener
    /// with no closing sequence falls through to the next opener.
    pub fn find(s: &str) -> Option<InlineMatch> {
        let mut from = 0;
        while let Some(i) = find_from(s, from, Self::OPEN) {
            let alt_start = i + Self::OPEN.len();
            if let Some(mid) = find_from(s, alt_start, Self::MIDDLE) {
                let src_start = mid + Self::MIDDLE.len();
                if let Some(close) = s[src_start..].find(Self::CLOSE) {
                    let close = src_start + close;
                    return Some(InlineMatch::Image {
                        full: i..close + 1,
                        alt: alt_start..mid,
                        src: src_start..close,
                    });
                }
            }
            from = i + 1;
        }
        None
    }
}

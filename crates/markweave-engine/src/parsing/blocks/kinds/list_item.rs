/// List item syntax with owned delimiter constants.
///
/// Covers both unordered (`- `) and ordered (`1.`) item lines. The ordered
/// numeric prefix is matched but never preserved; both forms render as
/// `<li>`.
pub struct ListItem;

impl ListItem {
    /// Prefix of an unordered list item line.
    pub const UNORDERED_PREFIX: &'static str = "- ";

    /// Separator between an ordered item's number and its text.
    pub const ORDERED_DOT: char = '.';

    /// Matches a whole line as an unordered item, capturing the item text.
    pub fn unordered(line: &str) -> Option<&str> {
        line.strip_prefix(Self::UNORDERED_PREFIX)
    }

    /// Matches a whole line as an ordered item: one or more digits, a
    /// literal `.`, then the item text. A single space after the dot is
    /// swallowed so `1. text` and `1.text` capture the same item text.
    pub fn ordered(line: &str) -> Option<&str> {
        let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let rest = line[digits..].strip_prefix(Self::ORDERED_DOT)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}

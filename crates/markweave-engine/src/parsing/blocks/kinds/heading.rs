/// Heading block type with owned delimiter constant.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';

    /// Matches a whole line as a heading: one or more `#` characters, a
    /// single space, then the title text.
    ///
    /// # Returns
    /// `(level, title)` where `level` is the marker run length. Levels are
    /// not clamped; seven markers yield level 7.
    pub fn capture(line: &str) -> Option<(usize, &str)> {
        let level = line.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 {
            return None;
        }
        let rest = &line[level..];
        let title = rest.strip_prefix(' ')?;
        Some((level, title))
    }
}

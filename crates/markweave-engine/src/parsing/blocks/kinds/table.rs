/// Table row syntax with owned delimiter constant.
pub struct TableRow;

impl TableRow {
    /// The cell delimiter character.
    pub const DELIMITER: char = '|';

    /// Matches a line containing at least one `|` as a table row.
    pub fn matches(line: &str) -> bool {
        line.contains(Self::DELIMITER)
    }

    /// Recognizes a header-separator row: a non-empty run of only `-` and
    /// `|` containing at least one `-`. Separator rows produce no cells.
    pub fn is_separator(line: &str) -> bool {
        !line.is_empty()
            && line.chars().all(|c| c == '-' || c == Self::DELIMITER)
            && line.contains('-')
    }

    /// Splits a row into cell texts. One leading and one trailing `|` are
    /// stripped so `|A|B|` and `A|B` both yield two cells.
    pub fn cells(line: &str) -> Vec<&str> {
        let inner = line.strip_prefix(Self::DELIMITER).unwrap_or(line);
        let inner = inner.strip_suffix(Self::DELIMITER).unwrap_or(inner);
        inner.split(Self::DELIMITER).collect()
    }
}

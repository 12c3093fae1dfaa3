/// Code fence syntax with owned delimiter constant.
///
/// Fenced code blocks are raw zones: their content lines are rendered
/// verbatim and never re-interpreted as other block constructs.
pub struct CodeFence;

impl CodeFence {
    /// The fence marker.
    pub const FENCE: &'static str = "```";

    /// The escape substituted for each whitespace character inside code
    /// block content, so indentation survives HTML whitespace collapsing.
    pub const NBSP: &'static str = "&nbsp;";

    /// Matches a whole line as a fence: three backticks, optionally
    /// followed by a single language token.
    pub fn matches(line: &str) -> bool {
        match line.strip_prefix(Self::FENCE) {
            Some(rest) => rest.chars().all(|c| !c.is_whitespace() && c != '`'),
            None => false,
        }
    }

    /// Prepares a code block content line for verbatim rendering: every
    /// whitespace character becomes [`Self::NBSP`].
    pub fn escape_content(line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        for c in line.chars() {
            if c.is_whitespace() {
                out.push_str(Self::NBSP);
            } else {
                out.push(c);
            }
        }
        out
    }
}

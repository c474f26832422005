use super::indent::measure_indent;

/// ATX heading syntax: `#` to `######`, then a space or end of line.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;
    /// Headings may be indented by at most this many columns.
    const MAX_INDENT: usize = 3;

    /// Parses a heading line into `(level, title)`.
    ///
    /// The title is trimmed and a closing `#` run is dropped when it is
    /// separated from the title by whitespace (`## Title ##`), so `# C#`
    /// keeps its title intact.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let (columns, offset) = measure_indent(line);
        if columns > Self::MAX_INDENT {
            return None;
        }
        let rest = &line[offset..];
        let hashes = rest.bytes().take_while(|b| *b == Self::MARKER as u8).count();
        if hashes == 0 || hashes > usize::from(Self::MAX_LEVEL) {
            return None;
        }
        let after = &rest[hashes..];
        if !after.is_empty() && !after.starts_with([' ', '\t']) {
            return None;
        }
        Some((hashes as u8, Self::strip_closing(after.trim())))
    }

    fn strip_closing(title: &str) -> &str {
        let without = title.trim_end_matches(Self::MARKER);
        if without.is_empty() {
            ""
        } else if without.ends_with([' ', '\t']) {
            without.trim_end()
        } else {
            title
        }
    }
}

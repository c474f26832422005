/// Blockquote syntax: one or more `>` markers, spaces allowed between them.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    pub fn strip_prefixes(s: &str) -> (usize, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0usize;

        loop {
            while i < b.len() && matches!(b[i], b' ' | b'\t') {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                depth += 1;
                i += 1;
            } else {
                break;
            }
        }
        (depth, i)
    }

    /// Parses a quote line into `(depth, content)`.
    pub fn parse(line: &str) -> Option<(usize, &str)> {
        let (depth, offset) = Self::strip_prefixes(line);
        (depth > 0).then(|| (depth, line[offset..].trim()))
    }
}

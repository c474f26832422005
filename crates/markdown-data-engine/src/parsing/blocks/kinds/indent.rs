/// Columns per nesting level. A tab counts as this many columns when measuring
/// indentation, and the renderer indents nested items by this many spaces.
pub const INDENT_WIDTH: usize = 4;

/// Measures leading whitespace, returning `(columns, byte_offset)`.
///
/// A space is one column and a tab is [`INDENT_WIDTH`] columns.
pub fn measure_indent(s: &str) -> (usize, usize) {
    let mut columns = 0;
    for (i, b) in s.bytes().enumerate() {
        match b {
            b' ' => columns += 1,
            b'\t' => columns += INDENT_WIDTH,
            _ => return (columns, i),
        }
    }
    (columns, s.len())
}

/// A single source line with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    /// Line text without its terminator.
    pub text: &'a str,
}

/// Splits text into numbered lines.
///
/// Uses [`str::lines`], so `\n` and `\r\n` both terminate a line and a final
/// terminator does not produce an extra empty line.
pub fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.lines().enumerate().map(|(i, text)| Line {
        number: i + 1,
        text,
    })
}

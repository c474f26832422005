/// Pipe table syntax.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';
    const ESCAPED_PIPE: &'static str = "\\|";

    /// Splits a row into trimmed cells, or `None` if the line is not a row.
    ///
    /// A row needs at least one unescaped `|` and one non-blank cell once the
    /// outer pipes are dropped. `\|` inside a cell reads as a literal pipe.
    pub fn cells(line: &str) -> Option<Vec<String>> {
        let trimmed = line.trim();
        let segments = Self::split_unescaped(trimmed);
        if segments.len() < 2 {
            return None;
        }
        let start = usize::from(trimmed.starts_with(Self::PIPE));
        let end = segments.len() - usize::from(Self::ends_with_pipe(trimmed));
        let cells: Vec<String> = segments
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(|s| s.trim().replace(Self::ESCAPED_PIPE, "|"))
            .collect();
        if cells.iter().all(|c| c.is_empty()) {
            return None;
        }
        Some(cells)
    }

    /// Whether the line is a header/body separator such as `|---|:---:|`.
    pub fn is_separator(line: &str) -> bool {
        let t = line.trim();
        t.contains('-')
            && t.contains(Self::PIPE)
            && t.chars()
                .all(|c| matches!(c, '-' | ':' | '|') || c.is_whitespace())
    }

    /// Escapes literal pipes so a cell survives a parse.
    pub fn escape(cell: &str) -> String {
        cell.replace(Self::PIPE, Self::ESCAPED_PIPE)
    }

    fn ends_with_pipe(trimmed: &str) -> bool {
        trimmed.ends_with(Self::PIPE) && !trimmed.ends_with(Self::ESCAPED_PIPE)
    }

    fn split_unescaped(s: &str) -> Vec<&str> {
        let mut segments = vec![];
        let mut start = 0;
        let mut escaped = false;
        for (i, c) in s.char_indices() {
            match c {
                '\\' if !escaped => escaped = true,
                '|' if !escaped => {
                    segments.push(&s[start..i]);
                    start = i + 1;
                }
                _ => escaped = false,
            }
            if c != '\\' {
                escaped = false;
            }
        }
        segments.push(&s[start..]);
        segments
    }
}

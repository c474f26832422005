use super::indent::measure_indent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    fn byte(self) -> u8 {
        match self {
            FenceKind::Backticks => b'`',
            FenceKind::Tildes => b'~',
        }
    }
}

/// The exact delimiter that opened a fence. Only the same run closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceMarker {
    pub kind: FenceKind,
    pub len: usize,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";
    pub const MIN_LEN: usize = 3;
    const MAX_INDENT: usize = 3;

    /// Recognizes an opening fence, returning its marker and language hint.
    pub fn open(line: &str) -> Option<(FenceMarker, Option<&str>)> {
        let (columns, offset) = measure_indent(line);
        if columns > Self::MAX_INDENT {
            return None;
        }
        let rest = &line[offset..];
        let kind = if rest.starts_with(Self::BACKTICKS) {
            FenceKind::Backticks
        } else if rest.starts_with(Self::TILDES) {
            FenceKind::Tildes
        } else {
            return None;
        };
        let len = rest.bytes().take_while(|b| *b == kind.byte()).count();
        let language = rest[len..].trim();
        Some((
            FenceMarker { kind, len },
            (!language.is_empty()).then_some(language),
        ))
    }

    pub fn closes(marker: FenceMarker, line: &str) -> bool {
        let t = line.trim();
        t.len() == marker.len && t.bytes().all(|b| b == marker.kind.byte())
    }

    /// The shortest backtick fence (at least three) that no line of `content`
    /// would close.
    pub fn fence_for(content: &str) -> String {
        let longest = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && l.bytes().all(|b| b == b'`'))
            .map(str::len)
            .max()
            .unwrap_or(0);
        "`".repeat(Self::MIN_LEN.max(longest + 1))
    }
}

use super::kinds::{
    BlockQuote, CodeFence, Definition, FenceMarker, FrontMatter, Heading, ListLine, ListMarker,
    Separator, TableRow,
};

/// What the builder is in the middle of, as far as classification cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No content seen yet; a `---` here opens front matter.
    Document,
    Body,
    /// Inside a fenced code block opened by this marker.
    Fence(FenceMarker),
    /// Inside front matter.
    Metadata,
}

/// Classification of a single line, with the fields extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    MetadataOpen,
    MetadataClose,
    MetadataEntry {
        key: &'a str,
        value: &'a str,
    },
    /// A line inside front matter that is not `key: value`.
    MetadataInvalid,
    Header {
        level: u8,
        title: &'a str,
    },
    FenceOpen {
        marker: FenceMarker,
        language: Option<&'a str>,
    },
    FenceClose,
    FenceContent(&'a str),
    TableRow(Vec<String>),
    TableSeparator,
    ListItem(ListLine<'a>),
    Quote {
        depth: usize,
        content: &'a str,
    },
    Definition(&'a str),
    Separator,
    Paragraph(&'a str),
}

/// Classifies individual lines for the block parsing phase.
///
/// Classification only looks at the line and the mode it is given. Whether a
/// table row really starts a table, or a definition really has a term, is
/// decided by the builder, which can see its neighbours.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'a>(&self, text: &'a str, mode: Mode) -> LineClass<'a> {
        self.classify_with(text, mode, true)
    }

    /// Like [`classify`](Self::classify) with the table rules switched off,
    /// for rows that turned out not to belong to a table.
    pub fn classify_without_tables<'a>(&self, text: &'a str, mode: Mode) -> LineClass<'a> {
        self.classify_with(text, mode, false)
    }

    fn classify_with<'a>(&self, text: &'a str, mode: Mode, tables: bool) -> LineClass<'a> {
        match mode {
            Mode::Fence(marker) => {
                return if CodeFence::closes(marker, text) {
                    LineClass::FenceClose
                } else {
                    LineClass::FenceContent(text)
                };
            }
            Mode::Metadata => return Self::metadata_line(text),
            Mode::Document if FrontMatter::is_delimiter(text) => return LineClass::MetadataOpen,
            Mode::Document | Mode::Body => {}
        }

        if text.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some((level, title)) = Heading::parse(text) {
            return LineClass::Header { level, title };
        }
        if let Some((marker, language)) = CodeFence::open(text) {
            return LineClass::FenceOpen { marker, language };
        }
        if tables {
            if TableRow::is_separator(text) {
                return LineClass::TableSeparator;
            }
            if let Some(cells) = TableRow::cells(text) {
                return LineClass::TableRow(cells);
            }
        }
        if let Some(item) = ListMarker::parse(text) {
            return LineClass::ListItem(item);
        }
        if let Some((depth, content)) = BlockQuote::parse(text) {
            return LineClass::Quote { depth, content };
        }
        if let Some(definition) = Definition::parse(text) {
            return LineClass::Definition(definition);
        }
        if Separator::matches(text) {
            return LineClass::Separator;
        }
        LineClass::Paragraph(text)
    }

    fn metadata_line(text: &str) -> LineClass<'_> {
        if FrontMatter::is_delimiter(text) {
            LineClass::MetadataClose
        } else if text.trim().is_empty() {
            LineClass::Blank
        } else if let Some((key, value)) = FrontMatter::entry(text) {
            LineClass::MetadataEntry { key, value }
        } else {
            LineClass::MetadataInvalid
        }
    }
}

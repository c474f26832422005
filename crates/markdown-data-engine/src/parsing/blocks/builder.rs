use crate::{
    models::Element,
    parsing::{Located, lines::Line},
};

use super::{
    classify::{LineClass, MarkdownLineClassifier, Mode},
    kinds::FenceMarker,
    scanners::{DefListScan, FenceScan, ListScan, MetadataScan, QuoteScan, TableScan},
};

/// The multi-line element currently being collected, if any.
#[derive(Debug, Default)]
enum Pending<'a> {
    #[default]
    None,
    List(ListScan),
    Table(TableScan),
    Quote(QuoteScan),
    DefList(DefListScan),
    Fence(FenceScan<'a>),
    Metadata(MetadataScan<'a>),
}

/// Push-based state machine turning classified lines into elements.
///
/// Each pushed line either continues the pending scan or finishes it and
/// opens whatever the line starts. Callers pass the following line as well,
/// which is how a table header row checks for its separator row.
pub struct BlockBuilder<'a> {
    classifier: MarkdownLineClassifier,
    pending: Pending<'a>,
    /// Whether any non-blank line has been seen; front matter must come first.
    seen_content: bool,
    /// Whether the previous line produced a paragraph, making it a possible term.
    prev_was_paragraph: bool,
    /// Markers of fences abandoned at end of input. Nothing after them closes
    /// these markers, so later openers using one are read as text at once.
    unclosed_fences: Vec<FenceMarker>,
    out: Vec<Located>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            pending: Pending::None,
            seen_content: false,
            prev_was_paragraph: false,
            unclosed_fences: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, line: Line<'a>, next: Option<Line<'a>>) {
        let class = self.classify(line, next);
        log::trace!("line {}: {:?}", line.number, class);
        let was_paragraph = std::mem::take(&mut self.prev_was_paragraph);

        match std::mem::take(&mut self.pending) {
            Pending::None => {}
            Pending::Fence(scan) => return self.continue_fence(scan, line, class),
            Pending::Metadata(scan) => return self.continue_metadata(scan, line, class, next),
            Pending::List(mut scan) => {
                if let LineClass::ListItem(item) = &class {
                    if scan.accepts(item) {
                        scan.push(item, line.number);
                        self.pending = Pending::List(scan);
                        return;
                    }
                }
                self.out.push(scan.finish());
            }
            Pending::Table(mut scan) => match class {
                LineClass::TableRow(cells) => {
                    scan.push_row(cells, line.number);
                    self.pending = Pending::Table(scan);
                    return;
                }
                LineClass::TableSeparator => {
                    scan.skip_separator(line.number);
                    self.pending = Pending::Table(scan);
                    return;
                }
                _ => self.out.push(scan.finish()),
            },
            Pending::Quote(mut scan) => {
                if let LineClass::Quote { depth, content } = class {
                    scan.push(depth, content, line.number);
                    self.pending = Pending::Quote(scan);
                    return;
                }
                self.out.push(scan.finish());
            }
            Pending::DefList(mut scan) => {
                if let LineClass::Definition(definition) = class {
                    scan.push(definition, line.number);
                    self.pending = Pending::DefList(scan);
                    return;
                }
                self.out.push(scan.finish());
            }
        }

        self.open(line, class, was_paragraph);
    }

    pub fn finish(mut self) -> Vec<Located> {
        // EOF flush. Abandoned fences and front matter put their lines back
        // through `push`, which may leave something new pending.
        loop {
            match std::mem::take(&mut self.pending) {
                Pending::None => break,
                Pending::List(scan) => self.out.push(scan.finish()),
                Pending::Table(scan) => self.out.push(scan.finish()),
                Pending::Quote(scan) => self.out.push(scan.finish()),
                Pending::DefList(scan) => self.out.push(scan.finish()),
                Pending::Fence(scan) => {
                    log::debug!(
                        "code fence opened on line {} never closes, reading it as text",
                        scan.opener_line()
                    );
                    self.unclosed_fences.push(scan.marker());
                    let (opener, lines) = scan.abandon();
                    self.out.push(opener);
                    self.prev_was_paragraph = true;
                    self.replay(lines, None);
                }
                Pending::Metadata(scan) => {
                    log::debug!("front matter never closes, reading it as text");
                    let (separator, lines) = scan.abandon();
                    self.out.push(separator);
                    self.prev_was_paragraph = false;
                    self.replay(lines, None);
                }
            }
        }
        self.out
    }

    fn mode(&self) -> Mode {
        match &self.pending {
            Pending::Fence(scan) => Mode::Fence(scan.marker()),
            Pending::Metadata(_) => Mode::Metadata,
            _ if !self.seen_content => Mode::Document,
            _ => Mode::Body,
        }
    }

    /// Classifies a line, demoting table rows that cannot be part of a table.
    fn classify(&self, line: Line<'a>, next: Option<Line<'a>>) -> LineClass<'a> {
        let mode = self.mode();
        let class = self.classifier.classify(line.text, mode);
        if matches!(self.pending, Pending::Table(_)) {
            return class;
        }
        match class {
            LineClass::TableRow(_) if !self.separator_follows(next) => {
                log::debug!(
                    "line {}: table row without a separator row, reading it without table rules",
                    line.number
                );
                self.classifier.classify_without_tables(line.text, mode)
            }
            LineClass::TableSeparator => self.classifier.classify_without_tables(line.text, mode),
            class => class,
        }
    }

    fn separator_follows(&self, next: Option<Line<'a>>) -> bool {
        next.is_some_and(|n| {
            matches!(
                self.classifier.classify(n.text, Mode::Body),
                LineClass::TableSeparator
            )
        })
    }

    fn open(&mut self, line: Line<'a>, class: LineClass<'a>, was_paragraph: bool) {
        let n = line.number;
        if !matches!(class, LineClass::Blank) {
            self.seen_content = true;
        }

        match class {
            LineClass::Blank => {}
            LineClass::MetadataOpen => self.pending = Pending::Metadata(MetadataScan::start(line)),
            LineClass::Header { level, title } => self.emit(Element::header(level, title), n),
            LineClass::FenceOpen { marker, .. } if self.unclosed_fences.contains(&marker) => {
                self.emit_paragraph(line.text, n);
            }
            LineClass::FenceOpen { marker, language } => {
                self.pending = Pending::Fence(FenceScan::start(line, marker, language));
            }
            LineClass::TableRow(cells) => self.pending = Pending::Table(TableScan::start(cells, n)),
            LineClass::ListItem(item) => self.pending = Pending::List(ListScan::start(&item, n)),
            LineClass::Quote { depth, content } => {
                self.pending = Pending::Quote(QuoteScan::start(depth, content, n));
            }
            LineClass::Definition(definition) => self.open_definition(line, definition, was_paragraph),
            LineClass::Separator => self.emit(Element::separator(), n),
            LineClass::Paragraph(text) => self.emit_paragraph(text, n),
            // Mode-specific classes never reach here in body mode.
            LineClass::TableSeparator
            | LineClass::MetadataClose
            | LineClass::MetadataEntry { .. }
            | LineClass::MetadataInvalid
            | LineClass::FenceClose
            | LineClass::FenceContent(_) => self.emit_paragraph(line.text, n),
        }
    }

    /// A definition line turns the paragraph directly above it into its term.
    fn open_definition(&mut self, line: Line<'a>, definition: &str, was_paragraph: bool) {
        let has_term = was_paragraph
            && matches!(
                self.out.last(),
                Some(Located {
                    element: Element::Paragraph(_),
                    ..
                })
            );
        if has_term {
            if let Some(Located {
                element: Element::Paragraph(term),
                start_line,
                ..
            }) = self.out.pop()
            {
                self.pending = Pending::DefList(DefListScan::start(
                    &term,
                    start_line,
                    definition,
                    line.number,
                ));
                return;
            }
        }
        log::debug!(
            "line {}: definition without a term, reading it as a paragraph",
            line.number
        );
        self.emit_paragraph(line.text, line.number);
    }

    fn continue_fence(&mut self, mut scan: FenceScan<'a>, line: Line<'a>, class: LineClass<'a>) {
        if matches!(class, LineClass::FenceClose) {
            self.out.push(scan.close(line));
        } else {
            scan.push(line);
            self.pending = Pending::Fence(scan);
        }
    }

    fn continue_metadata(
        &mut self,
        mut scan: MetadataScan<'a>,
        line: Line<'a>,
        class: LineClass<'a>,
        next: Option<Line<'a>>,
    ) {
        match class {
            LineClass::MetadataClose => self.out.push(scan.close(line)),
            LineClass::MetadataEntry { key, value } => {
                scan.push_entry(line, key, value);
                self.pending = Pending::Metadata(scan);
            }
            LineClass::Blank => {
                scan.push_blank(line);
                self.pending = Pending::Metadata(scan);
            }
            _ => {
                log::debug!(
                    "line {}: not a `key: value` entry, reading front matter as text",
                    line.number
                );
                let (separator, mut lines) = scan.abandon();
                self.out.push(separator);
                lines.push(line);
                self.replay(lines, next);
            }
        }
    }

    /// Scans buffered lines again as ordinary content.
    fn replay(&mut self, lines: Vec<Line<'a>>, tail: Option<Line<'a>>) {
        for (i, line) in lines.iter().enumerate() {
            let next = lines.get(i + 1).copied().or(tail);
            self.push(*line, next);
        }
    }

    fn emit(&mut self, element: Element, line: usize) {
        self.out.push(Located::new(element, line, line));
    }

    fn emit_paragraph(&mut self, text: &str, line: usize) {
        self.emit(Element::paragraph(text), line);
        self.prev_was_paragraph = true;
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

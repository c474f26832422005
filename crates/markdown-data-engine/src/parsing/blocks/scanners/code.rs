use crate::{
    models::{Code, Element},
    parsing::{Located, blocks::kinds::FenceMarker, lines::Line},
};

/// Buffers the raw lines of a fenced code block until its closing marker.
#[derive(Debug)]
pub struct FenceScan<'a> {
    opener: Line<'a>,
    marker: FenceMarker,
    language: Option<&'a str>,
    body: Vec<Line<'a>>,
}

impl<'a> FenceScan<'a> {
    pub fn start(opener: Line<'a>, marker: FenceMarker, language: Option<&'a str>) -> Self {
        Self {
            opener,
            marker,
            language,
            body: vec![],
        }
    }

    pub fn marker(&self) -> FenceMarker {
        self.marker
    }

    pub fn opener_line(&self) -> usize {
        self.opener.number
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.body.push(line);
    }

    pub fn close(self, closer: Line<'a>) -> Located {
        let content = self
            .body
            .iter()
            .map(|l| l.text)
            .collect::<Vec<_>>()
            .join("\n");
        Located::new(
            Element::Code(Code::new(self.language, content)),
            self.opener.number,
            closer.number,
        )
    }

    /// Gives up on a fence that never closed.
    ///
    /// Returns the opening line as a paragraph and the buffered lines, which
    /// the caller scans again as ordinary content.
    pub fn abandon(self) -> (Located, Vec<Line<'a>>) {
        let opener = Located::new(
            Element::paragraph(self.opener.text),
            self.opener.number,
            self.opener.number,
        );
        (opener, self.body)
    }
}

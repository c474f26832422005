use crate::{
    models::{Element, Metadata},
    parsing::{Located, blocks::kinds::FrontMatter, lines::Line},
};

/// Collects front matter entries, keeping the raw lines in case the block
/// turns out to be invalid.
#[derive(Debug)]
pub struct MetadataScan<'a> {
    opener: Line<'a>,
    metadata: Metadata,
    buffered: Vec<Line<'a>>,
}

impl<'a> MetadataScan<'a> {
    pub fn start(opener: Line<'a>) -> Self {
        Self {
            opener,
            metadata: Metadata::new(),
            buffered: vec![],
        }
    }

    pub fn push_entry(&mut self, line: Line<'a>, key: &str, value: &str) {
        self.metadata.insert(key, FrontMatter::value(value));
        self.buffered.push(line);
    }

    pub fn push_blank(&mut self, line: Line<'a>) {
        self.buffered.push(line);
    }

    pub fn close(self, closer: Line<'a>) -> Located {
        Located::new(
            Element::Metadata(self.metadata),
            self.opener.number,
            closer.number,
        )
    }

    /// Gives up on the block: the opener becomes a separator and the buffered
    /// lines go back to the caller to be scanned as ordinary content.
    pub fn abandon(self) -> (Located, Vec<Line<'a>>) {
        let separator = Located::new(
            Element::separator(),
            self.opener.number,
            self.opener.number,
        );
        (separator, self.buffered)
    }
}

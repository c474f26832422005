use crate::{
    models::{DefList, Element},
    parsing::Located,
};

/// Collects the `: definition` lines under a term.
#[derive(Debug)]
pub struct DefListScan {
    term: String,
    definitions: Vec<String>,
    start_line: usize,
    end_line: usize,
}

impl DefListScan {
    /// Starts from the paragraph that turned out to be a term.
    pub fn start(term: &str, term_line: usize, definition: &str, line: usize) -> Self {
        Self {
            term: term.trim().to_string(),
            definitions: vec![definition.to_string()],
            start_line: term_line,
            end_line: line,
        }
    }

    pub fn push(&mut self, definition: &str, line: usize) {
        self.definitions.push(definition.to_string());
        self.end_line = line;
    }

    pub fn finish(self) -> Located {
        Located::new(
            Element::DefList(DefList {
                term: self.term,
                definitions: self.definitions,
            }),
            self.start_line,
            self.end_line,
        )
    }
}

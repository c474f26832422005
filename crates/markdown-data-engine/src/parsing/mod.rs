pub mod blocks;
pub mod lines;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::models::Element;
use blocks::BlockBuilder;
use lines::lines;

/// An element with the source lines it came from (1-based, inclusive).
///
/// Serializes flat: `{"header": {...}, "start_line": 1, "end_line": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Located {
    #[serde(flatten)]
    pub element: Element,
    pub start_line: usize,
    pub end_line: usize,
}

impl Located {
    pub fn new(element: Element, start_line: usize, end_line: usize) -> Self {
        Self {
            element,
            start_line,
            end_line,
        }
    }
}

/// Parses markdown into elements, keeping line provenance.
pub fn parse_located(text: &str) -> Vec<Located> {
    let mut builder = BlockBuilder::new();
    let mut it = lines(text).peekable();

    while let Some(line) = it.next() {
        builder.push(line, it.peek().copied());
    }

    builder.finish()
}

/// Parses markdown into elements in document order.
///
/// Never fails: anything that does not form a valid block is kept as
/// paragraphs or separators.
pub fn parse(text: &str) -> Vec<Element> {
    parse_located(text)
        .into_iter()
        .map(|located| located.element)
        .collect()
}

use crate::{
    models::{Blockquote, Element, QuoteItem},
    parsing::{
        Located,
        blocks::containers::{ContainerStack, Nested},
    },
};

impl Nested for QuoteItem {
    fn adopt(&mut self, child: Self) {
        self.items.push(child);
    }
}

/// Collects a run of `>` lines, nesting by marker count.
#[derive(Debug)]
pub struct QuoteScan {
    items: ContainerStack<QuoteItem>,
    start_line: usize,
    end_line: usize,
}

impl QuoteScan {
    pub fn start(depth: usize, content: &str, line: usize) -> Self {
        let mut scan = Self {
            items: ContainerStack::new(),
            start_line: line,
            end_line: line,
        };
        scan.push(depth, content, line);
        scan
    }

    pub fn push(&mut self, depth: usize, content: &str, line: usize) {
        self.items.push(depth, QuoteItem::new(content));
        self.end_line = line;
    }

    pub fn finish(self) -> Located {
        Located::new(
            Element::Blockquote(Blockquote {
                items: self.items.finish(),
            }),
            self.start_line,
            self.end_line,
        )
    }
}

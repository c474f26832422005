use crate::{
    models::{Element, List, ListItem, ListKind},
    parsing::{
        Located,
        blocks::{
            containers::{ContainerStack, Nested},
            kinds::ListLine,
        },
    },
};

impl Nested for ListItem {
    fn adopt(&mut self, child: Self) {
        self.items.push(child);
    }
}

/// Collects a run of list items of one kind, nesting by indentation.
#[derive(Debug)]
pub struct ListScan {
    kind: ListKind,
    items: ContainerStack<ListItem>,
    start_line: usize,
    end_line: usize,
}

impl ListScan {
    pub fn start(item: &ListLine<'_>, line: usize) -> Self {
        let mut scan = Self {
            kind: item.kind,
            items: ContainerStack::new(),
            start_line: line,
            end_line: line,
        };
        scan.push(item, line);
        scan
    }

    /// Switching between ordered and unordered markers ends the list.
    pub fn accepts(&self, item: &ListLine<'_>) -> bool {
        item.kind == self.kind
    }

    pub fn push(&mut self, item: &ListLine<'_>, line: usize) {
        let node = ListItem {
            content: item.content.to_string(),
            task: item.task,
            items: vec![],
        };
        self.items.push(item.indent, node);
        self.end_line = line;
    }

    pub fn finish(self) -> Located {
        Located::new(
            Element::List(List {
                kind: self.kind,
                items: self.items.finish(),
            }),
            self.start_line,
            self.end_line,
        )
    }
}

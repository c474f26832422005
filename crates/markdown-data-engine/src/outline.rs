//! Nested view of an element sequence, grouped under headers.
//!
//! A header opens a section that collects everything up to the next header of
//! the same or a shallower level. Sibling keys are made unique with
//! [`KeyDeduper`], so a second table under one section becomes `table2`.

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{keys::KeyDeduper, models::Element};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    pub key: String,
    pub node: OutlineNode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineNode {
    Section(Section),
    Leaf(Element),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub level: u8,
    pub title: String,
    pub children: Vec<OutlineEntry>,
}

/// A section under construction, with the key it will have in its parent.
struct Frame {
    key: String,
    section: Section,
    keys: KeyDeduper,
}

impl Frame {
    fn new(key: String, level: u8, title: String) -> Self {
        Self {
            key,
            section: Section {
                level,
                title,
                children: vec![],
            },
            keys: KeyDeduper::new(),
        }
    }

    fn add(&mut self, base: &str, node: OutlineNode) {
        let key = self.keys.key(base);
        self.section.children.push(OutlineEntry { key, node });
    }

    fn reserve_key(&mut self, base: &str) -> String {
        self.keys.key(base)
    }
}

struct OutlineBuilder {
    root: Frame,
    open: Vec<Frame>,
}

impl OutlineBuilder {
    fn new() -> Self {
        Self {
            root: Frame::new(String::new(), 0, String::new()),
            open: vec![],
        }
    }

    fn top(&mut self) -> &mut Frame {
        self.open.last_mut().unwrap_or(&mut self.root)
    }

    fn push(&mut self, element: &Element) {
        match element {
            Element::Header(header) => {
                while self.open.last().is_some_and(|f| f.section.level >= header.level) {
                    self.close_top();
                }
                let key = self.top().reserve_key(&header.title);
                self.open
                    .push(Frame::new(key, header.level, header.title.clone()));
            }
            Element::Metadata(_) => self
                .root
                .add(element.kind().name(), OutlineNode::Leaf(element.clone())),
            other => self
                .top()
                .add(other.kind().name(), OutlineNode::Leaf(other.clone())),
        }
    }

    fn close_top(&mut self) {
        if let Some(frame) = self.open.pop() {
            let entry = OutlineEntry {
                key: frame.key,
                node: OutlineNode::Section(frame.section),
            };
            self.top().section.children.push(entry);
        }
    }

    fn finish(mut self) -> Outline {
        while !self.open.is_empty() {
            self.close_top();
        }
        Outline {
            entries: self.root.section.children,
        }
    }
}

impl Outline {
    pub fn build(elements: &[Element]) -> Self {
        let mut builder = OutlineBuilder::new();
        for element in elements {
            builder.push(element);
        }
        builder.finish()
    }

    pub fn get(&self, key: &str) -> Option<&OutlineNode> {
        find(&self.entries, key)
    }

    /// Indented text rendering, one entry per line.
    ///
    /// Sections show as `#` markers and title, leaves as their key. Entries
    /// deeper than `max_depth` (0 = top level only) are left out.
    pub fn tree_lines(&self, max_depth: Option<usize>) -> Vec<String> {
        let mut out = vec![];
        write_tree(&self.entries, 0, max_depth, &mut out);
        out
    }
}

impl Section {
    pub fn get(&self, key: &str) -> Option<&OutlineNode> {
        find(&self.children, key)
    }
}

fn find<'a>(entries: &'a [OutlineEntry], key: &str) -> Option<&'a OutlineNode> {
    entries.iter().find(|e| e.key == key).map(|e| &e.node)
}

fn write_tree(
    entries: &[OutlineEntry],
    depth: usize,
    max_depth: Option<usize>,
    out: &mut Vec<String>,
) {
    if max_depth.is_some_and(|max| depth > max) {
        return;
    }
    let indent = "  ".repeat(depth);
    for entry in entries {
        match &entry.node {
            OutlineNode::Section(section) => {
                let marker = "#".repeat(usize::from(section.level));
                out.push(format!("{indent}{marker} {}", section.title));
                write_tree(&section.children, depth + 1, max_depth, out);
            }
            OutlineNode::Leaf(_) => out.push(format!("{indent}{}", entry.key)),
        }
    }
}

struct Entries<'a>(&'a [OutlineEntry]);

impl Serialize for Entries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(&entry.key, &entry.node)?;
        }
        map.end()
    }
}

impl Serialize for Outline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Entries(&self.entries).serialize(serializer)
    }
}

impl Serialize for OutlineNode {
    /// Sections become nested objects; leaves serialize as their bare payload.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OutlineNode::Section(section) => Entries(&section.children).serialize(serializer),
            OutlineNode::Leaf(element) => match element {
                Element::Metadata(v) => v.serialize(serializer),
                Element::Header(v) => v.serialize(serializer),
                Element::Paragraph(v) => v.serialize(serializer),
                Element::List(v) => v.serialize(serializer),
                Element::Table(v) => v.serialize(serializer),
                Element::Code(v) => v.serialize(serializer),
                Element::DefList(v) => v.serialize(serializer),
                Element::Blockquote(v) => v.serialize(serializer),
                Element::Separator(v) => v.serialize(serializer),
            },
        }
    }
}

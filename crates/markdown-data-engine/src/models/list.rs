use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    #[serde(rename = "type")]
    pub kind: ListKind,
    pub items: Vec<ListItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    #[serde(alias = "ol")]
    Ordered,
    #[serde(alias = "ul")]
    Unordered,
}

impl ListKind {
    pub fn name(self) -> &'static str {
        match self {
            ListKind::Ordered => "ordered",
            ListKind::Unordered => "unordered",
        }
    }
}

/// Checkbox state of a task list item. Items without a checkbox carry `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    Unchecked,
    Checked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub content: String,
    #[serde(default)]
    pub task: Option<Task>,
    #[serde(default)]
    pub items: Vec<ListItem>,
}

impl ListItem {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            task: None,
            items: vec![],
        }
    }

    pub fn with_task(mut self, task: Task) -> Self {
        self.task = Some(task);
        self
    }

    pub fn with_items(mut self, items: Vec<ListItem>) -> Self {
        self.items = items;
        self
    }

    /// Visits this item and every descendant, depth first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a ListItem)) {
        visit(self);
        for child in &self.items {
            child.walk(visit);
        }
    }
}

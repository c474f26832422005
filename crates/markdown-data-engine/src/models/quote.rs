use serde::{Deserialize, Serialize};

/// A run of `>` lines. Nesting follows the number of `>` markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blockquote {
    pub items: Vec<QuoteItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteItem {
    pub content: String,
    #[serde(default)]
    pub items: Vec<QuoteItem>,
}

impl QuoteItem {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            items: vec![],
        }
    }

    pub fn with_items(mut self, items: Vec<QuoteItem>) -> Self {
        self.items = items;
        self
    }

    /// Depth of the deepest item below and including this one, counting this item as 1.
    pub fn depth(&self) -> usize {
        1 + self.items.iter().map(QuoteItem::depth).max().unwrap_or(0)
    }
}

impl Blockquote {
    pub fn depth(&self) -> usize {
        self.items.iter().map(QuoteItem::depth).max().unwrap_or(0)
    }
}

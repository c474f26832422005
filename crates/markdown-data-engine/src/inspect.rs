//! Aggregate statistics over a parsed sequence.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::{Element, ElementKind, ListItem, Task};

/// Statistics per element kind, for the kinds that occur.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Inspection(BTreeMap<ElementKind, KindStats>);

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct KindStats {
    pub count: usize,
    /// Indices into the inspected sequence, ascending.
    pub positions: Vec<usize>,
    pub variants: BTreeSet<String>,
    #[serde(skip_serializing_if = "Summary::is_empty")]
    pub summary: Summary,
}

/// Per-kind summary. Only the fields relevant to a kind are ever filled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    /// Header level histogram.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub levels: BTreeMap<u8, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_stats: Option<TaskStats>,
    /// Code block count per language.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub languages: BTreeMap<String, usize>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub column_counts: BTreeSet<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cells: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_nesting_depth: Option<usize>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskStats {
    pub checked: usize,
    pub unchecked: usize,
    pub total_tasks: usize,
}

pub const NO_LANGUAGE: &str = "no_language";

impl Inspection {
    pub fn get(&self, kind: ElementKind) -> Option<&KindStats> {
        self.0.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementKind, &KindStats)> {
        self.0.iter().map(|(kind, stats)| (*kind, stats))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Computes counts, positions, variants and summaries in a single pass.
pub fn inspect(elements: &[Element]) -> Inspection {
    let mut kinds: BTreeMap<ElementKind, KindStats> = BTreeMap::new();

    for (i, element) in elements.iter().enumerate() {
        let stats = kinds.entry(element.kind()).or_default();
        stats.count += 1;
        stats.positions.push(i);

        match element {
            Element::Header(header) => {
                stats.variants.insert(format!("h{}", header.level));
                *stats.summary.levels.entry(header.level).or_default() += 1;
            }
            Element::List(list) => {
                stats.variants.insert(list.kind.name().to_string());
                let tasks = count_tasks(&list.items);
                if tasks.total_tasks > 0 {
                    stats.variants.insert("task".to_string());
                    let total = stats.summary.task_stats.get_or_insert_with(TaskStats::default);
                    total.checked += tasks.checked;
                    total.unchecked += tasks.unchecked;
                    total.total_tasks += tasks.total_tasks;
                }
            }
            Element::Code(code) => {
                let language = code.language.as_deref().unwrap_or(NO_LANGUAGE);
                stats.variants.insert(language.to_string());
                *stats
                    .summary
                    .languages
                    .entry(language.to_string())
                    .or_default() += 1;
            }
            Element::Table(table) => {
                let columns = table.columns.len();
                stats.variants.insert(format!("{columns}_columns"));
                stats.summary.column_counts.insert(columns);
                *stats.summary.total_cells.get_or_insert(0) += table.cell_count();
            }
            Element::Blockquote(quote) => {
                let depth = quote.depth();
                stats.variants.insert(format!("depth_{depth}"));
                let max = stats.summary.max_nesting_depth.get_or_insert(0);
                *max = (*max).max(depth);
            }
            Element::DefList(def_list) => {
                stats
                    .variants
                    .insert(format!("{}_definitions", def_list.definitions.len()));
            }
            Element::Metadata(metadata) => {
                stats.variants.insert(format!("{}_fields", metadata.len()));
            }
            Element::Paragraph(_) | Element::Separator(_) => {}
        }
    }

    Inspection(kinds)
}

fn count_tasks(items: &[ListItem]) -> TaskStats {
    let mut stats = TaskStats::default();
    for item in items {
        item.walk(&mut |i| match i.task {
            Some(Task::Checked) => stats.checked += 1,
            Some(Task::Unchecked) => stats.unchecked += 1,
            None => {}
        });
    }
    stats.total_tasks = stats.checked + stats.unchecked;
    stats
}

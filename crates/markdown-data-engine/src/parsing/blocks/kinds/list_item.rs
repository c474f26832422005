use std::sync::OnceLock;

use regex::Regex;

use super::indent::measure_indent;
use crate::models::{ListKind, Task};

/// A classified list item line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'a> {
    /// Indentation in columns; only relative depth matters for nesting.
    pub indent: usize,
    pub kind: ListKind,
    pub task: Option<Task>,
    pub content: &'a str,
}

/// List item syntax: `-`, `*`, `+` or `1.`/`1)` followed by a space, with an
/// optional `[ ]`/`[x]` checkbox.
pub struct ListMarker;

impl ListMarker {
    pub const BULLET: &'static str = "-";
    pub const UNCHECKED: &'static str = "[ ]";
    pub const CHECKED: &'static str = "[x]";

    fn regex() -> &'static Regex {
        static LIST_REGEX: OnceLock<Regex> = OnceLock::new();
        LIST_REGEX.get_or_init(|| {
            Regex::new(
                r"^[ \t]*(?:(?P<bullet>[-*+])|(?P<number>\d{1,9})[.)])[ \t]+(?:\[(?P<task>[ xX])\](?:[ \t]+|$))?(?P<content>.*)$",
            )
            .expect("Invalid list item regex")
        })
    }

    pub fn parse(line: &str) -> Option<ListLine<'_>> {
        let caps = Self::regex().captures(line)?;
        let kind = if caps.name("bullet").is_some() {
            ListKind::Unordered
        } else {
            ListKind::Ordered
        };
        let task = caps.name("task").map(|m| match m.as_str() {
            " " => Task::Unchecked,
            _ => Task::Checked,
        });
        let content = caps.name("content").map_or("", |m| m.as_str().trim());
        Some(ListLine {
            indent: measure_indent(line).0,
            kind,
            task,
            content,
        })
    }

    pub fn task_box(task: Task) -> &'static str {
        match task {
            Task::Unchecked => Self::UNCHECKED,
            Task::Checked => Self::CHECKED,
        }
    }
}

//! Tests for the parsing module, from whole documents down to single blocks.

mod invariants;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    models::{
        Blockquote, Code, Column, DefList, Element, List, ListItem, ListKind, MetaValue, Metadata,
        QuoteItem, Table, Task,
    },
    parsing::{Located, parse, parse_located},
};

fn parse_checked(md: &str) -> Vec<Element> {
    let located = parse_located(md);
    invariants::check(md, &located);
    located.into_iter().map(|l| l.element).collect()
}

fn list(kind: ListKind, items: Vec<ListItem>) -> Element {
    Element::List(List { kind, items })
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// Documented scenarios

#[test]
fn header_then_paragraph() {
    assert_eq!(
        parse_checked("# Title\n\nSome text"),
        vec![Element::header(1, "Title"), Element::paragraph("Some text")]
    );
}

#[test]
fn indented_item_nests_under_previous() {
    assert_eq!(
        parse_checked("- a\n  - b"),
        vec![list(
            ListKind::Unordered,
            vec![ListItem::new("a").with_items(vec![ListItem::new("b")])]
        )]
    );
}

#[test]
fn two_by_two_table() {
    let md = "| Name | Age |\n|------|-----|\n| Ada | 36 |\n| Alan | 41 |";
    assert_eq!(
        parse_checked(md),
        vec![Element::Table(Table::new(vec![
            Column::new("Name", strings(&["Ada", "Alan"])),
            Column::new("Age", strings(&["36", "41"])),
        ]))]
    );
}

#[test]
fn front_matter_only_at_document_start() {
    let md = "---\ntitle: X\n---\n\nBody\n\n---\n";
    let metadata: Metadata = [("title", MetaValue::from("X"))].into_iter().collect();
    assert_eq!(
        parse_checked(md),
        vec![
            Element::Metadata(metadata),
            Element::paragraph("Body"),
            Element::separator(),
        ]
    );
}

// Document edges

#[test]
fn empty_document() {
    assert!(parse("").is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse("\n\n  \n").is_empty());
}

#[test]
fn consecutive_lines_stay_separate_paragraphs() {
    assert_eq!(
        parse_checked("one\ntwo\n\nthree"),
        vec![
            Element::paragraph("one"),
            Element::paragraph("two"),
            Element::paragraph("three"),
        ]
    );
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        parse_checked("# T\r\n- a\r\n"),
        vec![
            Element::header(1, "T"),
            list(ListKind::Unordered, vec![ListItem::new("a")]),
        ]
    );
}

// Lists

#[test]
fn list_nesting_follows_relative_indentation() {
    let md = "- a\n    - b\n        - c\n    - d\n- e";
    assert_eq!(
        parse_checked(md),
        vec![list(
            ListKind::Unordered,
            vec![
                ListItem::new("a").with_items(vec![
                    ListItem::new("b").with_items(vec![ListItem::new("c")]),
                    ListItem::new("d"),
                ]),
                ListItem::new("e"),
            ]
        )]
    );
}

#[test]
fn tab_counts_as_one_level() {
    assert_eq!(
        parse_checked("- a\n\t- b\n    - c"),
        vec![list(
            ListKind::Unordered,
            vec![ListItem::new("a").with_items(vec![ListItem::new("b"), ListItem::new("c")])]
        )]
    );
}

#[test]
fn marker_style_change_starts_new_list() {
    assert_eq!(
        parse_checked("- a\n- b\n1. one\n2. two"),
        vec![
            list(
                ListKind::Unordered,
                vec![ListItem::new("a"), ListItem::new("b")]
            ),
            list(
                ListKind::Ordered,
                vec![ListItem::new("one"), ListItem::new("two")]
            ),
        ]
    );
}

#[test]
fn blank_line_ends_list() {
    assert_eq!(parse_checked("- a\n\n- b").len(), 2);
}

#[test]
fn task_items() {
    assert_eq!(
        parse_checked("- [ ] todo\n- [x] done\n- plain"),
        vec![list(
            ListKind::Unordered,
            vec![
                ListItem::new("todo").with_task(Task::Unchecked),
                ListItem::new("done").with_task(Task::Checked),
                ListItem::new("plain"),
            ]
        )]
    );
}

#[test]
fn pipe_in_list_item_without_separator_stays_list() {
    assert_eq!(
        parse_checked("- a | b\n- c"),
        vec![list(
            ListKind::Unordered,
            vec![ListItem::new("a | b"), ListItem::new("c")]
        )]
    );
}

// Tables

#[test]
fn table_without_separator_degrades_to_paragraphs() {
    assert_eq!(
        parse_checked("a | b\nc | d"),
        vec![Element::paragraph("a | b"), Element::paragraph("c | d")]
    );
}

#[test]
fn stray_separator_row_is_text() {
    assert_eq!(parse_checked("|---|---|"), vec![Element::paragraph("|---|---|")]);
}

#[test]
fn table_ends_at_non_row() {
    let md = "| A |\n|---|\n| 1 |\nafter";
    assert_eq!(
        parse_checked(md),
        vec![
            Element::Table(Table::new(vec![Column::new("A", strings(&["1"]))])),
            Element::paragraph("after"),
        ]
    );
}

#[test]
fn table_columns_have_equal_length() {
    let md = "| A | B | C |\n|---|---|---|\n| 1 |\n| 1 | 2 | 3 | 4 |\n|---|---|---|\n| x | y |";
    let elements = parse_checked(md);
    let Element::Table(table) = &elements[0] else {
        panic!("expected table, got {elements:?}");
    };
    assert_eq!(table.row_count(), 3);
    assert!(table.columns.iter().all(|c| c.cells.len() == 3));
    assert_eq!(table.column("C").unwrap().cells, strings(&["", "3", ""]));
}

// Code

#[test]
fn code_block_keeps_content_verbatim() {
    let md = "```rust\nfn main() {\n\n    # not a header\n}\n```";
    assert_eq!(
        parse_checked(md),
        vec![Element::Code(Code::new(
            Some("rust"),
            "fn main() {\n\n    # not a header\n}"
        ))]
    );
}

#[test]
fn fence_closes_only_on_its_own_marker() {
    let md = "~~~~\n```\n~~~\n~~~~";
    assert_eq!(
        parse_checked(md),
        vec![Element::Code(Code::new(None, "```\n~~~"))]
    );
}

#[test]
fn unclosed_fence_degrades_and_rescans() {
    let md = "```python\n# Heading\n- item";
    assert_eq!(
        parse_checked(md),
        vec![
            Element::paragraph("```python"),
            Element::header(1, "Heading"),
            list(ListKind::Unordered, vec![ListItem::new("item")]),
        ]
    );
}

#[test]
fn unclosed_fences_inside_unclosed_fence_read_as_text() {
    let md: String = (0..5_000).map(|i| format!("```l{i}\n")).collect();
    let elements = parse_checked(&md);
    assert_eq!(elements.len(), 5_000);
    assert_eq!(elements[4_999], Element::paragraph("```l4999"));
    assert!(
        elements
            .iter()
            .all(|e| matches!(e, Element::Paragraph(p) if p.starts_with("```l")))
    );
}

#[test]
fn longer_fence_inside_unclosed_fence_still_closes() {
    let md = "```\n````text\ninner\n````\nafter";
    assert_eq!(
        parse_checked(md),
        vec![
            Element::paragraph("```"),
            Element::Code(Code::new(Some("text"), "inner".to_string())),
            Element::paragraph("after"),
        ]
    );
}

// Definition lists

#[test]
fn definition_turns_paragraph_into_term() {
    assert_eq!(
        parse_checked("Rust\n: a language\n: a fungus\nafter"),
        vec![
            Element::DefList(DefList {
                term: "Rust".to_string(),
                definitions: strings(&["a language", "a fungus"]),
            }),
            Element::paragraph("after"),
        ]
    );
}

#[rstest]
#[case::at_start(": orphan")]
#[case::after_blank("Term\n\n: orphan")]
#[case::after_header("# Term\n: orphan")]
fn orphan_definition_is_paragraph(#[case] md: &str) {
    let elements = parse_checked(md);
    assert_eq!(elements.last(), Some(&Element::paragraph(": orphan")));
}

// Blockquotes

#[test]
fn blockquote_nesting_follows_marker_count() {
    let md = "> a\n>> b\n>>> c\n> d";
    assert_eq!(
        parse_checked(md),
        vec![Element::Blockquote(Blockquote {
            items: vec![
                QuoteItem::new("a").with_items(vec![
                    QuoteItem::new("b").with_items(vec![QuoteItem::new("c")])
                ]),
                QuoteItem::new("d"),
            ]
        })]
    );
}

#[test]
fn blank_line_ends_blockquote() {
    assert_eq!(parse_checked("> a\n\n> b").len(), 2);
}

// Front matter

#[test]
fn front_matter_after_leading_blank_lines() {
    let elements = parse_checked("\n\n---\na: 1\n---");
    assert!(matches!(elements.as_slice(), [Element::Metadata(_)]));
}

#[test]
fn front_matter_values() {
    let md = "---\ntitle: \"Quoted: yes\"\ntags: [a, b]\nauthors: x, y\ntitle: Again\n---";
    let Element::Metadata(metadata) = &parse_checked(md)[0] else {
        panic!("expected metadata");
    };
    let entries: Vec<_> = metadata.iter().collect();
    assert_eq!(
        entries,
        vec![
            ("title", &MetaValue::from("Again")),
            ("tags", &MetaValue::from(vec!["a", "b"])),
            ("authors", &MetaValue::from(vec!["x", "y"])),
        ]
    );
}

#[rstest]
#[case::indented_opener("  ---\ntitle: X\n---")]
#[case::trailing_space_on_opener("--- \ntitle: X\n---")]
fn only_an_exact_delimiter_opens_front_matter(#[case] md: &str) {
    assert_eq!(
        parse_checked(md),
        vec![
            Element::separator(),
            Element::paragraph("title: X"),
            Element::separator(),
        ]
    );
}

#[test]
fn indented_delimiter_does_not_close_front_matter() {
    assert_eq!(
        parse_checked("---\ntitle: X\n  ---"),
        vec![
            Element::separator(),
            Element::paragraph("title: X"),
            Element::separator(),
        ]
    );
}

#[test]
fn unclosed_front_matter_degrades_to_separator() {
    assert_eq!(
        parse_checked("---\ntitle: X\n\nmore: y"),
        vec![
            Element::separator(),
            Element::paragraph("title: X"),
            Element::paragraph("more: y"),
        ]
    );
}

#[test]
fn invalid_front_matter_line_degrades_to_separator() {
    assert_eq!(
        parse_checked("---\ntitle: X\n- item\n---"),
        vec![
            Element::separator(),
            Element::paragraph("title: X"),
            list(ListKind::Unordered, vec![ListItem::new("item")]),
            Element::separator(),
        ]
    );
}

// Provenance

#[test]
fn located_elements_carry_line_ranges() {
    let md = "---\na: b\n---\n# T\n\n- x\n  - y\n\nTerm\n: def";
    let ranges: Vec<_> = parse_located(md)
        .into_iter()
        .map(|Located { element, start_line, end_line }| {
            (element.kind().name(), start_line, end_line)
        })
        .collect();
    assert_eq!(
        ranges,
        vec![
            ("metadata", 1, 3),
            ("header", 4, 4),
            ("list", 6, 7),
            ("def_list", 9, 10),
        ]
    );
}

#[test]
fn located_serializes_flat() {
    let located = parse_located("# T");
    let json = serde_json::to_string(&located).unwrap();
    assert_eq!(
        json,
        r#"[{"header":{"level":1,"title":"T"},"start_line":1,"end_line":1}]"#
    );
}

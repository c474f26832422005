use crate::{models::Element, parsing::Located};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Line ranges are non-empty, 1-based and do not overlap, in document order
/// - Metadata appears only as the first element
/// - Every table has columns of equal length
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(text: &str, located: &[Located]) {
    let line_count = text.lines().count();
    let mut last_end = 0;
    for (i, l) in located.iter().enumerate() {
        assert!(
            l.start_line >= 1 && l.start_line <= l.end_line && l.end_line <= line_count,
            "line range out of bounds: {}..={} (line count: {})",
            l.start_line,
            l.end_line,
            line_count
        );
        assert!(
            l.start_line > last_end,
            "element {i} starts on line {} inside the previous element ending on {last_end}",
            l.start_line
        );
        last_end = l.end_line;

        match &l.element {
            Element::Metadata(_) => assert_eq!(i, 0, "metadata at index {i}"),
            Element::Table(table) => {
                let rows = table.row_count();
                assert!(
                    table.columns.iter().all(|c| c.cells.len() == rows),
                    "ragged table at index {i}: {table:?}"
                );
            }
            _ => {}
        }
    }
}

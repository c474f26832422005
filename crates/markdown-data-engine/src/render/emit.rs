//! Markdown text for a single element, as lines without terminators.

use unicode_width::UnicodeWidthStr;

use crate::{
    models::{
        Code, DefList, Element, Header, ListItem, ListKind, Metadata, QuoteItem, Table,
        ThematicBreak,
    },
    parsing::blocks::kinds::{
        BlockQuote, CodeFence, Definition, FrontMatter, Heading, INDENT_WIDTH, ListMarker,
        TableRow,
    },
};

pub fn element_lines(element: &Element) -> Vec<String> {
    let mut out = vec![];
    match element {
        Element::Metadata(metadata) => front_matter(metadata, &mut out),
        Element::Header(header) => out.push(heading(header)),
        Element::Paragraph(text) => out.push(text.clone()),
        Element::List(list) => list_items(&list.items, list.kind, 0, &mut out),
        Element::Table(table) => pipe_table(table, &mut out),
        Element::Code(code) => fenced(code, &mut out),
        Element::DefList(def_list) => definitions(def_list, &mut out),
        Element::Blockquote(quote) => quote_items(&quote.items, 1, &mut out),
        Element::Separator(_) => out.push(ThematicBreak::MARKER.to_string()),
    }
    out
}

/// Lines for the element that starts the output.
pub fn leading_lines(element: &Element) -> Vec<String> {
    match element {
        Element::Separator(_) => vec![ThematicBreak::LEADING_MARKER.to_string()],
        _ => element_lines(element),
    }
}

fn front_matter(metadata: &Metadata, out: &mut Vec<String>) {
    out.push(FrontMatter::DELIMITER.to_string());
    for (key, value) in metadata.iter() {
        let value = FrontMatter::format_value(value);
        if value.is_empty() {
            out.push(format!("{key}:"));
        } else {
            out.push(format!("{key}: {value}"));
        }
    }
    out.push(FrontMatter::DELIMITER.to_string());
}

/// A trailing `#` in the title gets a closing sequence so it is not stripped.
fn heading(header: &Header) -> String {
    let marker = Heading::MARKER.to_string().repeat(usize::from(header.level));
    if header.title.is_empty() {
        marker
    } else if header.title.ends_with(Heading::MARKER) {
        format!("{marker} {} {}", header.title, Heading::MARKER)
    } else {
        format!("{marker} {}", header.title)
    }
}

fn list_items(items: &[ListItem], kind: ListKind, depth: usize, out: &mut Vec<String>) {
    let indent = " ".repeat(depth * INDENT_WIDTH);
    for (i, item) in items.iter().enumerate() {
        let marker = match kind {
            ListKind::Unordered => ListMarker::BULLET.to_string(),
            ListKind::Ordered => format!("{}.", i + 1),
        };
        let task = item
            .task
            .map(|t| format!("{} ", ListMarker::task_box(t)))
            .unwrap_or_default();
        out.push(format!("{indent}{marker} {task}{}", item.content));
        list_items(&item.items, kind, depth + 1, out);
    }
}

fn pipe_table(table: &Table, out: &mut Vec<String>) {
    let headers: Vec<String> = table.headers().map(TableRow::escape).collect();
    let rows: Vec<Vec<String>> = table
        .rows()
        .map(|row| row.into_iter().map(TableRow::escape).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .map(|row| row[col].width())
                .chain([header.width()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    out.push(table_row(&headers, &widths));
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    out.push(format!("|{}|", dashes.join("|")));
    for row in &rows {
        out.push(table_row(row, &widths));
    }
}

fn table_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.width());
            format!(" {cell}{} ", " ".repeat(pad))
        })
        .collect();
    format!("|{}|", padded.join("|"))
}

fn fenced(code: &Code, out: &mut Vec<String>) {
    let fence = CodeFence::fence_for(&code.content);
    out.push(format!("{fence}{}", code.language.as_deref().unwrap_or("")));
    out.push(code.content.clone());
    out.push(fence);
}

fn definitions(def_list: &DefList, out: &mut Vec<String>) {
    out.push(def_list.term.clone());
    for definition in &def_list.definitions {
        out.push(format!("{}{definition}", Definition::MARKER));
    }
}

fn quote_items(items: &[QuoteItem], depth: usize, out: &mut Vec<String>) {
    let markers = BlockQuote::PREFIX.to_string().repeat(depth);
    for item in items {
        if item.content.is_empty() {
            out.push(markers.clone());
        } else {
            out.push(format!("{markers} {}", item.content));
        }
        quote_items(&item.items, depth + 1, out);
    }
}

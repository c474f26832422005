use std::collections::HashSet;

use crate::{
    error::{Error, Result},
    models::{Element, ElementKind, ListItem, MetaValue, Metadata, QuoteItem, Table},
    parsing::blocks::kinds::Heading,
};

/// Checks that every element can be rendered and read back as itself.
///
/// Fails on the first violation with its index and kind.
pub fn validate(elements: &[Element]) -> Result<()> {
    for (index, element) in elements.iter().enumerate() {
        Check {
            index,
            kind: element.kind(),
        }
        .element(element)?;
    }
    Ok(())
}

struct Check {
    index: usize,
    kind: ElementKind,
}

impl Check {
    fn fail(&self, expected: impl Into<String>, actual: impl Into<String>) -> Error {
        Error::MalformedElement {
            index: self.index,
            kind: self.kind,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    fn single_line(&self, field: &str, value: &str) -> Result<()> {
        if value.contains(['\n', '\r']) {
            return Err(self.fail(format!("single-line {field}"), format!("{value:?}")));
        }
        Ok(())
    }

    fn not_blank(&self, field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(self.fail(format!("non-blank {field}"), format!("{value:?}")));
        }
        Ok(())
    }

    fn not_empty<T>(&self, what: &str, items: &[T]) -> Result<()> {
        if items.is_empty() {
            return Err(self.fail(format!("at least one {what}"), "none"));
        }
        Ok(())
    }

    fn element(&self, element: &Element) -> Result<()> {
        match element {
            Element::Metadata(metadata) => self.metadata(metadata),
            Element::Header(header) => {
                if !(1..=Heading::MAX_LEVEL).contains(&header.level) {
                    return Err(self.fail("level within 1..=6", header.level.to_string()));
                }
                self.single_line("title", &header.title)
            }
            Element::Paragraph(text) => {
                self.not_blank("paragraph", text)?;
                self.single_line("paragraph", text)
            }
            Element::List(list) => {
                self.not_empty("list item", &list.items)?;
                self.list_items(&list.items)
            }
            Element::Table(table) => self.table(table),
            Element::Code(code) => match &code.language {
                Some(language) => self.single_line("language", language),
                None => Ok(()),
            },
            Element::DefList(def_list) => {
                self.not_blank("term", &def_list.term)?;
                self.single_line("term", &def_list.term)?;
                self.not_empty("definition", &def_list.definitions)?;
                def_list
                    .definitions
                    .iter()
                    .try_for_each(|d| self.single_line("definition", d))
            }
            Element::Blockquote(quote) => {
                self.not_empty("quote line", &quote.items)?;
                self.quote_items(&quote.items)
            }
            Element::Separator(_) => Ok(()),
        }
    }

    fn metadata(&self, metadata: &Metadata) -> Result<()> {
        if self.index != 0 {
            return Err(self.fail("metadata only at index 0", format!("index {}", self.index)));
        }
        for (key, value) in metadata.iter() {
            if key.trim().is_empty() || key.contains(':') || key != key.trim() {
                return Err(self.fail("trimmed metadata key without `:`", format!("{key:?}")));
            }
            self.single_line("metadata key", key)?;
            match value {
                MetaValue::Text(text) => self.single_line("metadata value", text)?,
                MetaValue::List(items) => {
                    for item in items {
                        self.not_blank("metadata list item", item)?;
                        self.single_line("metadata list item", item)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn list_items(&self, items: &[ListItem]) -> Result<()> {
        for item in items {
            self.single_line("list item", &item.content)?;
            self.list_items(&item.items)?;
        }
        Ok(())
    }

    fn quote_items(&self, items: &[QuoteItem]) -> Result<()> {
        for item in items {
            self.single_line("quote line", &item.content)?;
            self.quote_items(&item.items)?;
        }
        Ok(())
    }

    fn table(&self, table: &Table) -> Result<()> {
        self.not_empty("column", &table.columns)?;

        let mut seen = HashSet::new();
        for header in table.headers() {
            self.not_blank("column header", header)?;
            self.single_line("column header", header)?;
            if !seen.insert(header) {
                return Err(self.fail("unique column headers", format!("duplicate {header:?}")));
            }
        }

        let rows = table.row_count();
        for column in &table.columns {
            if column.cells.len() != rows {
                return Err(self.fail(
                    format!("{rows} cells in every column"),
                    format!("{} in {:?}", column.cells.len(), column.header),
                ));
            }
            column
                .cells
                .iter()
                .try_for_each(|cell| self.single_line("table cell", cell))?;
        }
        Ok(())
    }
}

use serde::{Deserialize, Deserializer, Serialize, Serializer, ser::SerializeMap};

use super::unique_map::UniqueMapVisitor;

/// A column-oriented table: each header owns the cells below it.
///
/// Serialized as an ordered object from header to cell array. Parsed tables
/// always have unique headers and columns of equal length; tables built by
/// hand are checked by [`crate::validate`] before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub cells: Vec<String>,
}

impl Column {
    pub fn new(header: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            header: header.into(),
            cells,
        }
    }
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.header.as_str())
    }

    pub fn column(&self, header: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.header == header)
    }

    pub fn row_count(&self) -> usize {
        self.columns.iter().map(|c| c.cells.len()).max().unwrap_or(0)
    }

    pub fn cell_count(&self) -> usize {
        self.columns.iter().map(|c| c.cells.len()).sum()
    }

    /// Row-major view of the cells. Short columns read as empty cells.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> {
        (0..self.row_count()).map(move |row| {
            self.columns
                .iter()
                .map(|c| c.cells.get(row).map_or("", String::as_str))
                .collect()
        })
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in &self.columns {
            map.serialize_entry(&column.header, &column.cells)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Table {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = deserializer.deserialize_map(UniqueMapVisitor::new("table columns"))?;
        Ok(Table::new(
            entries
                .into_iter()
                .map(|(header, cells)| Column { header, cells })
                .collect(),
        ))
    }
}

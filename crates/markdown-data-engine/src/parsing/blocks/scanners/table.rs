use crate::{
    keys::KeyDeduper,
    models::{Column, Element, Table},
    parsing::Located,
};

/// Collects a header row and its body rows into columns.
///
/// The builder only starts a scan once it has seen the separator row below
/// the header, so a finished scan is always a valid table.
#[derive(Debug)]
pub struct TableScan {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    start_line: usize,
    end_line: usize,
}

impl TableScan {
    pub fn start(headers: Vec<String>, line: usize) -> Self {
        Self {
            headers,
            rows: vec![],
            start_line: line,
            end_line: line,
        }
    }

    pub fn push_row(&mut self, cells: Vec<String>, line: usize) {
        self.rows.push(cells);
        self.end_line = line;
    }

    /// Separator rows are structural and carry no cells.
    pub fn skip_separator(&mut self, line: usize) {
        self.end_line = line;
    }

    pub fn finish(self) -> Located {
        let width = self.headers.len();
        let mut keys = KeyDeduper::new();
        let mut columns: Vec<Column> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let base = if header.is_empty() {
                    format!("col{}", i + 1)
                } else {
                    header.clone()
                };
                Column::new(keys.key(&base), Vec::with_capacity(self.rows.len()))
            })
            .collect();

        for mut row in self.rows {
            row.resize(width, String::new());
            // A row left with only blank cells would no longer read as a row.
            if row.iter().all(String::is_empty) {
                log::debug!("table row has no cells within the header width, dropping it");
                continue;
            }
            for (column, cell) in columns.iter_mut().zip(row) {
                column.cells.push(cell);
            }
        }

        Located::new(
            Element::Table(Table::new(columns)),
            self.start_line,
            self.end_line,
        )
    }
}

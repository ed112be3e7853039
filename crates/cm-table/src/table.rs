//! Column-major table with pandas-style numeric coercion.

use std::io::Read;
use std::path::Path;

use crate::{TableError, TableResult};

/// One named column.  Freshly loaded tables are all-`Text`; columns become
/// `Num` only through [`Table::coerce_numeric`] or [`Table::push_numeric`].
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Text(Vec<String>),
    Num(Vec<f64>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Text(v) => v.len(),
            Column::Num(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An in-memory table of named columns, all the same length.
///
/// Immutable once loaded, except for appending derived columns in place
/// ([`push_numeric`](Table::push_numeric)) — the same discipline the
/// analysis applies to its data frames.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    columns: Vec<Column>,
}

impl Table {
    /// Load a CSV file.  Every field is kept as text; call
    /// [`coerce_numeric`](Table::coerce_numeric) after cleaning.
    pub fn from_path(path: &Path) -> TableResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Like [`from_path`](Table::from_path) but accepts any `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`).
    pub fn from_reader<R: Read>(reader: R) -> TableResult<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_owned())
            .collect();

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in csv_reader.records() {
            let record = record?;
            for (i, field) in record.iter().enumerate() {
                if i < cells.len() {
                    cells[i].push(field.trim().to_owned());
                }
            }
        }

        let columns = cells.into_iter().map(Column::Text).collect();
        Ok(Self { headers, columns })
    }

    /// `(rows, columns)`, pandas `shape` order.
    pub fn shape(&self) -> (usize, usize) {
        let rows = self.columns.first().map_or(0, Column::len);
        (rows, self.columns.len())
    }

    pub fn n_rows(&self) -> usize {
        self.shape().0
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    fn column_index(&self, name: &str) -> TableResult<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::MissingColumn(name.to_owned()))
    }

    pub fn column(&self, name: &str) -> TableResult<&Column> {
        Ok(&self.columns[self.column_index(name)?])
    }

    /// The column as an `f64` slice; errors if missing or still textual.
    pub fn numeric(&self, name: &str) -> TableResult<&[f64]> {
        match self.column(name)? {
            Column::Num(v) => Ok(v),
            Column::Text(_) => Err(TableError::NotNumeric(name.to_owned())),
        }
    }

    /// First value of a numeric column — the idiom for per-file constants
    /// like `n1`/`n2` that repeat on every row.
    pub fn numeric_first(&self, name: &str) -> TableResult<f64> {
        self.numeric(name)?
            .first()
            .copied()
            .ok_or(TableError::Empty)
    }

    /// Drop rows that are literal header echoes: any row whose field under
    /// `column` equals the column name itself.  Concatenated runner output
    /// re-embeds the header as a data row; the observed key column is `run`.
    ///
    /// A table without the named column is returned unchanged — only files
    /// produced by the appending runner carry it.
    pub fn drop_echoed_headers(&mut self, column: &str) {
        let Ok(idx) = self.column_index(column) else {
            return;
        };
        let keep: Vec<bool> = match &self.columns[idx] {
            Column::Text(v) => v.iter().map(|s| s != column).collect(),
            // Already numeric — nothing textual left to echo.
            Column::Num(_) => return,
        };

        for col in &mut self.columns {
            match col {
                Column::Text(v) => {
                    let mut it = keep.iter();
                    v.retain(|_| *it.next().unwrap_or(&true));
                }
                Column::Num(v) => {
                    let mut it = keep.iter();
                    v.retain(|_| *it.next().unwrap_or(&true));
                }
            }
        }
    }

    /// Convert each textual column to `f64` if **every** value in it parses;
    /// otherwise leave the column unchanged (`to_numeric(errors="ignore")`
    /// semantics — all-or-nothing per column, never per cell).
    pub fn coerce_numeric(&mut self) {
        for col in &mut self.columns {
            if let Column::Text(values) = col {
                let parsed: Option<Vec<f64>> =
                    values.iter().map(|s| s.parse::<f64>().ok()).collect();
                if let Some(nums) = parsed {
                    *col = Column::Num(nums);
                }
            }
        }
    }

    /// Append a derived numeric column in place.
    ///
    /// Replaces an existing column of the same name (re-running a derivation
    /// is idempotent).  Length must match the table.
    pub fn push_numeric(&mut self, name: &str, values: Vec<f64>) -> TableResult<()> {
        let rows = self.n_rows();
        if !self.columns.is_empty() && values.len() != rows {
            return Err(TableError::LengthMismatch {
                column:   name.to_owned(),
                got:      values.len(),
                expected: rows,
            });
        }
        match self.headers.iter().position(|h| h == name) {
            Some(i) => self.columns[i] = Column::Num(values),
            None => {
                self.headers.push(name.to_owned());
                self.columns.push(Column::Num(values));
            }
        }
        Ok(())
    }

    /// `from_path` + drop echoed `run` headers + coerce, the standard
    /// cleaning pipeline for runner output.
    pub fn load_clean(path: &Path) -> TableResult<Self> {
        let mut table = Self::from_path(path)?;
        table.drop_echoed_headers("run");
        table.coerce_numeric();
        Ok(table)
    }
}

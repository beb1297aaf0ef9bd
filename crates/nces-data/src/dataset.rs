//! Column-oriented dataset storage and validated row cursors.

use std::collections::{HashMap, HashSet};

use crate::error::{DataError, Result};

/// A named column of raw string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub values: Vec<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }
}

/// Column-oriented table keyed by header name.
///
/// Columns keep the header order of the source. Every column is expected to
/// hold the same number of cells; loaders that truncate short records can
/// break that, so row access re-checks bounds against every column instead of
/// assuming it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<Column>,
    positions: HashMap<String, usize>,
}

impl Dataset {
    /// Creates an empty dataset with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dataset from columns, rejecting repeated names.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(columns.len());
        for (idx, column) in columns.iter().enumerate() {
            if positions.insert(column.name.clone(), idx).is_some() {
                return Err(DataError::DuplicateColumn {
                    column: column.name.clone(),
                });
            }
        }
        Ok(Self { columns, positions })
    }

    /// Number of rows, taken from the longest column.
    ///
    /// Scans over `0..height()` reach every cell, so a short column surfaces
    /// as [`DataError::RowOutOfRange`] from [`Dataset::row`].
    pub fn height(&self) -> usize {
        self.columns.iter().map(Column::len).max().unwrap_or(0)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.height() == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header names in column order.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Position of a column in column order.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.positions
            .get(name)
            .copied()
            .ok_or_else(|| DataError::ColumnNotFound {
                column: name.to_string(),
            })
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        let idx = self.column_index(name)?;
        Ok(&self.columns[idx])
    }

    /// Adds a column at the end, or replaces the values of an existing one.
    ///
    /// The new column must match the dataset height unless the dataset has
    /// no columns yet.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<String>) -> Result<()> {
        let name = name.into();
        if !self.columns.is_empty() && values.len() != self.height() {
            return Err(DataError::ColumnLength {
                column: name,
                expected: self.height(),
                actual: values.len(),
            });
        }
        match self.positions.get(&name) {
            Some(&idx) => self.columns[idx].values = values,
            None => {
                self.positions.insert(name.clone(), self.columns.len());
                self.columns.push(Column::new(name, values));
            }
        }
        Ok(())
    }

    /// Checks that every column has as many cells as the longest one.
    pub fn validate_shape(&self) -> Result<()> {
        let height = self.height();
        for column in &self.columns {
            if column.len() != height {
                return Err(DataError::RowOutOfRange {
                    index: column.len().min(height),
                    column: column.name.clone(),
                    len: column.len(),
                });
            }
        }
        Ok(())
    }

    /// Returns a cursor over row `index`, checked against every column.
    pub fn row(&self, index: usize) -> Result<RowView<'_>> {
        if let Some(short) = self.columns.iter().find(|column| index >= column.len()) {
            return Err(DataError::RowOutOfRange {
                index,
                column: short.name.clone(),
                len: short.len(),
            });
        }
        Ok(RowView {
            dataset: self,
            index,
        })
    }

    /// Iterates rows `0..height()`, yielding an error for ragged rows.
    pub fn rows(&self) -> impl Iterator<Item = Result<RowView<'_>>> {
        (0..self.height()).map(move |index| self.row(index))
    }

    /// Reconstructs one row as parallel `(values, headers)` vectors.
    pub fn row_at(&self, index: usize) -> Result<(Vec<&str>, Vec<&str>)> {
        let row = self.row(index)?;
        Ok((row.values().collect(), row.headers().collect()))
    }

    /// Keeps only the named columns, preserving their order.
    pub fn project<I, S>(mut self, keep: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keep: HashSet<String> = keep.into_iter().map(|s| s.as_ref().to_string()).collect();
        let before = self.columns.len();
        self.columns.retain(|column| keep.contains(&column.name));
        self.reindex();
        tracing::debug!(
            kept = self.columns.len(),
            dropped = before - self.columns.len(),
            "Projected dataset columns"
        );
        self
    }

    /// Like [`Dataset::project`] but leaves `self` untouched.
    pub fn projected<I, S>(&self, keep: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.clone().project(keep)
    }

    fn reindex(&mut self) {
        self.positions = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| (column.name.clone(), idx))
            .collect();
    }
}

/// Borrowed view of one logical row.
///
/// Construction through [`Dataset::row`] guarantees the index is in range for
/// every column.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    dataset: &'a Dataset,
    index: usize,
}

impl<'a> RowView<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cell at a column position.
    pub fn value(&self, position: usize) -> Option<&'a str> {
        self.dataset
            .columns
            .get(position)
            .and_then(|column| column.get(self.index))
    }

    /// Cell for a column name.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let position = *self.dataset.positions.get(column)?;
        self.value(position)
    }

    /// Cells in column order.
    pub fn values(self) -> impl Iterator<Item = &'a str> + 'a {
        let index = self.index;
        self.dataset
            .columns
            .iter()
            .filter_map(move |column| column.get(index))
    }

    /// Header names in column order.
    pub fn headers(self) -> impl Iterator<Item = &'a str> + 'a {
        self.dataset.headers()
    }
}

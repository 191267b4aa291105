//! Dense matrix indexed by row and column ids.

use std::collections::BTreeSet;
use std::fmt::Display;

use super::error::TableError;
use crate::Id;

/// Dense row-major matrix with sorted id labels on both axes.
///
/// Cells are `Option<f64>`: a pivot leaves `None` wherever the source data has
/// no entry for a `(row, col)` pair.
///
/// # Invariants
///
/// - `rows` and `cols` are strictly ascending
/// - `cells.len() == rows.len() * cols.len()`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LabeledMatrix {
    rows: Vec<Id>,
    cols: Vec<Id>,
    cells: Vec<Option<f64>>,
}

impl LabeledMatrix {
    /// Creates an empty-celled matrix. Labels are sorted and deduplicated.
    pub fn new(rows: impl IntoIterator<Item = Id>, cols: impl IntoIterator<Item = Id>) -> Self {
        let rows: Vec<Id> = rows.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        let cols: Vec<Id> = cols.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
        let cells = vec![None; rows.len() * cols.len()];
        Self { rows, cols, cells }
    }

    /// Builds a matrix from `(row, col, value)` triples.
    ///
    /// Row labels are the distinct row ids, column labels the distinct column
    /// ids; pairs that never appear stay `None`.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEntry` if the same `(row, col)` pair appears twice.
    pub fn pivot<I>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (Id, Id, f64)>,
    {
        let entries: Vec<(Id, Id, f64)> = entries.into_iter().collect();
        let mut matrix = Self::new(
            entries.iter().map(|&(row, _, _)| row),
            entries.iter().map(|&(_, col, _)| col),
        );
        for (row, col, value) in entries {
            let idx = matrix.cell_index(row, col)?;
            if matrix.cells[idx].is_some() {
                return Err(TableError::DuplicateEntry { row, col });
            }
            matrix.cells[idx] = Some(value);
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> &[Id] {
        &self.rows
    }

    pub fn cols(&self) -> &[Id] {
        &self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }

    fn cell_index(&self, row: Id, col: Id) -> Result<usize, TableError> {
        let r = self
            .rows
            .binary_search(&row)
            .map_err(|_| TableError::UnknownRow(row))?;
        let c = self
            .cols
            .binary_search(&col)
            .map_err(|_| TableError::UnknownColumn(col))?;
        Ok(r * self.cols.len() + c)
    }

    /// Returns the value at `(row, col)`, or `None` if the cell is empty or
    /// either label is unknown.
    pub fn get(&self, row: Id, col: Id) -> Option<f64> {
        self.cell_index(row, col)
            .ok()
            .and_then(|idx| self.cells[idx])
    }

    /// Stores `value` at `(row, col)`, replacing any previous value.
    pub fn set(&mut self, row: Id, col: Id, value: f64) -> Result<(), TableError> {
        let idx = self.cell_index(row, col)?;
        self.cells[idx] = Some(value);
        Ok(())
    }

    /// Sets every cell whose row id equals its column id to `value`.
    pub fn fill_diagonal(&mut self, value: f64) {
        let width = self.cols.len();
        for (r, row) in self.rows.iter().enumerate() {
            if let Ok(c) = self.cols.binary_search(row) {
                self.cells[r * width + c] = Some(value);
            }
        }
    }

    /// Returns a matrix with `f` applied to every present value.
    pub fn map_values<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            rows: self.rows.clone(),
            cols: self.cols.clone(),
            cells: self.cells.iter().map(|cell| cell.map(&f)).collect(),
        }
    }

    /// Iterates `(row, col, value)` column by column: every row of the first
    /// column, then every row of the second, and so on.
    pub fn unstack(&self) -> impl Iterator<Item = (Id, Id, Option<f64>)> + '_ {
        let width = self.cols.len();
        self.cols.iter().enumerate().flat_map(move |(c, &col)| {
            self.rows
                .iter()
                .enumerate()
                .map(move |(r, &row)| (row, col, self.cells[r * width + c]))
        })
    }
}

impl Display for LabeledMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>10}", "")?;
        for col in &self.cols {
            write!(f, " {:>10}", col)?;
        }
        writeln!(f)?;
        for (r, row) in self.rows.iter().enumerate() {
            write!(f, "{:>10}", row)?;
            for c in 0..self.cols.len() {
                match self.cells[r * self.cols.len() + c] {
                    Some(v) => write!(f, " {:>10.1}", v)?,
                    None => write!(f, " {:>10}", "-")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

use thiserror::Error;

use crate::Id;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Duplicate entry for row {row}, column {col}")]
    DuplicateEntry { row: Id, col: Id },

    #[error("Unknown row label: {0}")]
    UnknownRow(Id),

    #[error("Unknown column label: {0}")]
    UnknownColumn(Id),
}

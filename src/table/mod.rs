//! Labeled two-dimensional tables.

mod error;
mod matrix;

pub use error::TableError;
pub use matrix::LabeledMatrix;

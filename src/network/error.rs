use thiserror::Error;

use crate::table::TableError;
use crate::Id;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("No path between {from} and {to}")]
    NoPath { from: Id, to: Id },

    #[error("Edge {from} - {to} has an invalid distance")]
    InvalidDistance { from: Id, to: Id },

    #[error(transparent)]
    Table(#[from] TableError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_display() {
        let e = NetworkError::NoPath { from: 1, to: 2 };
        assert_eq!(e.to_string(), "No path between 1 and 2");
    }

    #[test]
    fn invalid_distance_display() {
        let e = NetworkError::InvalidDistance { from: 3, to: 4 };
        assert_eq!(e.to_string(), "Edge 3 - 4 has an invalid distance");
    }

    #[test]
    fn table_error_is_transparent() {
        let e: NetworkError = TableError::UnknownRow(7).into();
        assert_eq!(e.to_string(), "Unknown row label: 7");
    }
}

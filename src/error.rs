use thiserror::Error;

/// Reasons a cost matrix cannot be solved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// Row count and column count differ.
    #[error("cost matrix must be square, got {rows} rows and {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    /// A row's length differs from the number of rows.
    #[error("row {row} has {len} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// The memo table would need more than `2^max` entries.
    #[error("dimension {dimension} exceeds the supported maximum of {max}")]
    TooLarge { dimension: usize, max: usize },
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            InvalidInputError::NotSquare { rows: 2, cols: 3 }.to_string(),
            "cost matrix must be square, got 2 rows and 3 columns"
        );
        assert_eq!(
            InvalidInputError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            }
            .to_string(),
            "row 1 has 2 entries, expected 3"
        );
    }
}

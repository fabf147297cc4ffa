use nalgebra::{Dim, Matrix, RawStorage, Scalar};

use crate::InvalidInputError;

/// Largest supported number of workers (and tasks).
///
/// The memo table holds one entry per subset of tasks, so its length is
/// `2^n`. Each entry is a cost plus the chosen task index (24 bytes for
/// `i64` costs), which puts a solve at this limit at roughly 25 MB.
pub const MAX_DIMENSION: usize = 20;

/// Read access to a square grid of assignment costs.
///
/// `cost(worker, task)` is only called with indices below the value
/// returned by a successful `dimension()`.
pub trait CostMatrix {
    type Cost: Copy;

    /// Side length `n` of the matrix, or why it cannot be solved.
    fn dimension(&self) -> Result<usize, InvalidInputError>;

    fn cost(&self, worker: usize, task: usize) -> Self::Cost;
}

fn within_limit(dimension: usize) -> Result<usize, InvalidInputError> {
    if dimension > MAX_DIMENSION {
        return Err(InvalidInputError::TooLarge {
            dimension,
            max: MAX_DIMENSION,
        });
    }
    Ok(dimension)
}

impl<T: Copy> CostMatrix for [Vec<T>] {
    type Cost = T;

    fn dimension(&self) -> Result<usize, InvalidInputError> {
        let rows = self.len();
        if let Some(first) = self.first() {
            if first.len() != rows {
                return Err(InvalidInputError::NotSquare {
                    rows,
                    cols: first.len(),
                });
            }
        }
        if let Some((row, r)) = self.iter().enumerate().find(|(_, r)| r.len() != rows) {
            return Err(InvalidInputError::RaggedRow {
                row,
                len: r.len(),
                expected: rows,
            });
        }
        within_limit(rows)
    }

    fn cost(&self, worker: usize, task: usize) -> T {
        self[worker][task]
    }
}

impl<T: Copy> CostMatrix for Vec<Vec<T>> {
    type Cost = T;

    fn dimension(&self) -> Result<usize, InvalidInputError> {
        self.as_slice().dimension()
    }

    fn cost(&self, worker: usize, task: usize) -> T {
        self[worker][task]
    }
}

impl<T: Copy, const N: usize> CostMatrix for [[T; N]; N] {
    type Cost = T;

    fn dimension(&self) -> Result<usize, InvalidInputError> {
        within_limit(N)
    }

    fn cost(&self, worker: usize, task: usize) -> T {
        self[worker][task]
    }
}

impl<T, R, C, S> CostMatrix for Matrix<T, R, C, S>
where
    T: Scalar + Copy,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    type Cost = T;

    fn dimension(&self) -> Result<usize, InvalidInputError> {
        let (rows, cols) = self.shape();
        if rows != cols {
            return Err(InvalidInputError::NotSquare { rows, cols });
        }
        within_limit(rows)
    }

    fn cost(&self, worker: usize, task: usize) -> T {
        self[(worker, task)]
    }
}

#[cfg(test)]
mod test {
    use nalgebra::{DMatrix, Matrix2, Matrix2x3};

    use super::*;

    #[test]
    fn empty_is_zero_sized() {
        let costs: Vec<Vec<i64>> = Vec::new();
        assert_eq!(costs.dimension(), Ok(0));
        let costs: [[i64; 0]; 0] = [];
        assert_eq!(costs.dimension(), Ok(0));
    }

    #[test]
    fn single_empty_row() {
        let costs: Vec<Vec<i64>> = vec![vec![]];
        assert_eq!(
            costs.dimension(),
            Err(InvalidInputError::NotSquare { rows: 1, cols: 0 })
        );
    }

    #[test]
    fn wide_rows() {
        let costs = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(
            costs.dimension(),
            Err(InvalidInputError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn ragged_rows() {
        let costs = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]];
        assert_eq!(
            costs.dimension(),
            Err(InvalidInputError::RaggedRow {
                row: 2,
                len: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn limit_is_inclusive() {
        let n = MAX_DIMENSION;
        assert_eq!(vec![vec![0u8; n]; n].dimension(), Ok(n));
    }

    #[test]
    fn too_large() {
        let n = MAX_DIMENSION + 1;
        let costs = vec![vec![0u8; n]; n];
        assert_eq!(
            costs.dimension(),
            Err(InvalidInputError::TooLarge {
                dimension: n,
                max: MAX_DIMENSION
            })
        );
        assert_eq!(DMatrix::<u8>::zeros(n, n).dimension(), costs.dimension());
    }

    #[test]
    fn nalgebra_shapes() {
        #[rustfmt::skip]
        let costs = Matrix2::from_row_slice(
            &[
                1, 2,
                3, 4,
            ]
        );
        assert_eq!(costs.dimension(), Ok(2));
        assert_eq!(costs.cost(1, 0), 3);

        let wide = Matrix2x3::<f64>::zeros();
        assert_eq!(
            wide.dimension(),
            Err(InvalidInputError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn rows_are_workers() {
        let costs = [[1, 2], [3, 4]];
        assert_eq!(costs.cost(0, 1), 2);
        assert_eq!(costs.cost(1, 0), 3);
    }
}

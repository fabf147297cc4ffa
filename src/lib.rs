//! Minimum-cost assignment of `n` workers to `n` tasks by dynamic
//! programming over bitmasks of already assigned tasks.
//!
//! Worker `w` is always assigned after workers `0..w`, so the number of set
//! bits in a mask identifies the next worker and the state space is exactly
//! the `2^n` subsets of tasks.
//!
//! ```
//! let costs = vec![vec![9, 2, 7], vec![6, 4, 3], vec![5, 8, 1]];
//! assert_eq!(bitmask_assignment::min_assignment_cost(&costs), Ok(9));
//! ```

mod error;
mod matrix;
mod solver;

use std::fmt::Debug;

use num_traits::Zero;

pub use error::InvalidInputError;
pub use matrix::{CostMatrix, MAX_DIMENSION};
pub use solver::{Assignment, Solver, Strategy};

/// Minimum total cost over all bijective worker-to-task assignments.
pub fn min_assignment_cost<M>(costs: &M) -> Result<M::Cost, InvalidInputError>
where
    M: CostMatrix + ?Sized,
    M::Cost: PartialOrd + Zero + Debug,
{
    Solver::new().cost(costs)
}

/// Like [`min_assignment_cost`], also reporting the task chosen for each worker.
pub fn min_assignment<M>(costs: &M) -> Result<Assignment<M::Cost>, InvalidInputError>
where
    M: CostMatrix + ?Sized,
    M::Cost: PartialOrd + Zero + Debug,
{
    Solver::new().assignment(costs)
}

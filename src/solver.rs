use std::fmt::Debug;

use num_traits::Zero;
use tracing::{debug, trace};

use crate::{CostMatrix, InvalidInputError};

/// Order in which the lattice of task subsets is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Memoized recursion from the empty mask; depth equals the dimension.
    TopDown,
    /// Iterative relaxation over masks in increasing numeric order.
    #[default]
    BottomUp,
}

/// A minimum-cost assignment together with its total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<T> {
    cost: T,
    pairs: Vec<(usize, usize)>,
}

impl<T: Copy> Assignment<T> {
    pub fn cost(&self) -> T {
        self.cost
    }

    /// `(worker, task)` pairs, ordered by worker.
    pub fn assignment(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().copied()
    }

    pub fn task_of(&self, worker: usize) -> Option<usize> {
        self.pairs.get(worker).map(|&(_, task)| task)
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry<T> {
    cost: T,
    task: usize,
}

/// Bitmask dynamic-programming solver for square assignment problems.
///
/// Each call allocates its own table of `2^n` entries and drops it on
/// return, so a `Solver` carries no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver {
    strategy: Strategy,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Minimum total cost of assigning every worker to a distinct task.
    pub fn cost<M>(&self, costs: &M) -> Result<M::Cost, InvalidInputError>
    where
        M: CostMatrix + ?Sized,
        M::Cost: PartialOrd + Zero + Debug,
    {
        self.assignment(costs).map(|a| a.cost)
    }

    /// Minimum-cost assignment, including which task each worker receives.
    pub fn assignment<M>(&self, costs: &M) -> Result<Assignment<M::Cost>, InvalidInputError>
    where
        M: CostMatrix + ?Sized,
        M::Cost: PartialOrd + Zero + Debug,
    {
        let n = costs.dimension()?;
        debug!(n, strategy = ?self.strategy, "solving assignment");
        trace!(entries = 1usize << n, "allocating memo table");

        let assignment = match self.strategy {
            Strategy::TopDown => {
                let mut search = TopDown::new(costs, n);
                let cost = search.solve(0);
                Assignment {
                    cost,
                    pairs: search.pairs(),
                }
            }
            Strategy::BottomUp => bottom_up(costs, n),
        };

        debug!(cost = ?assignment.cost, "solved assignment");
        Ok(assignment)
    }
}

struct TopDown<'a, M: CostMatrix + ?Sized> {
    costs: &'a M,
    n: usize,
    memo: Vec<Option<Entry<M::Cost>>>,
}

impl<'a, M> TopDown<'a, M>
where
    M: CostMatrix + ?Sized,
    M::Cost: PartialOrd + Zero,
{
    fn new(costs: &'a M, n: usize) -> Self {
        Self {
            costs,
            n,
            memo: vec![None; 1 << n],
        }
    }

    /// Cheapest way to assign workers `popcount(mask)..n` to the tasks not in `mask`.
    fn solve(&mut self, mask: u32) -> M::Cost {
        let worker = mask.count_ones() as usize;
        if worker == self.n {
            return M::Cost::zero();
        }
        if let Some(entry) = self.memo[mask as usize] {
            return entry.cost;
        }

        let mut best: Option<Entry<M::Cost>> = None;
        for task in 0..self.n {
            let bit = 1 << task;
            if mask & bit != 0 {
                continue;
            }

            let cost = self.costs.cost(worker, task) + self.solve(mask | bit);
            if best.map_or(true, |b| cost < b.cost) {
                best = Some(Entry { cost, task });
            }
        }

        let entry = best.expect("worker < n leaves a free task");
        self.memo[mask as usize] = Some(entry);
        entry.cost
    }

    fn pairs(&self) -> Vec<(usize, usize)> {
        let mut mask = 0usize;
        let mut pairs = Vec::with_capacity(self.n);
        for worker in 0..self.n {
            let entry = self.memo[mask].expect("solved");
            pairs.push((worker, entry.task));
            mask |= 1 << entry.task;
        }
        pairs
    }
}

fn bottom_up<M>(costs: &M, n: usize) -> Assignment<M::Cost>
where
    M: CostMatrix + ?Sized,
    M::Cost: PartialOrd + Zero,
{
    let full = (1usize << n) - 1;
    // entry at `mask` holds the best cost of filling `mask` and the task added last
    let mut best: Vec<Option<Entry<M::Cost>>> = vec![None; full + 1];
    best[0] = Some(Entry {
        cost: M::Cost::zero(),
        task: 0,
    });

    for mask in 0..full {
        let from = best[mask].expect("reachable from the empty mask");
        let worker = mask.count_ones() as usize;

        for task in 0..n {
            let bit = 1 << task;
            if mask & bit != 0 {
                continue;
            }

            let cost = from.cost + costs.cost(worker, task);
            let next = &mut best[mask | bit];
            if next.map_or(true, |e| cost < e.cost) {
                *next = Some(Entry { cost, task });
            }
        }
    }

    let mut pairs = Vec::with_capacity(n);
    let mut mask = full;
    while mask != 0 {
        let entry = best[mask].expect("reachable from the empty mask");
        let worker = mask.count_ones() as usize - 1;
        pairs.push((worker, entry.task));
        mask &= !(1 << entry.task);
    }
    pairs.reverse();

    Assignment {
        cost: best[full].expect("reachable from the empty mask").cost,
        pairs,
    }
}

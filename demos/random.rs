use bitmask_assignment::{CostMatrix, Solver};

const ASSIGNMENT_SIZE: usize = 12;
const N: usize = 100;

fn main() {
    let solver = Solver::new();
    let mut total_cost = 0.;
    for _ in 0..N {
        let costs = nalgebra::DMatrix::<f64>::new_random(ASSIGNMENT_SIZE, ASSIGNMENT_SIZE);
        let assignment = solver.assignment(&costs).expect("square matrix");
        total_cost += assignment
            .assignment()
            .map(|(worker, task)| costs.cost(worker, task))
            .sum::<f64>();
    }

    println!("total: {total_cost}");
}

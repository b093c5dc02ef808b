pub mod line;
pub mod propagation;

use log::warn;

use crate::board::Board;
use crate::solver::{
    line::{DynamicSolver, LineSolver},
    propagation::{Outcome, Solver},
};

pub fn run<S>(board: Board, max_waves: Option<usize>) -> Outcome
where
    S: LineSolver,
{
    warn!("Solving with simple line propagation");
    let solver = Solver::with_max_waves(board, max_waves);
    solver.run::<S>()
}

/// Solve the board with the default line solver and no limits.
pub fn solve(board: Board) -> Outcome {
    run::<DynamicSolver>(board, None)
}

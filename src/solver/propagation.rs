use std::mem;

use hashbrown::HashSet;
use log::{debug, info, warn};

use crate::{
    block::BinaryColor,
    board::{Board, LineDirection, LinePosition},
    solver::line::{self, LineSolver, UnsolvableLine},
};

/// Final state of the board after the propagation stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Board),
    /// Some line has no completion compatible with its description.
    Contradiction,
    /// No more cells can be deduced line by line, but some of them are still unknown.
    Inconclusive(Board),
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    pub fn board(&self) -> Option<&Board> {
        match self {
            Self::Solved(board) | Self::Inconclusive(board) => Some(board),
            Self::Contradiction => None,
        }
    }
}

/// Solve a single line with the solver S and update the board.
///
/// Return the indexes in the line which were updated during this solution,
/// i.e. the crossing lines which should be solved again.
pub fn solve_line<S>(
    board: &mut Board,
    position: LinePosition,
) -> Result<Vec<usize>, UnsolvableLine>
where
    S: LineSolver,
{
    let line = board.get_line(position);
    let line_desc = board.description(position);

    debug!("Solving {:?}: {:?}. Partial: {:?}", position, line_desc, line);
    let solution = line::solve::<S>(line_desc, &line)?;

    let indexes = updated_indexes(&line, &solution);
    if !indexes.is_empty() {
        debug!("New info on {:?}: {:?}", position, indexes);
        board.set_line(position, &solution);
    }

    Ok(indexes)
}

fn updated_indexes(old: &[BinaryColor], new: &[BinaryColor]) -> Vec<usize> {
    old.iter()
        .zip(new)
        .enumerate()
        .filter_map(|(i, (pre, post))| {
            if pre == post {
                None
            } else {
                debug!("Diff on index={}: original={:?}, updated={:?}", i, pre, post);
                Some(i)
            }
        })
        .collect()
}

/// Alternates the waves of rows and columns until none of the lines can be improved.
#[derive(Debug)]
pub struct Solver {
    board: Board,
    max_waves: Option<usize>,
    waves: usize,
    lines_solved: u32,
}

impl Solver {
    pub fn new(board: Board) -> Self {
        Self::with_max_waves(board, None)
    }

    /// Stop after the given number of waves (every row or column wave counts once)
    /// even if some lines are still waiting to be solved.
    pub fn with_max_waves(board: Board, max_waves: Option<usize>) -> Self {
        Self {
            board,
            max_waves,
            waves: 0,
            lines_solved: 0,
        }
    }

    pub fn run<S>(mut self) -> Outcome
    where
        S: LineSolver,
    {
        match self.propagate::<S>() {
            Ok(()) => {
                debug!("Lines solved: {}", self.lines_solved);
                if self.board.is_solved_full() {
                    Outcome::Solved(self.board)
                } else {
                    info!(
                        "Propagation finished with {:.1}% of cells solved",
                        self.board.solution_rate() * 100.0
                    );
                    Outcome::Inconclusive(self.board)
                }
            }
            Err(UnsolvableLine) => Outcome::Contradiction,
        }
    }

    fn guard_reached(&self) -> bool {
        if let Some(max_waves) = self.max_waves {
            if self.waves >= max_waves {
                warn!("Maximum number of waves reached ({})", max_waves);
                return true;
            }
        }

        false
    }

    fn propagate<S>(&mut self) -> Result<(), UnsolvableLine>
    where
        S: LineSolver,
    {
        let mut dirty_rows: HashSet<usize> = (0..self.board.height()).collect();
        let mut dirty_cols: HashSet<usize> = (0..self.board.width()).collect();

        while !dirty_rows.is_empty() || !dirty_cols.is_empty() {
            if self.guard_reached() {
                break;
            }
            let rows = mem::take(&mut dirty_rows);
            dirty_cols.extend(self.run_wave::<S>(LineDirection::Row, rows)?);

            if self.guard_reached() {
                break;
            }
            let cols = mem::take(&mut dirty_cols);
            dirty_rows.extend(self.run_wave::<S>(LineDirection::Column, cols)?);
        }

        Ok(())
    }

    /// Solve every dirty line along the given direction.
    ///
    /// Return the indexes of the orthogonal lines that got new information.
    fn run_wave<S>(
        &mut self,
        direction: LineDirection,
        dirty: HashSet<usize>,
    ) -> Result<HashSet<usize>, UnsolvableLine>
    where
        S: LineSolver,
    {
        self.waves += 1;

        let mut lines: Vec<_> = dirty.into_iter().collect();
        lines.sort_unstable();

        let mut touched = HashSet::new();
        for &index in &lines {
            let position = LinePosition::with_direction_and_index(direction, index);
            let updated = solve_line::<S>(&mut self.board, position).map_err(|err| {
                warn!("Contradiction found on {:?}", position);
                err
            })?;
            touched.extend(updated);
            self.lines_solved += 1;
        }

        info!(
            "Wave {} ({:?}): {} lines solved, {} crossing lines to check",
            self.waves,
            direction,
            lines.len(),
            touched.len()
        );
        Ok(touched)
    }
}

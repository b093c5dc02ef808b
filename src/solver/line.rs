use std::error::Error;
use std::fmt;

use crate::block::{BinaryBlock, BinaryColor, Description};

/// The line has no completion compatible with its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsolvableLine;

impl fmt::Display for UnsolvableLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bad line")
    }
}

impl Error for UnsolvableLine {}

pub trait LineSolver {
    fn new(desc: &Description, line: &[BinaryColor]) -> Self;
    fn solve(&mut self) -> Result<(), UnsolvableLine>;
    fn get_solution(self) -> Vec<BinaryColor>;
}

pub fn solve<S>(
    desc: &Description,
    line: &[BinaryColor],
) -> Result<Vec<BinaryColor>, UnsolvableLine>
where
    S: LineSolver,
{
    let mut solver = S::new(desc, line);
    solver.solve()?;
    Ok(solver.get_solution())
}

/// Check whether the cells `line[..end]` can hold the first `blocks` blocks
/// of the description, given the colors already known in the line.
///
/// # Panics
///
/// If `end` is greater than the line length
/// or `blocks` is greater than the number of blocks.
pub fn feasible(line: &[BinaryColor], desc: &Description, end: usize, blocks: usize) -> bool {
    let mut solver = DynamicSolver::new(desc, &line[..end]);
    solver.get_sol(end as isize - 1, blocks)
}

/// Set every cell which has the same color in all the completions of the line.
///
/// Return `false` and leave the line untouched if there are no completions at all.
pub fn deduce(line: &mut [BinaryColor], desc: &Description) -> bool {
    match solve::<DynamicSolver>(desc, line) {
        Ok(solved) => {
            line.copy_from_slice(&solved);
            true
        }
        Err(UnsolvableLine) => false,
    }
}

fn fill_unknown(cells: &mut [BinaryColor], color: BinaryColor) {
    for cell in cells.iter_mut().filter(|cell| !cell.is_solved()) {
        *cell = color;
    }
}

/// Memoized solver over the `(position, block)` pairs.
///
/// Every feasible placement marks the colors it gives to its cells,
/// so after the run every cell holds the union of its possible colors.
#[derive(Debug)]
pub struct DynamicSolver {
    blocks: Vec<usize>,
    line: Vec<BinaryColor>,
    min_ends: Vec<usize>,
    job_size: usize,
    solution_matrix: Vec<Option<bool>>,
    solved_line: Vec<BinaryColor>,
}

impl LineSolver for DynamicSolver {
    fn new(desc: &Description, line: &[BinaryColor]) -> Self {
        let blocks = desc.sizes();
        let min_ends = Self::calc_min_ends(desc);

        let job_size = blocks.len() + 1;
        let solution_matrix = vec![None; job_size * line.len()];

        Self {
            blocks,
            line: line.to_vec(),
            min_ends,
            job_size,
            solution_matrix,
            solved_line: vec![BinaryColor::Undefined; line.len()],
        }
    }

    fn solve(&mut self) -> Result<(), UnsolvableLine> {
        if self.try_solve() {
            for cell in &mut self.solved_line {
                *cell = cell.collapse();
            }
            Ok(())
        } else {
            Err(UnsolvableLine)
        }
    }

    fn get_solution(self) -> Vec<BinaryColor> {
        self.solved_line
    }
}

impl DynamicSolver {
    fn calc_min_ends(desc: &Description) -> Vec<usize> {
        let mut min_ends: Vec<_> = BinaryBlock::partial_sums(&desc.vec)
            .iter()
            .map(|size| size - 1)
            .collect();
        min_ends.insert(0, 0);
        min_ends
    }

    fn try_solve(&mut self) -> bool {
        let (position, block) = (self.line.len() as isize - 1, self.blocks.len());
        self.get_sol(position, block)
    }

    fn get_sol(&mut self, position: isize, block: usize) -> bool {
        if position < 0 {
            // nothing left to fill: all the blocks should be already placed
            return block == 0;
        }

        let position = position as usize;
        let index = position * self.job_size + block;

        if let Some(can_be_solved) = self.solution_matrix[index] {
            return can_be_solved;
        }

        let can_be_solved = self.fill_matrix(position, block);
        self.solution_matrix[index] = Some(can_be_solved);
        can_be_solved
    }

    fn update_solved(&mut self, position: usize, color: BinaryColor) {
        let current = self.solved_line[position];
        self.solved_line[position] = current.add_color(color);
    }

    fn fill_matrix(&mut self, position: usize, block: usize) -> bool {
        // too many blocks left to fit this line segment
        if position < self.min_ends[block] {
            return false;
        }

        // do not short-circuit
        self.fill_matrix_blank(position, block) | self.fill_matrix_color(position, block)
    }

    fn fill_matrix_blank(&mut self, position: usize, block: usize) -> bool {
        if self.line[position].can_be_blank() && self.get_sol(position as isize - 1, block) {
            self.update_solved(position, BinaryColor::blank());
            return true;
        }

        false
    }

    fn fill_matrix_color(&mut self, position: usize, block: usize) -> bool {
        // block == 0 means there are no blocks left, only the whitespace
        if block == 0 {
            return false;
        }

        let block_size = self.blocks[block - 1];
        // the block occupies [start, position]
        let start = position as isize - block_size as isize + 1;

        if self.can_place_block(start, position) {
            // skip the separating space before the block
            let has_color = self.get_sol(start - 2, block - 1);
            if has_color {
                self.set_color_block(start as usize, position);
                return true;
            }
        }

        false
    }

    fn can_place_block(&self, start: isize, end: usize) -> bool {
        if start < 0 {
            return false;
        }
        let start = start as usize;

        if start > 0 && !self.line[start - 1].can_be_blank() {
            return false;
        }

        self.line[start..=end].iter().all(|cell| cell.can_be_black())
    }

    fn set_color_block(&mut self, start: usize, end: usize) {
        if start > 0 {
            self.update_solved(start - 1, BinaryColor::blank());
        }

        for i in start..=end {
            self.update_solved(i, BinaryColor::Black);
        }
    }
}

/// Solver which tries both colors on every unknown cell
/// and keeps only the cells where the two hypotheses agree.
///
/// It is exponential in the number of unknown cells.
#[derive(Debug)]
pub struct HypothesisSolver {
    blocks: Vec<usize>,
    line: Vec<BinaryColor>,
    solved_line: Vec<BinaryColor>,
}

impl LineSolver for HypothesisSolver {
    fn new(desc: &Description, line: &[BinaryColor]) -> Self {
        Self {
            blocks: desc.sizes(),
            line: line.to_vec(),
            solved_line: line.to_vec(),
        }
    }

    fn solve(&mut self) -> Result<(), UnsolvableLine> {
        let mut solved = self.line.clone();
        let position = solved.len() as isize - 1;

        if Self::color_prefix(&mut solved, &self.blocks, position, self.blocks.len()) {
            self.solved_line = solved;
            Ok(())
        } else {
            Err(UnsolvableLine)
        }
    }

    fn get_solution(self) -> Vec<BinaryColor> {
        self.solved_line
    }
}

impl HypothesisSolver {
    /// Color the cells `line[..=position]` with the first `block` blocks.
    /// The line can be partially modified when it returns `false`.
    fn color_prefix(
        line: &mut [BinaryColor],
        blocks: &[usize],
        position: isize,
        block: usize,
    ) -> bool {
        use BinaryColor::{Black, White};

        let prefix_len = (position + 1) as usize;

        if block == 0 {
            let prefix = &mut line[..prefix_len];
            if prefix.contains(&Black) {
                return false;
            }
            fill_unknown(prefix, White);
            return true;
        }

        let block_size = blocks[block - 1];
        if prefix_len < block_size {
            return false;
        }

        if prefix_len == block_size {
            let prefix = &mut line[..prefix_len];
            if block != 1 || prefix.contains(&White) {
                return false;
            }
            fill_unknown(prefix, Black);
            return true;
        }

        let position = prefix_len - 1;
        match line[position] {
            White => Self::color_prefix(line, blocks, position as isize - 1, block),
            Black => {
                let boundary = position - block_size;
                if line[boundary] == Black || line[boundary + 1..position].contains(&White) {
                    return false;
                }

                fill_unknown(&mut line[boundary..=boundary], White);
                fill_unknown(&mut line[boundary + 1..position], Black);
                Self::color_prefix(line, blocks, boundary as isize - 1, block - 1)
            }
            _ => {
                let try_color = |color| {
                    let mut hypothesis = line[..=position].to_vec();
                    hypothesis[position] = color;
                    let ok = Self::color_prefix(&mut hypothesis, blocks, position as isize, block);
                    (ok, hypothesis)
                };

                let (blank_ok, as_blank) = try_color(White);
                let (black_ok, as_black) = try_color(Black);

                match (blank_ok, black_ok) {
                    (false, false) => return false,
                    (true, false) => line[..=position].copy_from_slice(&as_blank),
                    (false, true) => line[..=position].copy_from_slice(&as_black),
                    (true, true) => {
                        for (i, (blank, black)) in as_blank.iter().zip(&as_black).enumerate() {
                            if blank == black {
                                line[i] = *blank;
                            }
                        }
                    }
                }
                true
            }
        }
    }
}

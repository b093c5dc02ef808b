use crate::block::Description;
use crate::board::Board;
use crate::utils::{pad, pad_with, transpose};

/// Draws the board with the column clues above it and the row clues on the left.
#[derive(Debug)]
pub struct ShellRenderer<'a> {
    board: &'a Board,
}

impl<'a> ShellRenderer<'a> {
    pub fn with_board(board: &'a Board) -> Self {
        Self { board }
    }

    pub fn render(&self) -> String {
        let full_width = self.side_width() + self.board.width();

        let mut header = self.header_lines();
        for row in &mut header {
            pad_with(row, "#".to_string(), full_width, false);
        }

        let grid: Vec<Vec<String>> = self
            .side_lines()
            .into_iter()
            .zip(self.grid_lines())
            .map(|(mut side, grid)| {
                side.extend(grid);
                side
            })
            .collect();

        header
            .iter()
            .chain(&grid)
            .map(|line| {
                line.iter()
                    .map(|symbol| pad(symbol, 2, true))
                    .collect::<Vec<_>>()
                    .join("")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn side_width(&self) -> usize {
        Self::descriptions_width(self.board.descriptions(true))
    }

    fn descriptions_width(descriptions: &[Description]) -> usize {
        descriptions.iter().map(Description::len).max().unwrap_or(0)
    }

    fn desc_to_string(desc: &Description) -> Vec<String> {
        desc.vec.iter().map(ToString::to_string).collect()
    }

    fn descriptions_to_matrix(descriptions: &[Description]) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = descriptions.iter().map(Self::desc_to_string).collect();

        let width = Self::descriptions_width(descriptions);

        for row in &mut rows {
            pad_with(row, " ".to_string(), width, false);
        }
        rows
    }

    fn side_lines(&self) -> Vec<Vec<String>> {
        Self::descriptions_to_matrix(self.board.descriptions(true))
    }

    fn header_lines(&self) -> Vec<Vec<String>> {
        // every row is padded to the same width, so it cannot be jagged
        transpose(&Self::descriptions_to_matrix(self.board.descriptions(false)))
            .unwrap_or_default()
    }

    fn grid_lines(&self) -> Vec<Vec<String>> {
        self.board
            .rows()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect()
    }
}

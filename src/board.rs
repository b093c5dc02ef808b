use crate::block::{BinaryColor, Description};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum LineDirection {
    Row,
    Column,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum LinePosition {
    Row(usize),
    Column(usize),
}

impl LinePosition {
    pub fn with_direction_and_index(direction: LineDirection, index: usize) -> Self {
        match direction {
            LineDirection::Row => Self::Row(index),
            LineDirection::Column => Self::Column(index),
        }
    }
}

/// The puzzle clues together with the current state of every cell.
///
/// The cells are stored once in row-major order,
/// rows and columns are only the index mappings over that buffer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Board {
    cells: Vec<BinaryColor>,
    desc_rows: Vec<Description>,
    desc_cols: Vec<Description>,
}

impl Board {
    pub fn with_descriptions(rows: Vec<Description>, columns: Vec<Description>) -> Self {
        let height = rows.len();
        let width = columns.len();

        let cells = vec![BinaryColor::Undefined; width * height];

        Self {
            cells,
            desc_rows: rows,
            desc_cols: columns,
        }
    }

    pub fn height(&self) -> usize {
        self.desc_rows.len()
    }

    pub fn width(&self) -> usize {
        self.desc_cols.len()
    }

    pub fn descriptions(&self, rows: bool) -> &[Description] {
        if rows {
            &self.desc_rows
        } else {
            &self.desc_cols
        }
    }

    pub fn description(&self, position: LinePosition) -> &Description {
        match position {
            LinePosition::Row(index) => &self.desc_rows[index],
            LinePosition::Column(index) => &self.desc_cols[index],
        }
    }

    fn linear_index(&self, row: usize, column: usize) -> usize {
        row * self.width() + column
    }

    pub fn cell(&self, row: usize, column: usize) -> BinaryColor {
        self.cells[self.linear_index(row, column)]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[BinaryColor]> + '_ {
        let width = self.width();
        (0..self.height()).map(move |row| &self.cells[row * width..(row + 1) * width])
    }

    pub fn get_row(&self, index: usize) -> Vec<BinaryColor> {
        let start = self.linear_index(index, 0);
        self.cells[start..start + self.width()].to_vec()
    }

    pub fn get_column(&self, index: usize) -> Vec<BinaryColor> {
        (0..self.height())
            .map(|row| self.cell(row, index))
            .collect()
    }

    pub fn get_line(&self, position: LinePosition) -> Vec<BinaryColor> {
        match position {
            LinePosition::Row(index) => self.get_row(index),
            LinePosition::Column(index) => self.get_column(index),
        }
    }

    pub fn set_row(&mut self, index: usize, new: &[BinaryColor]) {
        let start = self.linear_index(index, 0);
        let width = self.width();
        self.cells[start..start + width].copy_from_slice(new);
    }

    pub fn set_column(&mut self, index: usize, new: &[BinaryColor]) {
        for (row, &color) in new.iter().enumerate() {
            let linear = self.linear_index(row, index);
            self.cells[linear] = color;
        }
    }

    pub fn set_line(&mut self, position: LinePosition, new: &[BinaryColor]) {
        match position {
            LinePosition::Row(index) => self.set_row(index, new),
            LinePosition::Column(index) => self.set_column(index, new),
        }
    }

    pub fn is_solved_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_solved())
    }

    /// Fraction of the cells with the known color.
    pub fn solution_rate(&self) -> f64 {
        if self.cells.is_empty() {
            return 1.0;
        }

        let solved = self.cells.iter().filter(|cell| cell.is_solved()).count();
        solved as f64 / self.cells.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, LineDirection, LinePosition};
    use crate::block::{BinaryColor::*, Description};

    fn u_letter() -> Board {
        // X   X
        // X   X
        // X X X
        let rows = vec![
            Description::from_sizes(&[1, 1]),
            Description::from_sizes(&[1, 1]),
            Description::from_sizes(&[3]),
        ];
        let columns = vec![
            Description::from_sizes(&[3]),
            Description::from_sizes(&[1]),
            Description::from_sizes(&[3]),
        ];

        Board::with_descriptions(rows, columns)
    }

    #[test]
    fn initially_undefined() {
        let board = u_letter();
        assert_eq!(board.height(), 3);
        assert_eq!(board.width(), 3);
        assert_eq!(board.get_row(0), [Undefined, Undefined, Undefined]);
        assert!(!board.is_solved_full());
        assert_eq!(board.solution_rate(), 0.0);
    }

    #[test]
    fn row_and_column_views_share_cells() {
        let mut board = u_letter();
        board.set_row(1, &[Black, White, Black]);
        assert_eq!(board.get_column(0), [Undefined, Black, Undefined]);
        assert_eq!(board.get_column(1), [Undefined, White, Undefined]);

        board.set_line(LinePosition::Column(2), &[Black, Black, Black]);
        assert_eq!(board.get_row(0), [Undefined, Undefined, Black]);
        assert_eq!(board.get_line(LinePosition::Row(2)), [Undefined, Undefined, Black]);
        assert_eq!(board.cell(1, 2), Black);
    }

    #[test]
    fn non_square() {
        let board = Board::with_descriptions(
            vec![Description::from_sizes(&[2]); 2],
            vec![Description::from_sizes(&[1]); 5],
        );
        assert_eq!(board.get_row(1).len(), 5);
        assert_eq!(board.get_column(4).len(), 2);
        assert_eq!(board.rows().count(), 2);
    }

    #[test]
    fn line_positions() {
        assert_eq!(
            LinePosition::with_direction_and_index(LineDirection::Column, 4),
            LinePosition::Column(4)
        );
        assert_eq!(
            LinePosition::with_direction_and_index(LineDirection::Row, 0),
            LinePosition::Row(0)
        );
    }
}

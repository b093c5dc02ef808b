use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// State of a single cell.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum BinaryColor {
    Undefined,
    White,
    Black,
    // special value for DynamicSolver
    BlackOrWhite,
}

impl Default for BinaryColor {
    fn default() -> Self {
        Self::Undefined
    }
}

impl BinaryColor {
    pub fn blank() -> Self {
        Self::White
    }

    pub fn is_solved(self) -> bool {
        self == Self::Black || self == Self::White
    }

    pub fn can_be_blank(self) -> bool {
        self != Self::Black
    }

    pub fn can_be_black(self) -> bool {
        self != Self::White
    }

    /// Accumulate one more possible color into the cell.
    pub fn add_color(self, color: Self) -> Self {
        match self {
            Self::Undefined => color,
            value => {
                if value == color {
                    value
                } else {
                    Self::BlackOrWhite
                }
            }
        }
    }

    /// Collapse the accumulated variants back into the regular cell states.
    pub fn collapse(self) -> Self {
        if self == Self::BlackOrWhite {
            Self::Undefined
        } else {
            self
        }
    }
}

impl fmt::Display for BinaryColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryColor::*;

        let symbol = match self {
            White => '.',
            Black => '\u{2b1b}',
            Undefined | BlackOrWhite => '?',
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Default, Clone, Copy)]
pub struct BinaryBlock(pub usize);

impl BinaryBlock {
    pub fn size(self) -> usize {
        self.0
    }

    /// The minimal index where each block can end
    /// if all the previous blocks are packed to the left.
    pub fn partial_sums(desc: &[Self]) -> Vec<usize> {
        desc.iter()
            .scan(None, |prev, block| {
                let current = if let Some(prev_size) = prev {
                    *prev_size + block.0 + 1
                } else {
                    block.0
                };
                *prev = Some(current);
                *prev
            })
            .collect()
    }
}

impl FromStr for BinaryBlock {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for BinaryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered sequence of blocks for a single row or column.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Description {
    pub vec: Vec<BinaryBlock>,
}

impl Description {
    pub fn new(mut vec: Vec<BinaryBlock>) -> Self {
        // remove zero blocks
        vec.retain(|block| block.size() > 0);
        Self { vec }
    }

    pub fn from_sizes(sizes: &[usize]) -> Self {
        Self::new(sizes.iter().copied().map(BinaryBlock).collect())
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.vec.iter().map(|block| block.size()).collect()
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
}

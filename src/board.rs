use std::fmt;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Index of the center cell.
pub const CENTER: usize = 4;

/// Indices of the four corner cells.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// The 8 index triples that end the game when uniformly occupied.
///
/// Rows first, then columns, then the two diagonals. The order matters: when
/// a board is scanned for a winner the first complete line in this list is
/// reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One of the two player symbols.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mark {
    /// Always moves first.
    X,
    O,
}

impl Mark {
    /// Returns the other mark.
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// A 3x3 grid stored row-major: row 0 is `0, 1, 2`, row 1 is `3, 4, 5`, row 2 is `6, 7, 8`.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Creates a board from an arbitrary cell layout.
    ///
    /// The layout is not checked for reachability, so a board may hold more
    /// of one mark than a real game could produce.
    pub const fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Returns all cells in index order.
    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// Returns the mark at `index`, or `None` for an empty or out-of-range cell.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Returns `true` if `index` is on the board and nothing has been placed there.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    /// Returns the indices of all empty cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Returns the first complete line in [`WIN_LINES`] order together with its owner.
    pub fn winning_line(&self) -> Option<(Mark, [usize; 3])> {
        WIN_LINES.iter().find_map(|&[a, b, c]| match self.cells[a] {
            Some(mark) if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) => {
                Some((mark, [a, b, c]))
            }
            _ => None,
        })
    }

    /// Returns `true` if placing `mark` on the empty cell `index` would complete a line.
    ///
    /// The board itself is left untouched.
    pub fn completes_line(&self, index: usize, mark: Mark) -> bool {
        if !self.is_empty_at(index) {
            return false;
        }

        WIN_LINES
            .iter()
            .filter(|line| line.contains(&index))
            .any(|line| {
                line.iter()
                    .all(|&i| i == index || self.cells[i] == Some(mark))
            })
    }

    /// Parses a layout like `"XOX XOO ..X"`; whitespace is ignored and `.` or `_` is empty.
    #[cfg(test)]
    pub(crate) fn from_pattern(pattern: &str) -> Self {
        let cells: Vec<Option<Mark>> = pattern
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '.' | '_' => None,
                other => panic!("unexpected cell character {other:?}"),
            })
            .collect();
        let cells: [Option<Mark>; CELL_COUNT] = cells
            .try_into()
            .unwrap_or_else(|v: Vec<_>| panic!("expected 9 cells, found {}", v.len()));
        Self::from_cells(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(3).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col_index, cell) in row.iter().enumerate() {
                if col_index > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    Some(mark) => write!(f, "{mark}")?,
                    None => f.write_str(".")?,
                }
            }
        }
        Ok(())
    }
}

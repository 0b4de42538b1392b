//! Board data and cell markers.
//!
//! This module contains the [`Board`] struct holding the fixed grid of [`Cell`] markers, the static
//! starting layout of the game, and the bounds check used to validate candidate moves.

use std::fmt;

#[cfg(test)]
use color_eyre::eyre::{bail, OptionExt as _, Result};

/// Number of rows on the board.
pub const ROWS: usize = 5;

/// Number of columns on the board.
pub const COLS: usize = 5;

/// Starting layout of every run.
///
/// Markers follow [`Cell::marker`]: `P` is the player, `.` the floor, `#` an obstacle and `T` a
/// treasure. Rows are decoded at compile time, so an unknown marker fails the build.
const LAYOUT: [[Cell; COLS]; ROWS] = [
    layout_row(b"P.T.."),
    layout_row(b".#.#."),
    layout_row(b"....T"),
    layout_row(b"#.#.."),
    layout_row(b"...T."),
];

/// Decodes one row of [`LAYOUT`] from its markers.
///
/// # Panics
///
/// Panics on a byte that is not a cell marker. [`LAYOUT`] evaluates it at compile time.
#[expect(
    clippy::indexing_slicing,
    reason = "Both arrays have COLS elements and the index stays below COLS."
)]
const fn layout_row(markers: &[u8; COLS]) -> [Cell; COLS] {
    let mut row = [Cell::Empty; COLS];
    let mut idx = 0;
    while idx < COLS {
        row[idx] = match Cell::from_marker(markers[idx] as char) {
            Some(cell) => cell,
            None => panic!("unknown marker in board layout"),
        };
        idx += 1;
    }

    row
}

/// Single marker stored in a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// The player character. Exactly one cell holds it at any time.
    Player,
    /// Walkable floor.
    Empty,
    /// Impassable obstacle.
    Obstacle,
    /// Collectible treasure. Turns into [`Cell::Empty`] once picked up.
    Treasure,
}

impl Cell {
    /// Returns the character used to display the cell.
    pub const fn marker(self) -> char {
        match self {
            Self::Player => 'P',
            Self::Empty => '.',
            Self::Obstacle => '#',
            Self::Treasure => 'T',
        }
    }

    /// Builds a cell from its display character, if the character is a known marker.
    pub const fn from_marker(marker: char) -> Option<Self> {
        match marker {
            'P' => Some(Self::Player),
            '.' => Some(Self::Empty),
            '#' => Some(Self::Obstacle),
            'T' => Some(Self::Treasure),
            _ => None,
        }
    }
}

/// Row and column of a cell on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    /// Zero-based row index, counted from the top.
    pub row: usize,
    /// Zero-based column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Builds a position from a row and a column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Fixed-size grid of cell markers.
///
/// This structure owns the play area for the whole lifetime of a run. Its dimensions never change;
/// only the markers inside it are rewritten as the player moves and collects treasure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Cells stored in row-major order.
    cells: [[Cell; COLS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self { cells: LAYOUT }
    }
}

impl Board {
    /// Builds a board from a multiline layout of cell markers, for tests that need another board.
    ///
    /// Blank lines and surrounding whitespace are ignored, so layouts can be written as indented
    /// string literals.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - The layout does not have exactly [`ROWS`] rows of [`COLS`] markers
    /// - A character is not a known cell marker
    /// - The layout does not contain exactly one player marker
    #[cfg(test)]
    pub(crate) fn parse(layout: &str) -> Result<Self> {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != ROWS {
            bail!("expected {ROWS} rows in board layout, found {}", lines.len());
        }

        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, line) in cells.iter_mut().zip(&lines) {
            if line.chars().count() != COLS {
                bail!("expected {COLS} markers in board row {line:?}");
            }
            for (cell, marker) in row.iter_mut().zip(line.chars()) {
                *cell = Cell::from_marker(marker)
                    .ok_or_eyre("found an unknown marker in board layout")?;
            }
        }

        let board = Self { cells };
        if board.count(Cell::Player) != 1 {
            bail!("board layout must contain exactly one player marker");
        }

        Ok(board)
    }

    /// Checks whether a candidate coordinate lies inside the board.
    ///
    /// Any integer pair is accepted; negative or too-large values simply answer `false`.
    pub fn is_valid_move(row: isize, col: isize) -> bool {
        usize::try_from(row).is_ok_and(|row| row < ROWS)
            && usize::try_from(col).is_ok_and(|col| col < COLS)
    }

    /// Returns the marker at a position, or `None` if the position is off the board.
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    /// Overwrites the marker at a position. Positions off the board are left untouched.
    pub(crate) fn set(&mut self, position: Position, cell: Cell) {
        if let Some(slot) = self
            .cells
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.col))
        {
            *slot = cell;
        }
    }

    /// Finds the position of the player marker.
    pub fn player(&self) -> Option<Position> {
        self.cells.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|cell| *cell == Cell::Player)
                .map(|col| Position::new(row, col))
        })
    }

    /// Counts how many cells hold the given marker.
    pub fn count(&self, marker: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == marker)
            .count()
    }

    /// Iterates over the rows of the board from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(formatter, "{} ", cell.marker())?;
            }
            writeln!(formatter)?;
        }

        Ok(())
    }
}

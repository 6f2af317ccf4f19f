//! One player's fleet placement and damage state.

use core::fmt;

use crate::bitboard::Mask;
use crate::cell::Cell;
use crate::common::LayoutError;
use crate::config::{BOARD_SIZE, COMPUTER_FLEET, HUMAN_FLEET};
use crate::resolver::Direction;
use crate::ship::{Orientation, ShipPlacement};

const SIZE: usize = BOARD_SIZE as usize;

/// What the presentation layer needs to draw one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CellView {
    pub has_ship: bool,
    pub is_hit: bool,
    pub is_sunk: bool,
}

/// Coordinates in the fixed scan order: rows from the last to the first,
/// columns left to right within a row.
pub fn scan_order() -> impl Iterator<Item = (usize, usize)> {
    (0..SIZE).rev().flat_map(|row| (0..SIZE).map(move |col| (row, col)))
}

/// 8×8 grid of encoded cells addressed by (row, col).
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// A board of open sea.
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::SEA; SIZE]; SIZE],
        }
    }

    /// The human player's fixed fleet.
    pub fn new_human_board() -> Self {
        Self::built_in(&HUMAN_FLEET)
    }

    /// The computer's fixed fleet, a mirror image of the human one.
    pub fn new_computer_board() -> Self {
        Self::built_in(&COMPUTER_FLEET)
    }

    fn built_in(fleet: &[ShipPlacement]) -> Self {
        match Self::from_layout(fleet) {
            Ok(board) => board,
            Err(e) => panic!("built-in fleet layout is invalid: {}", e),
        }
    }

    /// Expand a fleet table into cells.
    ///
    /// Ships must fit on the board, must not share a cell and must not touch
    /// each other, diagonals included.
    pub fn from_layout(fleet: &[ShipPlacement]) -> Result<Self, LayoutError> {
        let mut board = Board::empty();
        let mut occupied = Mask::new();
        for placement in fleet {
            let mask = placement.mask()?;
            if mask.intersects(&occupied) {
                return Err(LayoutError::ShipOverlaps(placement.kind));
            }
            if mask.halo().intersects(&occupied) {
                return Err(LayoutError::ShipsAdjacent(placement.kind));
            }
            occupied = occupied | mask;

            let horizontal = placement.orientation == Orientation::Horizontal;
            let last = placement.length() - 1;
            for (i, (row, col)) in placement.cells().enumerate() {
                board.cells[row][col] = Cell::ship(placement.kind, horizontal, i == 0 || i == last);
            }
        }
        log::debug!("built board with {} ship cells", occupied.count_ones());
        Ok(board)
    }

    /// Import a pre-computed bit matrix, validating every cell and run.
    pub fn from_raw_grid(raw: [[u8; SIZE]; SIZE]) -> Result<Self, LayoutError> {
        let mut board = Board::empty();
        for (row, line) in raw.iter().enumerate() {
            for (col, &bits) in line.iter().enumerate() {
                let cell = Cell::from_bits(bits, row, col)?;
                if cell.is_hit() {
                    return Err(LayoutError::PreFired { row, col });
                }
                board.cells[row][col] = cell;
            }
        }
        board.validate_runs()?;
        Ok(board)
    }

    /// Every run must have one kind and orientation, an end marker on both
    /// extremes only, the kind's length, and no contact with other runs.
    fn validate_runs(&self) -> Result<(), LayoutError> {
        let mut seen = Mask::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let first = self.cells[row][col];
                if first.is_sea() || seen.get(row, col)? {
                    continue;
                }
                let Some(kind) = first.ship_kind() else {
                    continue;
                };
                let direction = if first.is_horizontal() {
                    Direction::Right
                } else {
                    Direction::Down
                };

                let mut run = Mask::new();
                let mut length = 0;
                let mut ends = 0;
                let mut last_end = false;
                let mut pos = Some((row, col));
                while let Some((r, c)) = pos {
                    let cell = self.cells[r][c];
                    if cell.is_sea() {
                        break;
                    }
                    if cell.ship_kind() != Some(kind) || cell.is_horizontal() != first.is_horizontal() {
                        return Err(LayoutError::MalformedRun { row: r, col: c });
                    }
                    run.set(r, c)?;
                    length += 1;
                    last_end = cell.is_end();
                    if last_end {
                        ends += 1;
                    }
                    pos = direction.step(r, c);
                }
                if length < 2 || ends != 2 || !first.is_end() || !last_end {
                    return Err(LayoutError::MalformedRun { row, col });
                }
                if length != kind.length() {
                    return Err(LayoutError::WrongLength { kind, found: length });
                }
                if run.halo().intersects(&seen) {
                    return Err(LayoutError::ShipsAdjacent(kind));
                }
                seen = seen | run;
            }
        }
        Ok(())
    }

    #[inline]
    fn check_bounds(row: usize, col: usize) {
        assert!(
            row < SIZE && col < SIZE,
            "cell ({}, {}) is off the board",
            row,
            col
        );
    }

    /// Cell at (row, col). Panics if off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        Self::check_bounds(row, col);
        self.cells[row][col]
    }

    /// Replace the cell at (row, col). Panics if off the board.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        Self::check_bounds(row, col);
        self.cells[row][col] = cell;
    }

    /// Rendering summary of one cell.
    pub fn describe(&self, row: usize, col: usize) -> CellView {
        let cell = self.get(row, col);
        CellView {
            has_ship: cell.has_ship(),
            is_hit: cell.is_hit(),
            is_sunk: cell.is_sunk(),
        }
    }

    fn project(&self, keep: impl Fn(Cell) -> bool) -> Mask {
        Mask::from_fn(|row, col| keep(self.cells[row][col]))
    }

    /// Cells holding a ship.
    pub fn ship_mask(&self) -> Mask {
        self.project(Cell::has_ship)
    }

    /// Cells already fired at.
    pub fn hit_mask(&self) -> Mask {
        self.project(Cell::is_hit)
    }

    /// Cells belonging to sunk ships.
    pub fn sunk_mask(&self) -> Mask {
        self.project(Cell::is_sunk)
    }

    /// True iff every ship cell is sunk.
    pub fn all_ship_cells_sunk(&self) -> bool {
        (self.ship_mask() & !self.sunk_mask()).is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.iter().enumerate() {
            for cell in line {
                let ch = match (cell.has_ship(), cell.is_hit(), cell.is_sunk()) {
                    (_, _, true) => '#',
                    (true, true, false) => 'X',
                    (true, false, _) => 'S',
                    (false, true, _) => 'o',
                    (false, false, _) => '.',
                };
                write!(f, "{} ", ch)?;
            }
            if row + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        writeln!(f, "{}", self)?;
        write!(f, "}}")
    }
}

//! Walks a contiguous ship run and sinks it once every segment is hit.

use crate::board::Board;
use crate::config::BOARD_SIZE;
use crate::ship::ShipKind;

/// One of the four axis directions, as a (row, col) step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Decreasing row.
    Up,
    /// Increasing row.
    Down,
    /// Decreasing column.
    Left,
    /// Increasing column.
    Right,
}

impl Direction {
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The neighbouring coordinate, or `None` when it falls off the board.
    pub fn step(self, row: usize, col: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        let size = BOARD_SIZE as usize;
        (row < size && col < size).then_some((row, col))
    }
}

/// Walk from (`row`, `col`) in `direction` over ship cells until the board
/// edge or open sea.
///
/// If every segment on the walk is hit, the whole run is marked sunk and its
/// kind returned. An unhit segment leaves the board untouched and yields
/// `None`, as does starting on sea. The caller must start at one end of the
/// run and point `direction` at the other end.
pub fn resolve_run(
    board: &mut Board,
    row: usize,
    col: usize,
    direction: Direction,
) -> Option<ShipKind> {
    let mut length = 0;
    let mut pos = Some((row, col));
    while let Some((r, c)) = pos {
        let cell = board.get(r, c);
        if cell.is_sea() {
            break;
        }
        if !cell.is_hit() {
            return None;
        }
        length += 1;
        pos = direction.step(r, c);
    }
    if length == 0 {
        return None;
    }

    let kind = board.get(row, col).ship_kind();
    let (mut r, mut c) = (row, col);
    for i in 0..length {
        board.set(r, c, board.get(r, c).mark_sunk());
        if i + 1 < length {
            // the first pass already proved the next cell is on the board
            (r, c) = direction.step(r, c)?;
        }
    }
    kind
}

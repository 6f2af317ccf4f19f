//! Finds fully hit ships and hands them to the resolver.

use crate::board::{scan_order, Board};
use crate::common::Side;
use crate::config::MAX_SHIPS;
use crate::resolver::{resolve_run, Direction};
use crate::ship::ShipKind;

/// Notification that `owner` lost a ship of `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SunkShip {
    pub owner: Side,
    pub kind: ShipKind,
}

/// Fixed-capacity, ordered list of sunk-ship events. Pushing past capacity
/// drops the event. The default capacity holds every ship a board can fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunkShips<const CAP: usize = MAX_SHIPS> {
    events: [Option<SunkShip>; CAP],
    len: usize,
}

impl<const CAP: usize> SunkShips<CAP> {
    pub const fn new() -> Self {
        Self {
            events: [None; CAP],
            len: 0,
        }
    }

    pub fn push(&mut self, event: SunkShip) {
        if self.len < CAP {
            self.events[self.len] = Some(event);
            self.len += 1;
        } else {
            log::warn!("dropping sunk event {:?}: queue full", event);
        }
    }

    pub fn extend<const M: usize>(&mut self, other: &SunkShips<M>) {
        for event in other.iter() {
            self.push(event);
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Option<SunkShip> {
        self.events.get(index).copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = SunkShip> + '_ {
        self.events[..self.len].iter().flatten().copied()
    }
}

impl<const CAP: usize> Default for SunkShips<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction that leads from the end cell at (`row`, `col`) across its run.
///
/// A horizontal end whose left neighbour is sea or off the board is the left
/// end, so the walk goes right; otherwise it goes left. Vertical ends look at
/// the cell one row up in the same way.
fn walk_direction(board: &Board, row: usize, col: usize) -> Direction {
    let open = |pos: Option<(usize, usize)>| pos.map_or(true, |(r, c)| board.get(r, c).is_sea());
    if board.get(row, col).is_horizontal() {
        if open(Direction::Left.step(row, col)) {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if open(Direction::Up.step(row, col)) {
        Direction::Down
    } else {
        Direction::Up
    }
}

/// Sink every fully hit ship on `board` and report each one once.
///
/// Cells are visited in [`scan_order`]; for each unsunk end the run is
/// walked towards its opposite end. Sinking marks the opposite end as well,
/// so a ship never produces two events.
pub fn scan_and_resolve(board: &mut Board, owner: Side) -> SunkShips {
    let mut sunk = SunkShips::new();
    for (row, col) in scan_order() {
        let cell = board.get(row, col);
        if !cell.is_end() || cell.is_sunk() {
            continue;
        }
        let direction = walk_direction(board, row, col);
        if let Some(kind) = resolve_run(board, row, col, direction) {
            log::info!("{:?} {} sunk", owner, kind);
            sunk.push(SunkShip { owner, kind });
        }
    }
    sunk
}

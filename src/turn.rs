//! Applying shots to a board.

use crate::ai::ScanAi;
use crate::board::Board;
use crate::common::{Outcome, Side};
use crate::player::Player;
use crate::scanner::{scan_and_resolve, SunkShips};

/// Everything one shot produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub row: usize,
    pub col: usize,
    pub outcome: Outcome,
    /// Ships sunk by this shot, owned by the side that was fired at.
    pub sunk: SunkShips,
}

/// `attacker` fires at (`row`, `col`) on the opponent's `board`.
///
/// Re-firing at a hit cell changes nothing and reports `AlreadyHit`. A hit
/// on a ship runs the sunken-ship scan before returning.
pub fn fire(attacker: Side, board: &mut Board, row: usize, col: usize) -> TurnReport {
    let cell = board.get(row, col);
    let mut report = TurnReport {
        row,
        col,
        outcome: Outcome::AlreadyHit,
        sunk: SunkShips::new(),
    };
    if cell.is_hit() {
        log::debug!("{:?} re-fired at ({}, {})", attacker, row, col);
        return report;
    }

    board.set(row, col, cell.mark_hit());
    if cell.has_ship() {
        report.outcome = Outcome::Hit;
        report.sunk = scan_and_resolve(board, attacker.opponent());
    } else {
        report.outcome = Outcome::Miss;
    }
    log::debug!(
        "{:?} fired at ({}, {}): {:?}",
        attacker,
        row,
        col,
        report.outcome
    );
    report
}

/// The computer's turn against the human `board`. Returns `None` only when
/// no unhit cell is left.
pub fn run_automated_turn(board: &mut Board) -> Option<TurnReport> {
    let (row, col) = ScanAi::new().select_target(board)?;
    Some(fire(Side::Computer, board, row, col))
}

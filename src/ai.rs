// Fixed-order targeting for the computer opponent.
// No randomness and no memory of earlier shots, so every game replays the same way.

use crate::board::{scan_order, Board};
use crate::player::Player;

/// First cell in scan order that has not been fired at.
pub fn first_unhit(board: &Board) -> Option<(usize, usize)> {
    scan_order().find(|&(row, col)| !board.get(row, col).is_hit())
}

/// Computer opponent that sweeps the board in scan order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanAi;

impl ScanAi {
    pub fn new() -> Self {
        Self
    }
}

impl Player for ScanAi {
    fn select_target(&mut self, target: &Board) -> Option<(usize, usize)> {
        first_unhit(target)
    }
}

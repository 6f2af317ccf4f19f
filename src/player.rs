use crate::board::Board;

/// Interface implemented by target-selection strategies.
pub trait Player {
    /// Choose the next cell to fire at on `target`, or `None` if every cell
    /// has already been fired at.
    fn select_target(&mut self, target: &Board) -> Option<(usize, usize)>;
}

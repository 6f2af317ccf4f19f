use crate::config::BOARD_SIZE;

const SIZE: i16 = BOARD_SIZE as i16;

/// Targeting cursor on the computer board, in display coordinates: `x` is
/// the column and `y` grows upwards, so board row = `7 - y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    x: u8,
    y: u8,
    visible: bool,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            x: 3,
            y: 3,
            visible: true,
        }
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    /// Whether the flashing cursor is currently drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Move by (`dx`, `dy`), wrapping around both edges.
    pub fn move_by(&mut self, dx: i8, dy: i8) {
        self.x = (self.x as i16 + dx as i16).rem_euclid(SIZE) as u8;
        self.y = (self.y as i16 + dy as i16).rem_euclid(SIZE) as u8;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// (row, col) of the targeted board cell.
    pub fn board_coord(&self) -> (usize, usize) {
        display_to_board(self.x, self.y)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate display (x, y) into board (row, col).
pub fn display_to_board(x: u8, y: u8) -> (usize, usize) {
    ((BOARD_SIZE - 1 - y) as usize, x as usize)
}

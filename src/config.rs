use crate::ship::{Orientation, ShipKind, ShipPlacement};

pub const BOARD_SIZE: u8 = 8;
pub const NUM_SHIPS: usize = 6;

/// Most ships any valid board can hold: every ship spans at least two cells.
pub const MAX_SHIPS: usize = (BOARD_SIZE as usize * BOARD_SIZE as usize) / 2;

/// Human fleet, anchored at the top-left (lowest row/column) cell of each ship.
pub const HUMAN_FLEET: [ShipPlacement; NUM_SHIPS] = [
    ShipPlacement::new(ShipKind::Carrier, Orientation::Horizontal, 1, 1),
    ShipPlacement::new(ShipKind::Cruiser, Orientation::Horizontal, 6, 2),
    ShipPlacement::new(ShipKind::Destroyer, Orientation::Vertical, 4, 0),
    ShipPlacement::new(ShipKind::Frigate, Orientation::Vertical, 4, 7),
    ShipPlacement::new(ShipKind::Corvette, Orientation::Vertical, 3, 2),
    ShipPlacement::new(ShipKind::Submarine, Orientation::Vertical, 3, 5),
];

/// Computer fleet: the human fleet mirrored across the horizontal axis.
pub const COMPUTER_FLEET: [ShipPlacement; NUM_SHIPS] = [
    HUMAN_FLEET[0].mirrored(),
    HUMAN_FLEET[1].mirrored(),
    HUMAN_FLEET[2].mirrored(),
    HUMAN_FLEET[3].mirrored(),
    HUMAN_FLEET[4].mirrored(),
    HUMAN_FLEET[5].mirrored(),
];

/// Total number of ship segments on one board.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&HUMAN_FLEET);

const fn fleet_cells(fleet: &[ShipPlacement]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

/// Cap for the consecutive invalid-move tally.
pub const MAX_INVALID_MOVES: u8 = 3;

/// Room for every ship of both boards in one event queue.
pub const MAX_EVENTS: usize = 2 * MAX_SHIPS;

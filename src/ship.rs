//! Ship kinds and declarative fleet placements.

use core::fmt;

use crate::bitboard::Mask;
use crate::common::LayoutError;
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// The run extends along a row (increasing column).
    Horizontal,
    /// The run extends along a column (increasing row).
    Vertical,
}

/// Every kind of ship in the fleet. The discriminant is the 3-bit code
/// stored in a [`Cell`](crate::Cell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ShipKind {
    Carrier = 1,
    Cruiser = 2,
    Destroyer = 3,
    Frigate = 4,
    Corvette = 5,
    Submarine = 6,
}

impl ShipKind {
    pub const ALL: [ShipKind; 6] = [
        ShipKind::Carrier,
        ShipKind::Cruiser,
        ShipKind::Destroyer,
        ShipKind::Frigate,
        ShipKind::Corvette,
        ShipKind::Submarine,
    ];

    /// 3-bit kind code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Exact decode of a kind code. `0` is sea.
    pub const fn from_code(code: u8) -> Option<ShipKind> {
        match code {
            1 => Some(ShipKind::Carrier),
            2 => Some(ShipKind::Cruiser),
            3 => Some(ShipKind::Destroyer),
            4 => Some(ShipKind::Frigate),
            5 => Some(ShipKind::Corvette),
            6 => Some(ShipKind::Submarine),
            _ => None,
        }
    }

    /// Name a raw kind field the way legacy bit matrices were read.
    ///
    /// Kind codes overlap as bit patterns, so each kind is recognised by a
    /// priority-ordered check. Only layout import uses this; decoding a
    /// validated cell goes through [`ShipKind::from_code`].
    pub const fn classify(bits: u8) -> Option<ShipKind> {
        const CARRIER: u8 = ShipKind::Carrier.code();
        const CRUISER: u8 = ShipKind::Cruiser.code();
        const DESTROYER: u8 = ShipKind::Destroyer.code();
        const FRIGATE: u8 = ShipKind::Frigate.code();
        const CORVETTE: u8 = ShipKind::Corvette.code();
        const SUBMARINE: u8 = ShipKind::Submarine.code();

        let carrier = bits & CARRIER != 0;
        let cruiser = bits & CRUISER != 0;
        let frigate = bits & FRIGATE != 0;
        if carrier && !cruiser && !frigate {
            Some(ShipKind::Carrier)
        } else if cruiser && !carrier && !frigate {
            Some(ShipKind::Cruiser)
        } else if bits & DESTROYER != 0 && !frigate {
            Some(ShipKind::Destroyer)
        } else if frigate && !carrier && !cruiser {
            Some(ShipKind::Frigate)
        } else if bits & CORVETTE != 0 && !cruiser {
            Some(ShipKind::Corvette)
        } else if bits & SUBMARINE != 0 {
            Some(ShipKind::Submarine)
        } else {
            None
        }
    }

    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 6,
            ShipKind::Cruiser => 4,
            ShipKind::Destroyer | ShipKind::Frigate => 3,
            ShipKind::Corvette | ShipKind::Submarine => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Frigate => "Frigate",
            ShipKind::Corvette => "Corvette",
            ShipKind::Submarine => "Submarine",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of a fleet table: a ship kind anchored at its lowest
/// (row, col) cell and extending in its orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipPlacement {
    pub kind: ShipKind,
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

impl ShipPlacement {
    pub const fn new(kind: ShipKind, orientation: Orientation, row: usize, col: usize) -> Self {
        Self {
            kind,
            orientation,
            row,
            col,
        }
    }

    pub const fn length(&self) -> usize {
        self.kind.length()
    }

    /// The same ship reflected across the board's horizontal axis
    /// (`row -> BOARD_SIZE - 1 - row`), re-anchored at its new lowest row.
    pub const fn mirrored(self) -> Self {
        let size = BOARD_SIZE as usize;
        let row = match self.orientation {
            Orientation::Horizontal => size - 1 - self.row,
            Orientation::Vertical => size - self.row - self.kind.length(),
        };
        Self { row, ..self }
    }

    /// Cells covered by the ship, from the anchor outwards.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.length()).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Occupancy mask, or `ShipOutOfBounds` if any cell falls off the board.
    pub fn mask(&self) -> Result<Mask, LayoutError> {
        let size = BOARD_SIZE as usize;
        let (last_row, last_col) = match self.orientation {
            Orientation::Horizontal => (self.row, self.col + self.length() - 1),
            Orientation::Vertical => (self.row + self.length() - 1, self.col),
        };
        if last_row >= size || last_col >= size {
            return Err(LayoutError::ShipOutOfBounds(self.kind));
        }
        Ok(Mask::from_cells(self.cells())?)
    }
}

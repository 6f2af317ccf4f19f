//! Bit-level encoding of a single board cell.
//!
//! ```text
//!  7     6     5     4       3     2..0
//! HIT | SUNK | -  | HORIZ | END | kind code
//! ```

use crate::common::LayoutError;
use crate::ship::ShipKind;

const KIND_MASK: u8 = 0b0000_0111;
const END: u8 = 0b0000_1000;
const HORIZONTAL: u8 = 0b0001_0000;
const SUNK: u8 = 0b0100_0000;
const HIT: u8 = 0b1000_0000;
const KNOWN_BITS: u8 = KIND_MASK | END | HORIZONTAL | SUNK | HIT;

/// One encoded board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell(u8);

impl Cell {
    /// Open sea, never fired at.
    pub const SEA: Cell = Cell(0);

    /// A ship segment. `end` marks the two extreme cells of a run.
    pub const fn ship(kind: ShipKind, horizontal: bool, end: bool) -> Cell {
        let mut bits = kind.code();
        if horizontal {
            bits |= HORIZONTAL;
        }
        if end {
            bits |= END;
        }
        Cell(bits)
    }

    /// Validates a raw encoded byte.
    ///
    /// The kind field is named with [`ShipKind::classify`] and must decode
    /// back to the same code; a sunk cell must also be hit. Orientation and
    /// end flags on sea cells are dropped.
    pub fn from_bits(bits: u8, row: usize, col: usize) -> Result<Cell, LayoutError> {
        let code = bits & KIND_MASK;
        let ambiguous = LayoutError::AmbiguousKind {
            row,
            col,
            bits: code,
        };
        if bits & !KNOWN_BITS != 0 {
            return Err(ambiguous);
        }
        if bits & SUNK != 0 && bits & HIT == 0 {
            return Err(LayoutError::MalformedRun { row, col });
        }
        match ShipKind::classify(code) {
            None if code == 0 => Ok(Cell(bits & HIT)),
            Some(kind) if kind.code() == code => Ok(Cell(bits)),
            _ => Err(ambiguous),
        }
    }

    /// Raw encoded byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn has_ship(self) -> bool {
        self.0 & KIND_MASK != 0
    }

    pub const fn ship_kind(self) -> Option<ShipKind> {
        ShipKind::from_code(self.0 & KIND_MASK)
    }

    pub const fn is_hit(self) -> bool {
        self.0 & HIT != 0
    }

    pub const fn is_sunk(self) -> bool {
        self.0 & SUNK != 0
    }

    /// Always false on sea.
    pub const fn is_end(self) -> bool {
        self.has_ship() && self.0 & END != 0
    }

    /// Always false on sea.
    pub const fn is_horizontal(self) -> bool {
        self.has_ship() && self.0 & HORIZONTAL != 0
    }

    /// Terrain check that ignores hit status.
    pub const fn is_sea(self) -> bool {
        !self.has_ship()
    }

    #[must_use]
    pub const fn mark_hit(self) -> Cell {
        Cell(self.0 | HIT)
    }

    /// Marks a ship segment sunk. Sinking implies a hit.
    #[must_use]
    pub const fn mark_sunk(self) -> Cell {
        Cell(self.0 | HIT | SUNK)
    }
}

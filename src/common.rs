//! Common types: sides, shot outcomes and errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::ship::ShipKind;

/// The two fleets in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Result of firing at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The cell had already been fired at; nothing changed.
    AlreadyHit,
    /// Open sea.
    Miss,
    /// A ship segment.
    Hit,
}

/// Errors raised while building a board from a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Ship extends past the board edge.
    ShipOutOfBounds(ShipKind),
    /// Two ships claim the same cell.
    ShipOverlaps(ShipKind),
    /// Ship touches another ship, diagonals included.
    ShipsAdjacent(ShipKind),
    /// Raw kind bits do not name exactly one ship kind.
    AmbiguousKind { row: usize, col: usize, bits: u8 },
    /// Run has inconsistent kind, orientation or end markers.
    MalformedRun { row: usize, col: usize },
    /// Run length does not match the kind's length.
    WrongLength { kind: ShipKind, found: usize },
    /// Layout carries hit or sunk markers.
    PreFired { row: usize, col: usize },
}

impl From<BitBoardError> for LayoutError {
    fn from(err: BitBoardError) -> Self {
        LayoutError::BitBoardError(err)
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            LayoutError::ShipOutOfBounds(kind) => write!(f, "{} is out of bounds", kind),
            LayoutError::ShipOverlaps(kind) => write!(f, "{} overlaps another ship", kind),
            LayoutError::ShipsAdjacent(kind) => write!(f, "{} touches another ship", kind),
            LayoutError::AmbiguousKind { row, col, bits } => write!(
                f,
                "Cell ({}, {}) has ambiguous ship bits {:#05b}",
                row, col, bits
            ),
            LayoutError::MalformedRun { row, col } => {
                write!(f, "Malformed ship run at ({}, {})", row, col)
            }
            LayoutError::WrongLength { kind, found } => write!(
                f,
                "{} must be {} cells long, found {}",
                kind,
                kind.length(),
                found
            ),
            LayoutError::PreFired { row, col } => {
                write!(f, "Cell ({}, {}) is already hit in the layout", row, col)
            }
        }
    }
}

/// Errors returned by [`GameEngine`](crate::GameEngine) turn operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The game has ended; boards are frozen until `reset`.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::GameOver => write!(f, "Game is over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

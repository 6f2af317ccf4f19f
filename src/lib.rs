#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod ai;
mod bitboard;
mod board;
mod cell;
mod common;
mod config;
mod cursor;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
mod resolver;
mod scanner;
mod ship;
mod turn;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, Mask};
pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use cursor::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LogFilter};
pub use player::*;
pub use resolver::*;
pub use scanner::*;
pub use ship::*;
pub use turn::*;
#[cfg(feature = "std")]
pub use ui::*;

#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{
    board::Board,
    common::Side,
    config::BOARD_SIZE,
    cursor::Cursor,
    game::GameEngine,
    scanner::SunkShip,
};

const SIZE: usize = BOARD_SIZE as usize;

/// Text drawing of `board`. Rows are labelled with the display `y`
/// coordinate, so the top line is `y = 7`. Unhit ships are only drawn when
/// `reveal` is set; a visible cursor is drawn as `+`.
pub fn render_board(board: &Board, reveal: bool, cursor: Option<&Cursor>) -> String {
    let mut out = String::from("   ");
    for c in 0..SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');

    let target = cursor.filter(|c| c.is_visible()).map(Cursor::board_coord);
    for row in 0..SIZE {
        let _ = write!(out, "{:2} ", SIZE - 1 - row);
        for col in 0..SIZE {
            let view = board.describe(row, col);
            let ch = if target == Some((row, col)) {
                '+'
            } else if view.is_sunk {
                '#'
            } else if view.is_hit && view.has_ship {
                'X'
            } else if view.is_hit {
                'o'
            } else if reveal && view.has_ship {
                'S'
            } else {
                '.'
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// The computer board (with cursor) above the human board.
pub fn render_view(engine: &GameEngine) -> String {
    let mut out = String::from("Computer fleet:\n");
    out.push_str(&render_board(
        engine.board(Side::Computer),
        false,
        Some(engine.cursor()),
    ));
    out.push_str("\nYour fleet:\n");
    out.push_str(&render_board(engine.board(Side::Human), true, None));
    out
}

/// Message announcing a sunk ship, spoken by the computer.
pub fn sunk_message(event: &SunkShip) -> String {
    match event.owner {
        Side::Computer => format!("You Sunk My {}", event.kind),
        Side::Human => format!("I Sunk Your {}", event.kind),
    }
}

/// "Invalid move" with one `!` per earlier consecutive invalid move.
pub fn invalid_move_message(streak: u8) -> String {
    let mut msg = String::from("Invalid move");
    msg.extend(std::iter::repeat('!').take(streak as usize));
    msg
}

use crate::{
    ai::ScanAi,
    board::{Board, CellView},
    common::{GameError, Outcome, Side},
    config::{MAX_EVENTS, MAX_INVALID_MOVES},
    cursor::Cursor,
    player::Player,
    scanner::SunkShips,
    turn::{self, TurnReport},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// Carries the winning side.
    GameOver(Side),
}

/// Result of a human turn started with [`GameEngine::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTurn {
    /// The target was already hit. `streak` counts the consecutive invalid
    /// moves before this one, capped at [`MAX_INVALID_MOVES`].
    Rejected { streak: u8 },
    /// The human fired; `reply` is the computer's shot unless the human's
    /// shot ended the game.
    Played {
        shot: TurnReport,
        reply: Option<TurnReport>,
    },
}

/// Owns both fleets and all per-game state.
pub struct GameEngine {
    human: Board,
    computer: Board,
    cursor: Cursor,
    opponent: ScanAi,
    invalid_moves: u8,
    status: GameStatus,
    events: SunkShips<MAX_EVENTS>,
}

impl GameEngine {
    /// Start a game with both fixed fleets.
    pub fn new() -> Self {
        Self {
            human: Board::new_human_board(),
            computer: Board::new_computer_board(),
            cursor: Cursor::new(),
            opponent: ScanAi::new(),
            invalid_moves: 0,
            status: GameStatus::InProgress,
            events: SunkShips::new(),
        }
    }

    /// Discard the current game and start a fresh one.
    pub fn reset(&mut self) {
        *self = Self::new();
        log::info!("new game");
    }

    /// The board holding `side`'s fleet.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        }
    }

    /// Rendering summary of one cell of `side`'s board.
    pub fn describe(&self, side: Side, row: usize, col: usize) -> CellView {
        self.board(side).describe(row, col)
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn move_cursor(&mut self, dx: i8, dy: i8) {
        self.cursor.move_by(dx, dy);
    }

    pub fn flash_cursor(&mut self) {
        self.cursor.toggle();
    }

    /// Consecutive invalid moves so far, capped at [`MAX_INVALID_MOVES`].
    pub fn invalid_moves(&self) -> u8 {
        self.invalid_moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::GameOver(side) => Some(side),
            GameStatus::InProgress => None,
        }
    }

    /// Drain the sunk-ship events queued since the last call.
    pub fn take_events(&mut self) -> SunkShips<MAX_EVENTS> {
        core::mem::take(&mut self.events)
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        if self.is_game_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    fn shoot(&mut self, attacker: Side, row: usize, col: usize) -> TurnReport {
        let report = turn::fire(attacker, self.board_mut(attacker.opponent()), row, col);
        self.events.extend(&report.sunk);
        self.update_status();
        report
    }

    fn update_status(&mut self) {
        let winner = if self.computer.all_ship_cells_sunk() {
            Some(Side::Human)
        } else if self.human.all_ship_cells_sunk() {
            Some(Side::Computer)
        } else {
            None
        };
        if let Some(side) = winner {
            log::info!("game over: {:?} wins", side);
            self.status = GameStatus::GameOver(side);
        }
    }

    /// Bump the invalid-move tally on a re-fire and clear it otherwise.
    /// Returns the streak before this move when the move was invalid.
    fn tally(&mut self, outcome: Outcome) -> Option<u8> {
        if outcome != Outcome::AlreadyHit {
            self.invalid_moves = 0;
            return None;
        }
        let streak = self.invalid_moves;
        if self.invalid_moves < MAX_INVALID_MOVES {
            self.invalid_moves += 1;
        }
        Some(streak)
    }

    /// Human shot at (`row`, `col`) on the computer board. The computer does
    /// not reply; re-fires still count as invalid moves.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<TurnReport, GameError> {
        self.ensure_in_progress()?;
        let report = self.shoot(Side::Human, row, col);
        self.tally(report.outcome);
        Ok(report)
    }

    /// Computer shot on the human board. `Ok(None)` only if every cell has
    /// already been fired at.
    pub fn run_automated_turn(&mut self) -> Result<Option<TurnReport>, GameError> {
        self.ensure_in_progress()?;
        let Some((row, col)) = self.opponent.select_target(&self.human) else {
            return Ok(None);
        };
        Ok(Some(self.shoot(Side::Computer, row, col)))
    }

    /// A full human turn: fire, then let the computer reply.
    ///
    /// Re-firing at a hit cell is rejected without handing over the turn and
    /// bumps the invalid-move tally; a valid shot clears it.
    pub fn play_turn(&mut self, row: usize, col: usize) -> Result<PlayerTurn, GameError> {
        self.ensure_in_progress()?;
        let shot = self.shoot(Side::Human, row, col);
        if let Some(streak) = self.tally(shot.outcome) {
            return Ok(PlayerTurn::Rejected { streak });
        }

        let reply = if self.is_game_over() {
            None
        } else {
            self.run_automated_turn()?
        };
        Ok(PlayerTurn::Played { shot, reply })
    }

    /// [`play_turn`](Self::play_turn) at the cursor.
    pub fn fire_at_cursor(&mut self) -> Result<PlayerTurn, GameError> {
        let (row, col) = self.cursor.board_coord();
        self.play_turn(row, col)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

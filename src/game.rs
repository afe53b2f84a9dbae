//! Game session: board, turn, and move counter
//!
//! The session validates placements and evaluates outcomes. A turn is
//! `place_stone`, then `check_outcome`, then `switch_player` when the game
//! continues; `play` does all three.
//!
//! # Example
//!
//! ```
//! use gomoku::{BoardConfig, Game, Outcome, Stone};
//!
//! let mut game = Game::new(BoardConfig::default());
//! assert_eq!(game.play(7, 7), Ok(Outcome::Ongoing));
//! assert_eq!(game.current_player(), Stone::White);
//! ```

use tracing::{debug, info, instrument};

use crate::board::{Board, BoardConfig, Pos, Stone};
use crate::error::MoveError;
use crate::rules::{evaluate, find_five_line_at_pos, Outcome};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Empty board, Black to move
    Setup,
    Playing,
    /// Win or draw reached; placements are rejected
    Terminal(Outcome),
}

/// A single game between two players
#[derive(Debug, Clone)]
pub struct Game {
    config: BoardConfig,
    board: Board,
    current_player: Stone,
    /// Always equal to the number of stones on the board
    moves_played: usize,
    last_move: Option<Pos>,
    /// Set once a win or draw is detected
    result: Option<Outcome>,
}

impl Game {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            board: Board::new(config),
            current_player: Stone::Black,
            moves_played: 0,
            last_move: None,
            result: None,
        }
    }

    #[inline]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose stone the next placement writes
    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    #[inline]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Terminal outcome, once reached
    #[inline]
    pub fn result(&self) -> Option<Outcome> {
        self.result
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn phase(&self) -> Phase {
        match self.result {
            Some(outcome) => Phase::Terminal(outcome),
            None if self.moves_played == 0 => Phase::Setup,
            None => Phase::Playing,
        }
    }

    /// Place the current player's stone at 0-indexed `(row, col)`.
    ///
    /// Does not switch turns. On error nothing changes.
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player))]
    pub fn place_stone(&mut self, row: i64, col: i64) -> Result<Pos, MoveError> {
        if self.result.is_some() {
            return Err(MoveError::GameOver);
        }

        let size = self.board.size();
        let pos = self
            .board
            .pos(row, col)
            .ok_or(MoveError::OutOfBounds { row, col, size })?;

        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }

        self.board.place_stone(pos, self.current_player);
        self.moves_played += 1;
        self.last_move = Some(pos);
        debug!(%pos, moves_played = self.moves_played, "stone placed");

        let outcome = self.check_outcome(pos);
        if outcome.is_terminal() {
            info!(?outcome, moves_played = self.moves_played, "game finished");
            self.result = Some(outcome);
        }

        Ok(pos)
    }

    /// Evaluate the board right after a stone was placed at `pos`.
    ///
    /// Lines are counted for the stone on `pos`, so the result does not
    /// depend on whose turn it is now. An empty `pos` is `Ongoing`.
    pub fn check_outcome(&self, pos: Pos) -> Outcome {
        match self.board.get(pos).stone() {
            Some(mover) => evaluate(&self.board, pos, mover, self.moves_played),
            None => Outcome::Ongoing,
        }
    }

    /// Hand the turn to the other player
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Play a full turn: place, evaluate, and switch if the game continues.
    #[instrument(level = "debug", skip(self))]
    pub fn play(&mut self, row: i64, col: i64) -> Result<Outcome, MoveError> {
        self.place_stone(row, col)?;
        let outcome = self.result.unwrap_or(Outcome::Ongoing);
        if !outcome.is_terminal() {
            self.switch_player();
        }
        Ok(outcome)
    }

    /// The five (or longer) line that ended the game, if it was won
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        match (self.result, self.last_move) {
            (Some(Outcome::Win(stone)), Some(pos)) => {
                find_five_line_at_pos(&self.board, pos, stone)
            }
            _ => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

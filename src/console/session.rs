//! Interactive read/place/render loop

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info, instrument};

use super::input::{parse_input, Input};
use crate::board::{BoardConfig, Stone};
use crate::game::Game;
use crate::rules::Outcome;

/// How a console session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Player asked to leave, or input ran out
    Quit,
    Finished(Outcome),
}

/// One game played over a line-oriented reader/writer pair
pub struct ConsoleSession {
    game: Game,
}

impl ConsoleSession {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            game: Game::new(config),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run until the game ends, the player quits, or input is exhausted.
    #[instrument(skip_all, fields(size = self.game.config().size()))]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<SessionEnd> {
        let size = self.game.config().size();
        info!("console session started");

        writeln!(
            output,
            "Welcome to Gomoku! {} ({}) moves first, {} ({}) second.",
            Stone::Black,
            Stone::Black.glyph(),
            Stone::White,
            Stone::White.glyph()
        )?;
        writeln!(
            output,
            "Enter moves as `row col` (each 1-{size}), or `quit` to leave.\n"
        )?;
        write!(output, "{}", self.game.board())?;

        let mut line = String::new();
        loop {
            let player = self.game.current_player();
            write!(output, "{} ({}) to move: ", player, player.glyph())?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return self.quit(&mut output);
            }

            let (row, col) = match parse_input(&line) {
                Input::Quit => return self.quit(&mut output),
                Input::Malformed => {
                    debug!(input = line.trim(), "malformed input");
                    writeln!(output, "Please enter two numbers, for example: 8 8")?;
                    continue;
                }
                Input::Move { row, col } => (row, col),
            };

            let outcome = match self.game.play(row, col) {
                Ok(outcome) => outcome,
                Err(err) => {
                    debug!(%err, "move rejected");
                    writeln!(output, "Invalid move: {err}. Try again.")?;
                    continue;
                }
            };

            write!(output, "{}", self.game.board())?;
            match outcome {
                Outcome::Ongoing => {}
                Outcome::Win(winner) => {
                    writeln!(output, "{winner} ({}) wins!", winner.glyph())?;
                    info!(%winner, "console session finished");
                    return Ok(SessionEnd::Finished(outcome));
                }
                Outcome::Draw => {
                    writeln!(output, "The board is full. The game is a draw!")?;
                    info!("console session finished in a draw");
                    return Ok(SessionEnd::Finished(outcome));
                }
            }
        }
    }

    fn quit<W: Write>(&self, output: &mut W) -> Result<SessionEnd> {
        writeln!(output, "Game exited.")?;
        info!(moves_played = self.game.moves_played(), "console session quit");
        Ok(SessionEnd::Quit)
    }
}

//! Command-line interface for the gomoku binary.

use clap::{Parser, Subcommand};
use gomoku::DEFAULT_BOARD_SIZE;

/// Two-player Gomoku (Five in a Row)
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Two-player Five in a Row", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size (the board is size x size)
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE, global = true)]
    pub size: usize,

    /// Front end to run (defaults to the console)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal, typing `row col`
    Console,

    /// Play in a window, clicking intersections
    Gui,
}

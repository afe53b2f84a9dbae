//! Gomoku
//!
//! Two-player Five in a Row in the terminal or in a window.

mod cli;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Command};
use gomoku::console::ConsoleSession;
use gomoku::ui::GomokuApp;
use gomoku::BoardConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BoardConfig::new(cli.size)?;
    info!(size = config.size(), "starting gomoku");

    match cli.command.unwrap_or(Command::Console) {
        Command::Console => run_console(config),
        Command::Gui => run_gui(config),
    }
}

fn run_console(config: BoardConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let end = ConsoleSession::new(config).run(stdin.lock(), stdout.lock())?;
    info!(?end, "console session ended");
    Ok(())
}

fn run_gui(config: BoardConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
    .map_err(|err| anyhow!("GUI failed: {err}"))
}

//! GUI module for the Gomoku game
//!
//! Hotseat play in a native egui/eframe window.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;

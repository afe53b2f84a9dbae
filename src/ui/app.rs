//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::{debug, info};

use super::board_view::BoardView;
use super::theme::*;
use crate::{BoardConfig, Game, Outcome, Pos, Stone};

/// Hotseat Gomoku application
pub struct GomokuApp {
    game: Game,
    board_view: BoardView,
    /// Last rejected move, shown until the next successful one
    message: Option<String>,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: BoardConfig) -> Self {
        Self {
            game: Game::new(config),
            board_view: BoardView::default(),
            message: None,
        }
    }

    fn new_game(&mut self) {
        info!("new GUI game");
        self.game = Game::new(self.game.config());
        self.message = None;
    }

    fn handle_click(&mut self, pos: Pos) {
        match self.game.play(pos.row as i64, pos.col as i64) {
            Ok(_) => self.message = None,
            Err(err) => {
                debug!(%err, "move rejected");
                self.message = Some(format!("Invalid move: {err}"));
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.game.config().size();
                    ui.label(format!("Hotseat - {size}x{size}"));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(outcome) = self.game.result() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.game.current_player();
            let (stone_char, accent, stone_color) = stone_style(turn);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = turn.to_string().to_uppercase();
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.game.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", STATUS_PLAYING)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            if ui.button(RichText::new("New Game").size(12.0)).clicked() {
                self.new_game();
            }

            ui.add_space(8.0);
            let total = self.game.config().total_cells();
            ui.label(
                RichText::new(format!("Move #{} of {}", self.game.moves_played(), total))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render game over card
    fn render_game_over_card(&self, ui: &mut egui::Ui, outcome: Outcome) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    match outcome {
                        Outcome::Win(winner) => {
                            let (symbol, accent, _) = stone_style(winner);
                            ui.horizontal(|ui| {
                                ui.add_space(ui.available_width() / 2.0 - 60.0);
                                ui.label(RichText::new(symbol).size(32.0).color(accent));
                                ui.add_space(8.0);
                                ui.vertical(|ui| {
                                    let name = winner.to_string().to_uppercase();
                                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));
                                    ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                                });
                            });
                            ui.add_space(4.0);
                            ui.label(RichText::new("by 5-in-a-row").size(11.0).color(TEXT_SECONDARY));
                        }
                        Outcome::Draw => {
                            ui.label(RichText::new("DRAW").size(18.0).strong().color(TEXT_PRIMARY));
                            ui.label(RichText::new("the board is full").size(11.0).color(TEXT_SECONDARY));
                        }
                        Outcome::Ongoing => {}
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self.game.winning_line();

            let clicked = self.board_view.show(
                ui,
                self.game.board(),
                self.game.current_player(),
                self.game.last_move(),
                winning_line.as_deref(),
                self.game.is_over(),
            );

            if let Some(pos) = clicked {
                self.handle_click(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // N - New game
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.new_game();
        }
    }
}

/// Glyph, disc color, and glyph color for a stone's indicators
fn stone_style(stone: Stone) -> (&'static str, egui::Color32, egui::Color32) {
    match stone {
        Stone::Black => ("●", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
        Stone::White => ("○", egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35)),
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}

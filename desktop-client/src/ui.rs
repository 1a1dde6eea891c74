use eframe::egui;
use tokio::sync::mpsc;

use crate::game_ui::GameUi;
use crate::state::{ClientCommand, SharedState};

pub struct GameApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    game_ui: GameUi,
}

impl GameApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            game_ui: GameUi::new(),
        }
    }

    fn render_event_log(&self, ui: &mut egui::Ui) {
        ui.separator();

        let events = self.shared_state.get_events();
        egui::ScrollArea::vertical()
            .id_salt("event_log_scroll")
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if events.is_empty() {
                    ui.label(
                        egui::RichText::new("No events yet...")
                            .italics()
                            .color(egui::Color32::GRAY),
                    );
                } else {
                    for event in &events {
                        ui.label(event);
                    }
                }
            });
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            match self.shared_state.get_view() {
                Some(view) => {
                    ui.heading(format!("Score: {}", view.score));
                    ui.separator();
                    self.game_ui
                        .render_game(ui, ctx, &view, &self.shared_state, &self.command_tx);
                    self.render_event_log(ui);
                }
                None => {
                    ui.heading("Starting game...");
                    ui.spinner();
                }
            }
        });

        // Snapshots arrive from the game task; repaint even without input.
        ctx.request_repaint();
    }
}

use eframe::egui;
use tokio::sync::mpsc;

use engine::game::{Direction, Point};

use crate::constants::PIXELS_PER_CELL;
use crate::state::{ClientCommand, GameView, SharedState};

const FIELD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x88, 0xFF, 0x88);
const SNAKE_COLOR: egui::Color32 = egui::Color32::BLACK;
const APPLE_COLOR: egui::Color32 = egui::Color32::RED;

pub struct GameUi {
    background_texture: Option<(u64, egui::TextureHandle)>,
}

impl GameUi {
    pub fn new() -> Self {
        Self {
            background_texture: None,
        }
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        view: &GameView,
        shared_state: &SharedState,
        command_tx: &mpsc::UnboundedSender<ClientCommand>,
    ) {
        self.handle_input(ctx, command_tx);
        self.update_background_texture(ctx, shared_state);

        let canvas_side = view.mesh_length as f32 * PIXELS_PER_CELL;
        let (response, painter) = ui.allocate_painter(
            egui::Vec2::new(canvas_side, canvas_side),
            egui::Sense::hover(),
        );
        let rect = response.rect;

        let _ = match &self.background_texture {
            Some((_, texture)) => painter.image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            ),
            None => painter.rect_filled(rect, 0.0, FIELD_COLOR),
        };

        for cell in &view.snake {
            painter.rect_filled(Self::cell_rect(rect.min, *cell), 0.0, SNAKE_COLOR);
        }
        painter.rect_filled(Self::cell_rect(rect.min, view.apple), 0.0, APPLE_COLOR);
    }

    fn handle_input(
        &mut self,
        ctx: &egui::Context,
        command_tx: &mpsc::UnboundedSender<ClientCommand>,
    ) {
        ctx.input(|i| {
            let mut direction = None;

            if i.key_pressed(egui::Key::ArrowUp) {
                direction = Some(Direction::Up);
            } else if i.key_pressed(egui::Key::ArrowDown) {
                direction = Some(Direction::Down);
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                direction = Some(Direction::Left);
            } else if i.key_pressed(egui::Key::ArrowRight) {
                direction = Some(Direction::Right);
            }

            if let Some(direction) = direction {
                let _ = command_tx.send(ClientCommand::Turn { direction });
            }
        });
    }

    // Texture upload happens once per fetched image, keyed by generation;
    // every other frame reuses the handle.
    fn update_background_texture(&mut self, ctx: &egui::Context, shared_state: &SharedState) {
        let latest = shared_state.background_generation();
        let current = self.background_texture.as_ref().map(|(generation, _)| *generation);
        if latest == current {
            return;
        }

        if let Some(image) = shared_state.get_background() {
            let color_image = egui::ColorImage::from_rgba_unmultiplied(
                [image.width, image.height],
                &image.pixels,
            );
            let texture = ctx.load_texture("background", color_image, Default::default());
            self.background_texture = Some((image.generation, texture));
        }
    }

    fn cell_rect(canvas_min: egui::Pos2, cell: Point) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                canvas_min.x + cell.x as f32 * PIXELS_PER_CELL,
                canvas_min.y + cell.y as f32 * PIXELS_PER_CELL,
            ),
            egui::vec2(PIXELS_PER_CELL, PIXELS_PER_CELL),
        )
    }
}

use common::games::snake::{GameView, Point, RenderSink, RunState};
use eframe::egui;

use super::theme::Theme;

/// Paints a [`GameView`] into a square area of the window.
pub struct BoardPainter<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    theme: &'a Theme,
}

impl<'a> BoardPainter<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, theme: &'a Theme) -> Self {
        Self {
            painter,
            rect,
            theme,
        }
    }

    fn cell_rect(&self, pos: Point, tiles: u32) -> egui::Rect {
        let cell = self.rect.width() / tiles as f32;
        egui::Rect::from_min_size(
            egui::pos2(
                self.rect.min.x + pos.x as f32 * cell,
                self.rect.min.y + pos.y as f32 * cell,
            ),
            egui::vec2(cell, cell),
        )
    }

    fn draw_board(&self, tiles: u32) {
        self.painter.rect_filled(self.rect, 4.0, self.theme.background);

        let cell = self.rect.width() / tiles as f32;
        let stroke = egui::Stroke::new(1.0, self.theme.grid_line);
        for i in 0..=tiles {
            let offset = i as f32 * cell;
            self.painter.line_segment(
                [
                    egui::pos2(self.rect.min.x + offset, self.rect.min.y),
                    egui::pos2(self.rect.min.x + offset, self.rect.max.y),
                ],
                stroke,
            );
            self.painter.line_segment(
                [
                    egui::pos2(self.rect.min.x, self.rect.min.y + offset),
                    egui::pos2(self.rect.max.x, self.rect.min.y + offset),
                ],
                stroke,
            );
        }
    }

    fn draw_overlay(&self, title: &str, subtitle: &str) {
        self.painter.rect_filled(self.rect, 4.0, self.theme.overlay);
        let center = self.rect.center();
        self.painter.text(
            center - egui::vec2(0.0, 14.0),
            egui::Align2::CENTER_CENTER,
            title,
            egui::FontId::proportional(26.0),
            self.theme.text,
        );
        self.painter.text(
            center + egui::vec2(0.0, 18.0),
            egui::Align2::CENTER_CENTER,
            subtitle,
            egui::FontId::proportional(15.0),
            self.theme.text,
        );
    }

    /// Empty board shown before the first round.
    pub fn render_idle(&self, tiles: u32) {
        self.draw_board(tiles);
        self.draw_overlay("Neon Snake", "Press Restart to play");
    }
}

impl RenderSink for BoardPainter<'_> {
    fn render(&mut self, view: &GameView<'_>) {
        let tiles = view.board_tiles;
        self.draw_board(tiles);

        let food_rect = self.cell_rect(view.food, tiles);
        self.painter.circle_filled(
            food_rect.center(),
            food_rect.width() * 0.32,
            self.theme.food,
        );

        let len = view.chain.len();
        // Tail first so the head ends up on top.
        for (index, segment) in view.chain.iter().enumerate().rev() {
            let rect = self.cell_rect(*segment, tiles).shrink(1.0);
            self.painter
                .rect_filled(rect, 4.0, self.theme.segment_color(index, len));
        }

        if view.run_state == RunState::Over {
            let reason = view
                .death_reason
                .map(|reason| reason.describe())
                .unwrap_or("Game over");
            self.draw_overlay(
                "Game Over",
                &format!("{}. Space or Restart to play again", reason),
            );
        }
    }
}

//! Canvas rendering functionality for the grid, stitches and preview line.
//!
//! Everything is drawn in screen space through `transform::base_to_screen`,
//! offset by the canvas rectangle's origin.

use super::state::StitchApp;
use crate::transform::{base_to_screen, grid_line_offsets};
use crate::types::Vec2;
use eframe::egui;

impl StitchApp {
    /// Renders the whole canvas: background, grid, path and preview line.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `canvas_rect` - The screen-space rectangle of the canvas area
    pub fn render_canvas(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let palette = &self.controller.settings().palette;
        painter.rect_filled(canvas_rect, 0.0, palette.clear);

        self.draw_grid(painter, canvas_rect);
        self.draw_stitches(painter, canvas_rect);

        let view = self.controller.view();
        if view.placeable {
            if let Some(last) = self.controller.path().last() {
                let stroke = egui::Stroke::new(1.0, palette.new_line);
                painter.line_segment(
                    [
                        self.to_screen(last, canvas_rect),
                        self.to_screen(view.candidate, canvas_rect),
                    ],
                    stroke,
                );
            }
        }
    }

    /// Maps a base-space point to an absolute egui position.
    fn to_screen(&self, p: Vec2, canvas_rect: egui::Rect) -> egui::Pos2 {
        let view = self.controller.view();
        let local = base_to_screen(p, view.scale, view.camera);
        canvas_rect.min + egui::Vec2::from(local)
    }

    /// Canvas-local positions of the vertical and horizontal grid lines.
    ///
    /// Sized by the viewport the controller recorded on the last resize.
    pub fn grid_lines(&self) -> (Vec<f64>, Vec<f64>) {
        let view = self.controller.view();
        (
            grid_line_offsets(view.viewport.x, view.scale, -view.camera.x),
            grid_line_offsets(view.viewport.y, view.scale, view.camera.y),
        )
    }

    /// Draws one line per integer base coordinate across the canvas.
    pub fn draw_grid(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let view = self.controller.view();
        let stroke = egui::Stroke::new(1.0, self.controller.settings().palette.grid);
        let bottom = canvas_rect.min.y + view.viewport.y as f32;
        let right = canvas_rect.min.x + view.viewport.x as f32;
        let (vertical, horizontal) = self.grid_lines();

        for x in vertical {
            let x = canvas_rect.min.x + x as f32;
            painter.line_segment(
                [egui::pos2(x, canvas_rect.min.y), egui::pos2(x, bottom)],
                stroke,
            );
        }

        for y in horizontal {
            let y = canvas_rect.min.y + y as f32;
            painter.line_segment(
                [egui::pos2(canvas_rect.min.x, y), egui::pos2(right, y)],
                stroke,
            );
        }
    }

    /// Draws the lines between stitches, then a square on each stitch.
    pub fn draw_stitches(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let settings = self.controller.settings();
        let points: Vec<egui::Pos2> = self
            .controller
            .path()
            .absolute()
            .iter()
            .map(|&p| self.to_screen(p, canvas_rect))
            .collect();

        let line = egui::Stroke::new(1.0, settings.palette.line);
        for pair in points.windows(2) {
            painter.line_segment([pair[0], pair[1]], line);
        }

        let size = egui::Vec2::splat(settings.stitch_size);
        for &p in &points {
            painter.rect_filled(
                egui::Rect::from_center_size(p, size),
                0.0,
                settings.palette.stitch,
            );
        }
    }
}

//! User interface shell for the stitch planner.
//!
//! eframe provides the window and event loop and egui the widgets and the
//! painter. Everything here translates between them and the controller.
//!
//! # Module Organization
//!
//! - `state` - The main StitchApp, menu state, startup and shutdown
//! - `canvas` - Translation of egui input into controller events
//! - `rendering` - Drawing the grid, stitches and preview line
//! - `file_ops` - The menu window and save/load/browse operations

mod canvas;
mod file_ops;
mod rendering;
mod state;

pub use state::StitchApp;

use crate::controller::Flow;
use eframe::egui;

impl eframe::App for StitchApp {
    /// Main update function called by egui for each frame.
    ///
    /// Input is drained into the controller first, then the canvas is drawn
    /// on the background layer and the menu on top of it. When the session
    /// ends the configuration is saved and the window is closed.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let canvas_rect = ctx.input(|i| i.content_rect());

        let flow = self.handle_canvas_input(ctx, canvas_rect);

        let painter = ctx.layer_painter(egui::LayerId::background());
        self.render_canvas(&painter, canvas_rect);

        self.draw_menu(ctx);

        if flow == Flow::Terminate {
            self.shutdown();
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

// Headless egui-driven tests live inside `ui` so they can reach private helpers.
#[cfg(test)]
mod tests;

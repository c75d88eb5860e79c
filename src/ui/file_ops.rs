//! The menu window and the file operations it triggers.

use super::state::StitchApp;
use crate::constants::FILE_PATH_LENGTH;
use crate::controller::Action;
use eframe::egui;
use std::path::Path;

impl StitchApp {
    /// Shows the "Menu" window: drawing info, undo, and path file save/load.
    pub fn draw_menu(&mut self, ctx: &egui::Context) {
        egui::Window::new("Menu")
            .default_pos(egui::pos2(10.0, 10.0))
            .resizable(false)
            .show(ctx, |ui| {
                let path = self.controller.path();
                let size = match path.bounding_extent() {
                    Some(extent) => format!("x = {:.2} y = {:.2}", extent.x, extent.y),
                    None => "empty".to_string(),
                };
                ui.label(format!(
                    "Current file name: {}\nDrawing size: {}\nStitches amount: {}\nScale: {:.2}",
                    self.controller.current_file_path(),
                    size,
                    path.len(),
                    self.controller.view().scale,
                ));

                if ui.button("Undo").clicked() {
                    self.perform_action(Action::Undo);
                }
                if let Some(rel) = self.controller.relative_cursor() {
                    ui.label(format!("Relative cursor pos: x = {:.2}; y = {:.2}", rel.x, rel.y));
                }

                ui.horizontal(|ui| {
                    ui.label("File path");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.menu.file_path_input)
                            .char_limit(FILE_PATH_LENGTH - 1),
                    );
                    if ui.button("Browse…").clicked() {
                        self.browse_for_file();
                    }
                });

                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() && !self.menu.file_path_input.is_empty() {
                        self.perform_action(Action::Save(self.menu.file_path_input.clone()));
                    }
                    if ui.button("Load").clicked() && !self.menu.file_path_input.is_empty() {
                        self.perform_action(Action::Load(self.menu.file_path_input.clone()));
                    }
                });

                if let Some(status) = &self.menu.status {
                    ui.label(status.as_str());
                }
            });
    }

    /// Runs a menu action and records its outcome on the status line.
    pub fn perform_action(&mut self, action: Action) {
        let description = match &action {
            Action::Save(file) => Some(format!("Saved {file}")),
            Action::Load(file) => Some(format!("Loaded {file}")),
            Action::Place | Action::Undo => None,
        };

        match self.controller.apply(action) {
            Ok(()) => {
                if description.is_some() {
                    self.menu.status = description;
                }
            }
            Err(err) => {
                log::error!("File operation failed: {err}");
                self.menu.status = Some(format!("Error: {err}"));
            }
        }
    }

    /// Opens a native file picker and copies the chosen path into the input.
    fn browse_for_file(&mut self) {
        if let Some(file) = rfd::FileDialog::new()
            .add_filter("Stitch path", &["txt"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            self.accept_browsed_path(&file);
        }
    }

    /// Copies a picked file into the path input if it fits the config record.
    ///
    /// Longer paths would be cut short when the configuration is saved, so
    /// they are refused with a status message instead.
    pub fn accept_browsed_path(&mut self, file: &Path) -> bool {
        let file = file.display().to_string();
        if file.len() > FILE_PATH_LENGTH - 1 {
            log::warn!("Refusing {file}: longer than {} bytes", FILE_PATH_LENGTH - 1);
            self.menu.status = Some(format!(
                "Error: path is longer than {} bytes",
                FILE_PATH_LENGTH - 1
            ));
            return false;
        }
        self.menu.file_path_input = file;
        true
    }
}

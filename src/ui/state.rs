//! Application state structures.
//!
//! This module contains the main `StitchApp` and the state the UI shell keeps
//! next to the controller: menu inputs and pointer tracking for building
//! input events.

use crate::constants::DEFAULT_FILE_PATH;
use crate::controller::Controller;
use crate::persistence::{Config, PersistError};
use crate::settings::Settings;
use eframe::egui;

/// State of the "Menu" window.
#[derive(Default)]
pub struct MenuState {
    /// Contents of the file path input
    pub file_path_input: String,
    /// Result of the last save or load, shown under the buttons
    pub status: Option<String>,
}

/// Pointer and viewport tracking used to translate egui input.
#[derive(Default)]
pub struct CanvasInputState {
    /// Last pointer position seen in a pointer event (screen space)
    pub last_pointer_pos: Option<egui::Pos2>,
    /// Canvas rectangle reported by the previous frame
    pub last_canvas_rect: Option<egui::Rect>,
}

/// Main application state for the stitch planner.
pub struct StitchApp {
    /// Path, view and interaction logic
    pub controller: Controller,
    /// Menu window state
    pub menu: MenuState,
    /// Input translation state
    pub input: CanvasInputState,
    /// Set once the session ended and the configuration was written
    pub shut_down: bool,
}

impl StitchApp {
    /// Loads the configuration and the last used path file.
    ///
    /// Missing or unreadable files fall back to defaults; this never fails.
    pub fn new(settings: Settings) -> Self {
        let config = Config::load_or_default(&settings.config_path);
        let file = config.current_file_path.clone();
        let mut controller = Controller::from_config(settings, config);

        match controller.load_path(&file) {
            Ok(()) => {}
            Err(PersistError::NotFound(_)) => {
                log::info!("Starting with an empty path; {file} does not exist yet");
                controller.reset_current_file(DEFAULT_FILE_PATH);
            }
            Err(err) => {
                log::warn!("Starting with an empty path: {err}");
                controller.reset_current_file(DEFAULT_FILE_PATH);
            }
        }

        let menu = MenuState {
            file_path_input: controller.current_file_path().to_string(),
            status: None,
        };

        Self {
            controller,
            menu,
            input: CanvasInputState::default(),
            shut_down: false,
        }
    }

    /// Saves the view configuration and logs the final path.
    ///
    /// Runs at most once per session.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        let config_path = self.controller.settings().config_path.clone();
        match self.controller.config().save(&config_path) {
            Ok(()) => log::info!("Saved configuration to {}", config_path.display()),
            Err(err) => log::error!("Failed to save configuration: {err}"),
        }
        for stitch in self.controller.path().relative() {
            log::debug!("({}; {})", stitch.x, stitch.y);
        }
    }
}

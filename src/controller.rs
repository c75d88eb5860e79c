//! Interaction and view control.
//!
//! The controller owns the stitch path and the view (camera, scale, candidate
//! point). It consumes framework-neutral [`InputEvent`]s and menu [`Action`]s
//! and is the only place either of them is mutated.

use crate::path::StitchPath;
use crate::persistence::{self, Config, PersistError};
use crate::settings::{PointerButton, Settings};
use crate::transform::screen_to_base;
use crate::types::Vec2;
use std::path::Path;

/// Pointer buttons held during a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons {
    /// Left button
    pub primary: bool,
    /// Right button
    pub secondary: bool,
    /// Wheel button
    pub middle: bool,
}

impl Buttons {
    /// Whether `button` is held.
    pub fn is_down(self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.primary,
            PointerButton::Secondary => self.secondary,
            PointerButton::Middle => self.middle,
        }
    }
}

/// Keys with a meaning on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Places a stitch, like a primary click
    Confirm,
    /// Ends the session
    Cancel,
}

/// Input delivered by the windowing layer, in canvas-local screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close.
    Quit,
    /// The canvas changed size.
    Resize {
        /// New width in pixels
        width: f64,
        /// New height in pixels
        height: f64,
    },
    /// Vertical wheel motion; positive means forward (zoom in).
    Wheel {
        /// Signed wheel delta
        delta_y: f64,
    },
    /// The pointer moved.
    PointerMoved {
        /// Absolute position
        pos: Vec2,
        /// Motion since the previous pointer event
        delta: Vec2,
        /// Buttons held during the move
        buttons: Buttons,
    },
    /// A pointer button was pressed.
    PointerDown(PointerButton),
    /// A key was pressed.
    KeyDown(Key),
}

/// Whether the session should keep running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep processing frames
    Continue,
    /// Stop and persist
    Terminate,
}

/// Operations triggered from the menu.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Place a stitch at the candidate point if allowed
    Place,
    /// Remove the last stitch
    Undo,
    /// Write the path to the given file
    Save(String),
    /// Replace the path with the contents of the given file
    Load(String),
}

/// Camera, zoom and pointer-derived state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Base-space point at the canvas top-left
    pub camera: Vec2,
    /// Pixels per base unit
    pub scale: f64,
    /// Base-space point a stitch would be placed at
    pub candidate: Vec2,
    /// Whether `candidate` passes the admission check
    pub placeable: bool,
    /// Last known pointer position in screen space
    pub pointer: Vec2,
    /// Canvas size in pixels
    pub viewport: Vec2,
}

/// Owns the path and view state and applies input to them.
pub struct Controller {
    settings: Settings,
    view: ViewState,
    path: StitchPath,
    current_file_path: String,
    /// False until the first pointer move; the candidate means nothing before that
    pointer_seen: bool,
}

impl Controller {
    /// Creates a controller with an empty path and a view taken from `config`.
    pub fn from_config(settings: Settings, config: Config) -> Self {
        let scale = config.scale.max(settings.min_scale);
        Self {
            settings,
            view: ViewState {
                camera: config.camera,
                scale,
                candidate: Vec2::ZERO,
                placeable: false,
                pointer: Vec2::ZERO,
                viewport: Vec2::ZERO,
            },
            path: StitchPath::new(),
            current_file_path: config.current_file_path,
            pointer_seen: false,
        }
    }

    /// Snapshot of the persisted part of the view.
    pub fn config(&self) -> Config {
        Config {
            current_file_path: self.current_file_path.clone(),
            scale: self.view.scale,
            camera: self.view.camera,
        }
    }

    /// Settings the controller was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The stitch path.
    pub fn path(&self) -> &StitchPath {
        &self.path
    }

    /// File the path was last loaded from or saved to.
    pub fn current_file_path(&self) -> &str {
        &self.current_file_path
    }

    /// Candidate position relative to the last stitch, if there is one.
    pub fn relative_cursor(&self) -> Option<Vec2> {
        self.path.last().map(|last| self.view.candidate - last)
    }

    /// Applies one input event.
    ///
    /// While the UI owns the pointer, everything except quit and resize is
    /// ignored.
    pub fn handle_event(&mut self, event: InputEvent, ui_owns_pointer: bool) -> Flow {
        match event {
            InputEvent::Quit => return Flow::Terminate,
            InputEvent::Resize { width, height } => {
                self.view.viewport = Vec2 { x: width, y: height };
                return Flow::Continue;
            }
            _ if ui_owns_pointer => return Flow::Continue,
            InputEvent::Wheel { delta_y } => {
                if delta_y > 0.0 {
                    self.zoom(true);
                } else if delta_y < 0.0 {
                    self.zoom(false);
                }
            }
            InputEvent::PointerMoved {
                pos,
                delta,
                buttons,
            } => {
                self.view.pointer = pos;
                self.pointer_seen = true;
                self.refresh_candidate();
                if buttons.is_down(self.settings.pan_button) {
                    self.view.camera -= screen_to_base(delta, self.view.scale, Vec2::ZERO);
                }
            }
            InputEvent::PointerDown(PointerButton::Primary) | InputEvent::KeyDown(Key::Confirm) => {
                self.place_stitch();
            }
            InputEvent::PointerDown(_) => {}
            InputEvent::KeyDown(Key::Cancel) => return Flow::Terminate,
        }
        Flow::Continue
    }

    /// Applies a menu action.
    pub fn apply(&mut self, action: Action) -> Result<(), PersistError> {
        match action {
            Action::Place => {
                self.place_stitch();
            }
            Action::Undo => {
                self.undo();
            }
            Action::Save(file) => self.save_path(&file)?,
            Action::Load(file) => self.load_path(&file)?,
        }
        Ok(())
    }

    /// Multiplies (zoom in) or divides (zoom out) the scale by the zoom speed.
    pub fn zoom(&mut self, zoom_in: bool) {
        let new_scale = if zoom_in {
            self.view.scale * self.settings.zoom_speed
        } else {
            self.view.scale / self.settings.zoom_speed
        };
        self.view.scale = new_scale.max(self.settings.min_scale);
        self.refresh_candidate();
    }

    /// Appends the candidate to the path if it passes the admission check.
    pub fn place_stitch(&mut self) -> bool {
        if !self.view.placeable {
            return false;
        }
        self.path.append(self.view.candidate);
        self.refresh_placeable();
        true
    }

    /// Removes the last stitch. Returns false if the path is empty.
    pub fn undo(&mut self) -> bool {
        let removed = self.path.remove_last().is_some();
        if removed {
            self.refresh_placeable();
        }
        removed
    }

    /// Saves the relative points to `file` and makes it the current file.
    pub fn save_path(&mut self, file: &str) -> Result<(), PersistError> {
        if file.is_empty() {
            return Err(PersistError::EmptyFilePath);
        }
        persistence::save_points(Path::new(file), self.path.relative())?;
        self.current_file_path = file.to_string();
        log::info!("Saved {} stitches to {file}", self.path.len());
        Ok(())
    }

    /// Replaces the path with the contents of `file` and makes it current.
    ///
    /// On failure the path in memory is left untouched.
    pub fn load_path(&mut self, file: &str) -> Result<(), PersistError> {
        if file.is_empty() {
            return Err(PersistError::EmptyFilePath);
        }
        let points = persistence::load_points(Path::new(file))?;
        self.path = StitchPath::from_relative(points);
        self.current_file_path = file.to_string();
        self.refresh_placeable();
        log::info!("Loaded {} stitches from {file}", self.path.len());
        Ok(())
    }

    /// Forgets the current file, e.g. after the startup load failed.
    pub fn reset_current_file(&mut self, file: &str) {
        self.current_file_path = file.to_string();
    }

    fn refresh_candidate(&mut self) {
        self.view.candidate =
            screen_to_base(self.view.pointer, self.view.scale, self.view.camera).round();
        self.refresh_placeable();
    }

    fn refresh_placeable(&mut self) {
        self.view.placeable = self.pointer_seen
            && self
                .path
                .can_place(self.view.candidate, self.settings.max_stitch_length);
    }
}

//! Immutable configuration handed to the controller and the renderer.

use crate::constants::*;
use std::path::PathBuf;

/// Pointer buttons the canvas reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button; places stitches
    Primary,
    /// Right button; pans by default
    Secondary,
    /// Wheel button
    Middle,
}

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub [u8; 4]);

impl From<Rgba> for egui::Color32 {
    fn from(Rgba([r, g, b, a]): Rgba) -> Self {
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

/// Colors used when drawing the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Canvas background
    pub clear: Rgba,
    /// Grid lines
    pub grid: Rgba,
    /// Stitch squares
    pub stitch: Rgba,
    /// Lines between placed stitches
    pub line: Rgba,
    /// Preview line from the last stitch to the candidate
    pub new_line: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            clear: Rgba(CLEAR_COLOR),
            grid: Rgba(GRID_COLOR),
            stitch: Rgba(STITCH_COLOR),
            line: Rgba(LINE_COLOR),
            new_line: Rgba(NEW_LINE_COLOR),
        }
    }
}

/// Tunable behavior of the editor, fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Longest allowed distance between consecutive stitches, in base units.
    pub max_stitch_length: f64,
    /// Factor the scale is multiplied or divided by per wheel event.
    pub zoom_speed: f64,
    /// Scale floor; zooming out never goes below this.
    pub min_scale: f64,
    /// Side of a drawn stitch square, in screen pixels.
    pub stitch_size: f32,
    /// Button that pans the camera while held.
    pub pan_button: PointerButton,
    /// Where the view configuration is persisted.
    pub config_path: PathBuf,
    /// Drawing colors
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_stitch_length: MAX_STITCH_LENGTH,
            zoom_speed: ZOOM_SPEED,
            min_scale: MIN_SCALE,
            stitch_size: STITCH_SIZE,
            pan_button: PointerButton::Secondary,
            config_path: PathBuf::from(CONFIG_PATH),
            palette: Palette::default(),
        }
    }
}

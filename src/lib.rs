//! # Stitch Planner
//!
//! An interactive editor for planning stitch paths: sequential points placed
//! on an infinite, pannable and zoomable grid and joined by lines.
//!
//! ## Features
//! - Stitches snap to integer base coordinates and must stay within a
//!   maximum stitch length of the previous one
//! - Right-drag panning and wheel zooming
//! - Single-step undo of the last stitch, repeatable down to an empty path
//! - Plain-text path files (one relative point per line)
//! - View configuration persisted across sessions in `config.bin`

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod controller;
pub mod path;
pub mod persistence;
pub mod settings;
pub mod transform;
mod types;
mod ui;

// Re-export public types and functions
pub use types::*;
pub use ui::StitchApp;

use settings::Settings;

/// Runs the stitch planner with default settings.
///
/// This function creates the native window and starts the main event loop.
///
/// # Returns
///
/// Returns `Ok(())` once the window is closed, or an `eframe::Error` if the
/// window or renderer could not be created.
///
/// # Example
///
/// ```no_run
/// use stitch_planner::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Stitch Planner")
            .with_inner_size(constants::WINDOW_SIZE),
        ..Default::default()
    };
    eframe::run_native(
        "Stitch Planner",
        options,
        Box::new(|_cc| Ok(Box::new(StitchApp::new(Settings::default())))),
    )
}

//! Shared application-wide constants.
//! Centralizes the defaults that `Settings` and `Config` start from.

// Persistence
/// File the view configuration is read from at startup and written to at shutdown.
pub const CONFIG_PATH: &str = "config.bin";
/// Path file used when no configuration has been saved yet.
pub const DEFAULT_FILE_PATH: &str = "Untitled.txt";
/// Size of the file path field in the config record, including the NUL terminator.
pub const FILE_PATH_LENGTH: usize = 100;

// View
/// Scale (pixels per base unit) used when no configuration has been saved yet.
pub const DEFAULT_SCALE: f64 = 20.0;
/// Lowest scale reachable by zooming out.
pub const MIN_SCALE: f64 = 1.0;
/// Factor applied to the scale per wheel notch.
pub const ZOOM_SPEED: f64 = 1.1;

// Stitches
/// Longest allowed distance (in base units) between consecutive stitches.
pub const MAX_STITCH_LENGTH: f64 = 10.0;
/// Side of the square drawn for each stitch, in screen pixels.
pub const STITCH_SIZE: f32 = 10.0;

// Colors (RGBA)
/// Canvas background.
pub const CLEAR_COLOR: [u8; 4] = [200, 200, 200, 255];
/// Grid lines.
pub const GRID_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Stitch squares.
pub const STITCH_COLOR: [u8; 4] = [255, 0, 0, 255];
/// Lines between placed stitches.
pub const LINE_COLOR: [u8; 4] = [0, 0, 255, 255];
/// Preview line towards the candidate point.
pub const NEW_LINE_COLOR: [u8; 4] = [0, 255, 0, 255];

// Window
/// Initial inner size of the native window.
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 720.0];

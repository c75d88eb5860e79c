//! Mapping between screen space and base space.
//!
//! Screen space is pixels with the origin at the canvas top-left and y growing
//! downward. Base space is the logical plane stitches are authored in, with y
//! growing upward. `camera` is the base-space point shown at the screen's
//! top-left corner and `scale` is pixels per base unit.
//!
//! When converting a displacement rather than a position, pass
//! [`Vec2::ZERO`] as the camera.

use crate::types::{vec2, Vec2};

/// Converts a screen-space point to base space.
pub fn screen_to_base(p: Vec2, scale: f64, camera: Vec2) -> Vec2 {
    vec2(p.x / scale + camera.x, -p.y / scale + camera.y)
}

/// Converts a base-space point to screen space.
pub fn base_to_screen(p: Vec2, scale: f64, camera: Vec2) -> Vec2 {
    vec2((p.x - camera.x) * scale, -(p.y - camera.y) * scale)
}

/// Screen positions of the grid lines along one axis.
///
/// Lines sit on integer base coordinates, so they repeat every `scale` pixels
/// starting at the fractional part of `phase`. Use `-camera.x` as the phase for
/// vertical lines and `camera.y` for horizontal ones.
///
/// # Arguments
///
/// * `length` - Extent of the canvas along this axis, in pixels
/// * `scale` - Pixels per base unit
/// * `phase` - Camera coordinate along this axis, sign-adjusted as above
pub fn grid_line_offsets(length: f64, scale: f64, phase: f64) -> Vec<f64> {
    if scale.is_nan() || scale <= 0.0 || !length.is_finite() {
        return Vec::new();
    }
    let mut offsets = Vec::new();
    let mut pos = phase.rem_euclid(1.0) * scale;
    while pos <= length {
        offsets.push(pos);
        pos += scale;
    }
    offsets
}

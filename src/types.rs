//! Core geometry types shared by the path model, the transform and the UI.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A pair of coordinates in either screen space or base space.
///
/// Which space a value lives in is implied by the function that produced it;
/// the type itself carries no tag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    /// Horizontal component
    pub x: f64,
    /// Vertical component
    pub y: f64,
}

/// Shorthand constructor for [`Vec2`].
pub const fn vec2(x: f64, y: f64) -> Vec2 {
    Vec2 { x, y }
}

impl Vec2 {
    /// The origin, also used as the camera when transforming displacements.
    pub const ZERO: Vec2 = vec2(0.0, 0.0);

    /// Squared Euclidean length.
    pub fn length_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Rounds both components to the nearest integer.
    pub fn round(self) -> Vec2 {
        vec2(self.x.round(), self.y.round())
    }

    /// True if both components are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        vec2(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        vec2(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        vec2(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        vec2(self.x * rhs, self.y * rhs)
    }
}

impl From<Vec2> for egui::Vec2 {
    fn from(v: Vec2) -> Self {
        egui::vec2(v.x as f32, v.y as f32)
    }
}

impl From<egui::Vec2> for Vec2 {
    fn from(v: egui::Vec2) -> Self {
        vec2(f64::from(v.x), f64::from(v.y))
    }
}

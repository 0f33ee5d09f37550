#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

/// A point (or displacement) on the y-down drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point reached by walking `length` along `degrees`, measured
    /// counter-clockwise on screen (so positive angles go up).
    #[must_use]
    pub fn offset_polar(self, length: f64, degrees: f64) -> Self {
        let rad = degrees.to_radians();
        Self { x: self.x + length * rad.cos(), y: self.y - length * rad.sin() }
    }

    /// Screen angle of this vector in degrees, in `(-180, 180]`, or `None`
    /// for the zero vector.
    #[must_use]
    pub fn screen_angle(self) -> Option<f64> {
        if self.x == 0.0 && self.y == 0.0 {
            return None;
        }
        // `0.0 - y` keeps a leftward vector at +180 instead of -180.
        Some((0.0 - self.y).atan2(self.x).to_degrees())
    }

    /// Midpoint between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self { x: (self.x + other.x) * 0.5, y: (self.y + other.y) * 0.5 }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

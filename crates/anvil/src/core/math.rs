use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in 2D.
/// Invariant: `max.x >= min.x && max.y >= min.y`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Range2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Range2 {
    pub const ZERO: Self = Self { min: Vec2::ZERO, max: Vec2::ZERO };

    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rect spanning `[0, size]`.
    pub fn from_size(size: Vec2) -> Self {
        Self { min: Vec2::ZERO, max: size }
    }

    /// Rect from `[x0, y0, x1, y1]`.
    pub fn from_array([x0, y0, x1, y1]: [f32; 4]) -> Self {
        Self::new(Vec2::new(x0, y0), Vec2::new(x1, y1))
    }

    /// Width and height. Panics if the invariant is broken.
    pub fn size(&self) -> Vec2 {
        assert!(
            self.max.x >= self.min.x && self.max.y >= self.min.y,
            "malformed Range2: min {:?} max {:?}",
            self.min,
            self.max
        );
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn shift(&self, offset: Vec2) -> Self {
        Self { min: self.min + offset, max: self.max + offset }
    }

    /// Same size, recentered so it straddles the origin.
    pub fn centered(&self) -> Self {
        self.shift(-self.min - self.size() * 0.5)
    }

    /// Scale both corners about the origin.
    pub fn scale(&self, factor: f32) -> Self {
        Self { min: self.min * factor, max: self.max * factor }
    }

    /// Mirror about the local Y axis, keeping `min.x <= max.x`.
    pub fn flip_x(&self) -> Self {
        Self {
            min: Vec2::new(-self.max.x, self.min.y),
            max: Vec2::new(-self.min.x, self.max.y),
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Rebuild from two arbitrary corners.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }
}

/// Where `value` sits between `start` and `end`, as a fraction.
/// `start == end` yields 0.
pub fn alpha_between(value: f32, start: f32, end: f32) -> f32 {
    let span = end - start;
    if span.abs() <= f32::EPSILON {
        return 0.0;
    }
    (value - start) / span
}

/// Sine hump: 0 at t=0 and t=1, 1 at t=0.5.
pub fn sin_mid(t: f32) -> f32 {
    (t.clamp(0.0, 1.0) * std::f32::consts::PI).sin()
}

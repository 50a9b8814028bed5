//! Region-space 2D primitives. The origin is the bottom-left corner of the
//! region and y grows upwards.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const ZERO: Self = pos2(0.0, 0.0);

    pub fn distance(self, other: Point2) -> f32 {
        let d = self - other;
        d.x.hypot(d.y)
    }
}

impl std::ops::Sub for Point2 {
    type Output = Vec2;

    fn sub(self, rhs: Point2) -> Vec2 {
        vec2(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Axis-aligned box; both edges count as inside.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Point2,
    pub max: Point2,
}

impl Rect {
    pub fn from_min_size(min: Point2, size: Vec2) -> Self {
        Self {
            min,
            max: pos2(min.x + size.x, min.y + size.y),
        }
    }

    pub fn center(&self) -> Point2 {
        pos2(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    pub fn contains(&self, p: Point2) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }

    /// Smallest box covering both.
    pub fn union(self, other: Rect) -> Rect {
        Rect {
            min: pos2(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: pos2(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn grow(self, margin: f32) -> Rect {
        Rect {
            min: pos2(self.min.x - margin, self.min.y - margin),
            max: pos2(self.max.x + margin, self.max.y + margin),
        }
    }
}

/// Straight (non-premultiplied) RGBA.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn gray(level: u8) -> Self {
        Self::opaque(level, level, level)
    }
}

pub const fn pos2(x: f32, y: f32) -> Point2 {
    Point2 { x, y }
}

pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2 { x, y }
}

use serde::{Deserialize, Serialize};

/// A position in PDF user space (origin bottom-left, y grows upward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Scales both dimensions by the given fractions.
    pub fn scale(self, fx: f32, fy: f32) -> Self {
        Self {
            width: self.width * fx,
            height: self.height * fy,
        }
    }
}

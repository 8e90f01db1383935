//! Axis-aligned rectangle collision
//!
//! Vehicles are boxes in screen space (top-left origin, y grows downward).

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Same size, moved by (dx, dy)
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

/// Separating-axis overlap test.
///
/// The rectangles are apart only when one lies strictly beyond the other on
/// some axis, so shared edges register as a hit.
#[inline]
pub fn is_colliding(a: &Rect, b: &Rect) -> bool {
    !(a.x > b.right() || a.right() < b.x || a.y > b.bottom() || a.bottom() < b.y)
}

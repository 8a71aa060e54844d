//! Axis-aligned rectangles in screen space
//!
//! Screen space has its origin at the top-left, x grows right and y grows
//! down, so "up" is negative y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Grow (positive) or shrink (negative) about the center.
    ///
    /// `dx`/`dy` are the total change in width/height, so half is applied
    /// to each side.
    pub fn inflate(&self, dx: f32, dy: f32) -> Self {
        let delta = Vec2::new(dx, dy);
        Self {
            pos: self.pos - delta / 2.0,
            size: (self.size + delta).max(Vec2::ZERO),
        }
    }

    /// Strict overlap: rects that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Whether a point lies inside (left/top edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflate_shrinks_symmetrically() {
        let r = Rect::new(80.0, 256.0, 44.0, 44.0).inflate(-12.0, -8.0);
        assert_eq!(r, Rect::new(86.0, 260.0, 32.0, 36.0));
    }

    #[test]
    fn test_inflate_never_negative() {
        let r = Rect::new(0.0, 0.0, 4.0, 4.0).inflate(-10.0, -10.0);
        assert_eq!(r.size, Vec2::ZERO);
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains_point(Vec2::new(10.0, 20.0)));
        assert!(r.contains_point(Vec2::new(39.9, 59.9)));
        assert!(!r.contains_point(Vec2::new(40.0, 30.0)));
    }
}

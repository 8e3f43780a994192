//! Axis-aligned boxes in screen space
//!
//! Screen space has y growing downward, so `min.y` is the top edge and
//! `max.y` the bottom edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square of side `size` with its top-left corner at `origin`
    pub fn from_square(origin: Vec2, size: f32) -> Self {
        Self::new(origin, origin + Vec2::splat(size))
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Move each edge inward by its own amount
    pub fn inset(&self, left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self::new(
            Vec2::new(self.min.x + left, self.min.y + top),
            Vec2::new(self.max.x - right, self.max.y - bottom),
        )
    }

    /// Move all four edges inward by `pad`
    pub fn shrink(&self, pad: f32) -> Self {
        self.inset(pad, pad, pad, pad)
    }

    /// Overlap test; touching edges count as overlapping
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom())
    }

    /// Horizontal penetration depth against `other` (smaller of the two sides)
    #[inline]
    pub fn penetration_x(&self, other: &Aabb) -> f32 {
        (self.right() - other.left()).min(other.right() - self.left())
    }

    /// Vertical penetration depth against `other` (smaller of the two sides)
    #[inline]
    pub fn penetration_y(&self, other: &Aabb) -> f32 {
        (self.bottom() - other.top()).min(other.bottom() - self.top())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_touching_edges() {
        let a = Aabb::from_square(Vec2::ZERO, 10.0);
        let b = Aabb::from_square(Vec2::new(10.0, 0.0), 10.0);
        assert!(a.overlaps(&b));

        let c = Aabb::from_square(Vec2::new(10.5, 0.0), 10.0);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_inset_and_shrink() {
        let a = Aabb::from_square(Vec2::new(100.0, 310.0), 40.0);
        let hit = a.inset(4.0, 4.0, 4.0, 2.0);
        assert_eq!(hit.left(), 104.0);
        assert_eq!(hit.right(), 136.0);
        assert_eq!(hit.top(), 314.0);
        assert_eq!(hit.bottom(), 348.0);

        let tight = hit.shrink(10.0);
        assert_eq!(tight.left(), 114.0);
        assert_eq!(tight.bottom(), 338.0);
    }

    #[test]
    fn test_penetration_picks_shallow_side() {
        let a = Aabb::from_square(Vec2::ZERO, 10.0);
        // b overlaps a's bottom-right corner: 2 deep horizontally, 7 deep vertically
        let b = Aabb::from_square(Vec2::new(8.0, 3.0), 10.0);
        assert_eq!(a.penetration_x(&b), 2.0);
        assert_eq!(a.penetration_y(&b), 7.0);
    }
}

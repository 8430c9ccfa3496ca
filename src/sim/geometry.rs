//! Axis-aligned boxes and overlap tests
//!
//! Vectors come from glam; everything shape-related the simulation needs is
//! here so the core does not lean on any windowing or sprite library.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (min corner inclusive, max corner inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Box covering the given field size with its corner at the origin
    pub fn field(size: Vec2) -> Self {
        Self::new(Vec2::ZERO, size)
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap: boxes that only share an edge do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Whether `other` lies entirely inside this box (edges included)
    pub fn contains(&self, other: &Aabb) -> bool {
        other.min.cmpge(self.min).all() && other.max.cmple(self.max).all()
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }

    /// Clamp a box center so a box of `half_extents` stays fully inside `self`
    pub fn clamp_center(&self, center: Vec2, half_extents: Vec2) -> Vec2 {
        let lo = self.min + half_extents;
        let hi = (self.max - half_extents).max(lo);
        center.clamp(lo, hi)
    }
}

/// Circle vs box overlap (strict)
pub fn circle_overlaps_aabb(center: Vec2, radius: f32, aabb: &Aabb) -> bool {
    center.distance_squared(aabb.closest_point(center)) < radius * radius
}

/// Something with a position and a bounding extent
pub trait Collidable {
    fn center(&self) -> Vec2;

    /// Half-size of the bounding box
    fn half_extents(&self) -> Vec2;

    fn bounds(&self) -> Aabb {
        Aabb::from_center(self.center(), self.half_extents())
    }

    fn overlaps<C: Collidable>(&self, other: &C) -> bool
    where
        Self: Sized,
    {
        self.bounds().overlaps(&other.bounds())
    }
}

/// Normalized direction from `from` to `to`, or `fallback` when coincident
#[inline]
pub fn direction_or(from: Vec2, to: Vec2, fallback: Vec2) -> Vec2 {
    let delta = to - from;
    if delta.length_squared() == 0.0 {
        fallback
    } else {
        delta.normalize()
    }
}

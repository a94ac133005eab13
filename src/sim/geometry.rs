//! Arena bounds and obstacle footprints
//!
//! Everything lives on the ground plane. Positions are `Vec2` with world x
//! in `.x` and world z in `.y`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MOUSE_FOOTPRINT_DIVISOR;

/// A static box on the arena floor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Center on the ground plane
    pub pos: Vec2,
    /// Full width (x) and depth (z)
    pub size: Vec2,
}

impl Obstacle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Point test against the footprint grown by `clearance` on each axis.
    /// Edges count as inside.
    pub fn contains(&self, point: Vec2, clearance: f32) -> bool {
        let half = self.half_extents() + Vec2::splat(clearance);
        let d = (point - self.pos).abs();
        d.x <= half.x && d.y <= half.y
    }

    /// Point test against the tighter box mice react to (size / 1.8,
    /// edges excluded).
    pub fn touches_mouse(&self, point: Vec2) -> bool {
        let half = self.size / MOUSE_FOOTPRINT_DIVISOR;
        let d = (point - self.pos).abs();
        d.x < half.x && d.y < half.y
    }
}

/// True if `point` lies in any obstacle footprint inflated by `clearance`
pub fn is_blocked(point: Vec2, obstacles: &[Obstacle], clearance: f32) -> bool {
    obstacles.iter().any(|ob| ob.contains(point, clearance))
}

/// Square arena centered on the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub half_extent: f32,
}

impl Arena {
    pub fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }

    /// Usable half-width once `margin` is kept from the walls
    #[inline]
    pub fn bound(&self, margin: f32) -> f32 {
        self.half_extent - margin
    }

    /// Clamp both axes into `[-size + margin, size - margin]`
    pub fn clamp(&self, point: Vec2, margin: f32) -> Vec2 {
        let b = self.bound(margin);
        point.clamp(Vec2::splat(-b), Vec2::splat(b))
    }

    pub fn contains(&self, point: Vec2, margin: f32) -> bool {
        let b = self.bound(margin);
        point.x.abs() <= b && point.y.abs() <= b
    }
}

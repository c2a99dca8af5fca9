//! Planet records

use crate::foundation::math::Vec3;
use crate::physics::Aabb;

/// A spawned planet
///
/// Planets never move once spawned, so the bounding box is computed once at
/// construction and stays in sync with the position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    position: Vec3,
    scale: f32,
    bounds: Aabb,
}

impl Planet {
    /// Create a planet whose box half extent is `scale * bounding_box_scale_factor`
    pub fn new(position: Vec3, scale: f32, bounding_box_scale_factor: f32) -> Self {
        Self {
            position,
            scale,
            bounds: Aabb::from_center_half_extent(position, scale * bounding_box_scale_factor),
        }
    }

    /// World-space center
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Uniform render scale
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Collision volume
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Whether the planet lies strictly behind a viewer at `eye` looking along `view_direction`
    pub fn is_behind(&self, eye: Vec3, view_direction: Vec3) -> bool {
        view_direction.dot(&(self.position - eye)) < 0.0
    }
}

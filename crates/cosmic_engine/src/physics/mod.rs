//! Physics module for collision detection
//!
//! Axis-aligned boxes and the per-frame ship/planet check.

pub mod aabb;
pub mod collision;

pub use aabb::Aabb;
pub use collision::{CollisionChecker, CollisionReport};

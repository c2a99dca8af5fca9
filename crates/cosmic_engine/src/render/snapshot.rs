//! Render-facing view of one simulated frame
//!
//! The renderer lives outside this crate. After each tick it receives a
//! [`FrameSnapshot`] holding everything it needs to draw: planet instances,
//! the camera frame, the ship and its thrusters, and the HUD values.

use crate::foundation::math::{Mat4, Vec3};

/// One planet to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetInstance {
    /// World-space center
    pub position: Vec3,
    /// Uniform scale
    pub scale: f32,
}

/// Thruster flames behind the ship
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrusterView {
    /// Left and right flame anchor points
    pub mounts: [Vec3; 2],
    /// Current flame length
    pub length: f32,
    /// Flicker multiplier applied to the length
    pub pulse: f32,
}

/// Everything the renderer consumes for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// Planets in spawn order
    pub planets: Vec<PlanetInstance>,
    /// Shared spin angle of all planets, radians
    pub planet_spin_angle: f32,
    /// Camera view matrix
    pub view_matrix: Mat4,
    /// Camera position
    pub camera_position: Vec3,
    /// Camera view direction
    pub view_direction: Vec3,
    /// Camera up vector
    pub camera_up: Vec3,
    /// Camera right vector
    pub camera_right: Vec3,
    /// Ship position
    pub ship_position: Vec3,
    /// Ship thrusters
    pub thrusters: ThrusterView,
    /// Current score, already floored at zero
    pub score: f32,
    /// Whether the run has ended
    pub game_over: bool,
}

impl FrameSnapshot {
    /// Score as shown on screen
    pub fn display_score(&self) -> i64 {
        self.score as i64
    }
}

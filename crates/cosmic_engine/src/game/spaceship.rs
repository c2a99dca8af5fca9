//! Spaceship thrusters
//!
//! The ship itself is placed by the [`CollisionChecker`](crate::physics::CollisionChecker);
//! this module only animates the two engine flames behind it.

use crate::foundation::math::Vec3;
use crate::render::{Camera, ThrusterView};

/// Flame growth in length units per second
const THRUSTER_GROWTH_RATE: f32 = 5.0;
/// Longest flame
const THRUSTER_MAX_LENGTH: f32 = 0.01;
/// Sideways offset of each nozzle from the ship center
const NOZZLE_SPREAD: f32 = 0.39;
/// How far behind the ship center the nozzles sit
const NOZZLE_BACK: f32 = 1.5;
/// How far below the ship center the nozzles sit
const NOZZLE_DROP: f32 = 0.125;

/// Engine flame state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Thrusters {
    length: f32,
    flicker_time: f32,
}

impl Thrusters {
    /// Thrusters with no flame
    pub fn new() -> Self {
        Self::default()
    }

    /// Current flame length
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Seconds of flicker animation, advanced every frame in either phase
    pub fn flicker_time(&self) -> f32 {
        self.flicker_time
    }

    /// Grow the flame while `active`, shrink it otherwise
    pub fn update(&mut self, active: bool, delta_time: f32) {
        self.flicker_time += delta_time;
        let change = THRUSTER_GROWTH_RATE * delta_time;
        self.length = if active {
            (self.length + change).min(THRUSTER_MAX_LENGTH)
        } else {
            (self.length - change).max(0.0)
        };
    }

    /// Put the flame out and restart the flicker
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Left and right nozzle positions for a ship at `ship_position`
    pub fn mounts(camera: &Camera, ship_position: Vec3) -> [Vec3; 2] {
        let behind = ship_position
            - camera.view_direction() * NOZZLE_BACK
            - camera.up() * NOZZLE_DROP;
        let spread = camera.right() * NOZZLE_SPREAD;
        [behind - spread, behind + spread]
    }

    /// Flicker multiplier at simulated time `time`
    pub fn pulse(time: f32) -> f32 {
        0.05 + 0.5 * (time * 5.0).sin()
    }

    /// Render view of the flames
    pub fn view(&self, camera: &Camera, ship_position: Vec3) -> ThrusterView {
        ThrusterView {
            mounts: Self::mounts(camera, ship_position),
            length: self.length,
            pulse: Self::pulse(self.flicker_time),
        }
    }
}

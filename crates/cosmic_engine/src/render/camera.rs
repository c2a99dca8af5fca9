//! # Free-fly camera
//!
//! Euler-angle camera driving both the view and the player's ship. The basis
//! (view, right, up) is recomputed from pitch and yaw whenever the rotation
//! changes and always forms a right-handed orthonormal frame.
//!
//! ## Angle conventions
//! - Angles are stored in degrees
//! - Yaw -90 with pitch 0 looks down -Z
//! - Positive pitch looks up
//!
//! Pitch is clamped to +/- `pitch_limit` so the view direction never becomes
//! parallel to the world up axis, where the right vector would degenerate.

use crate::foundation::math::{utils, world_up, Mat4, Mat4Ext, Vec3};

/// Default pitch clamp in degrees
pub const DEFAULT_PITCH_LIMIT: f32 = 89.0;

/// Basis vector of the camera frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAxis {
    /// View direction
    View,
    /// Camera up vector
    Up,
    /// Camera right vector
    Right,
}

/// Free-fly camera with position and Euler orientation
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    view_direction: Vec3,
    up: Vec3,
    right: Vec3,
    pitch: f32,
    yaw: f32,
    pitch_limit: f32,
}

impl Camera {
    /// Create a camera at `position` with the given pitch and yaw in degrees
    pub fn new(position: Vec3, pitch: f32, yaw: f32) -> Self {
        let mut camera = Self {
            position,
            view_direction: Vec3::new(0.0, 0.0, -1.0),
            up: world_up(),
            right: Vec3::x(),
            pitch: 0.0,
            yaw: -90.0,
            pitch_limit: DEFAULT_PITCH_LIMIT,
        };
        camera.set_rotation(pitch, yaw);
        camera
    }

    /// Replace the pitch clamp (degrees, expected in (0, 90))
    pub fn with_pitch_limit(mut self, pitch_limit: f32) -> Self {
        self.pitch_limit = pitch_limit;
        self.set_rotation(self.pitch, self.yaw);
        self
    }

    /// Camera position in world space
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction
    pub fn view_direction(&self) -> Vec3 {
        self.view_direction
    }

    /// Unit up vector
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Unit right vector, always horizontal
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Basis vector for `axis`
    pub fn axis(&self, axis: CameraAxis) -> Vec3 {
        match axis {
            CameraAxis::View => self.view_direction,
            CameraAxis::Up => self.up,
            CameraAxis::Right => self.right,
        }
    }

    /// View direction projected onto the horizontal plane
    ///
    /// Pitch is clamped away from the poles, so the projection always exists.
    pub fn horizontal_direction(&self) -> Vec3 {
        utils::horizontal(self.view_direction).unwrap_or_else(|| world_up().cross(&self.right))
    }

    /// Teleport the camera
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Translate along an arbitrary direction by `distance`
    pub fn translate(&mut self, direction: Vec3, distance: f32) {
        self.position += direction * distance;
    }

    /// Translate along one of the camera's own basis vectors
    ///
    /// Negative speeds move backwards, down or left.
    pub fn move_along(&mut self, axis: CameraAxis, speed: f32) {
        let direction = self.axis(axis);
        self.translate(direction, speed);
    }

    /// Add to the current pitch and yaw (degrees) and rebuild the basis
    pub fn rotate(&mut self, delta_pitch: f32, delta_yaw: f32) {
        self.set_rotation(self.pitch + delta_pitch, self.yaw + delta_yaw);
    }

    /// Set pitch and yaw (degrees) and rebuild the basis
    pub fn set_rotation(&mut self, pitch: f32, yaw: f32) {
        self.pitch = pitch.clamp(-self.pitch_limit, self.pitch_limit);
        self.yaw = yaw;
        self.update_vectors();
    }

    fn update_vectors(&mut self) {
        let pitch = utils::deg_to_rad(self.pitch);
        let yaw = utils::deg_to_rad(self.yaw);

        let front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());
        self.view_direction = front.normalize();
        self.right = self.view_direction.cross(&world_up()).normalize();
        self.up = self.right.cross(&self.view_direction).normalize();
    }

    /// Look-at view matrix from the position toward `position + view_direction`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.view_direction, self.up)
    }
}

impl Default for Camera {
    /// Camera 100 units back on +Z looking down -Z
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 100.0), 0.0, -90.0)
    }
}

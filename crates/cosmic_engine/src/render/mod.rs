//! Render-side data
//!
//! Drawing is done by an external renderer; this module holds the camera it
//! reads from and the per-frame snapshot it consumes.

pub mod camera;
pub mod snapshot;

pub use camera::{Camera, CameraAxis};
pub use snapshot::{FrameSnapshot, PlanetInstance, ThrusterView};

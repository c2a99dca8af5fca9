//! Game loop and progression
//!
//! [`GameSession`] ties the camera, the planet field and the collision
//! checker together and advances them one frame at a time.

pub mod session;
pub mod spaceship;
pub mod state;

pub use session::{FrameOutcome, GameSession};
pub use spaceship::Thrusters;
pub use state::{GamePhase, GameState};

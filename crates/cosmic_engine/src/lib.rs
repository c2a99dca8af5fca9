//! # Cosmic Engine
//!
//! Simulation core of an endless planet-run game: a camera flies forward
//! through a procedurally streamed planet field while the player strafes
//! around the planets.
//!
//! ## Features
//!
//! - **Camera**: Euler-angle free-fly camera with an orthonormal basis
//! - **Planet Streaming**: Seeded batches spawned ahead, culled once behind
//! - **Collision**: Ship versus planet axis-aligned box checks
//! - **Progression**: Speed and density ramps, scoring, game over and restart
//! - **Headless**: Rendering and windowing stay outside; each frame yields a snapshot
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cosmic_engine::prelude::*;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let mut session = GameSession::new(GameConfig::default())?;
//!     let mut clock = FrameClock::fixed_step(1.0 / 60.0);
//!     let input = InputState::new();
//!
//!     loop {
//!         let outcome = session.tick(&input, clock.tick());
//!         if outcome.quit_requested || session.state().is_game_over() {
//!             break;
//!         }
//!         let _frame = session.snapshot();
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod game;
pub mod input;
pub mod physics;
pub mod render;
pub mod world;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, GameConfig},
        foundation::{
            math::{Mat4, Vec3},
            time::FrameClock,
        },
        game::{FrameOutcome, GamePhase, GameSession},
        input::{ActionSet, InputSource, InputState, KeyCode, MouseButton},
        physics::{Aabb, CollisionChecker},
        render::{Camera, FrameSnapshot},
        world::{Planet, PlanetStreamer},
    };
}

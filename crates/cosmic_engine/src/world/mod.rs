//! Procedurally streamed planet field

pub mod planet;
pub mod streamer;

pub use planet::Planet;
pub use streamer::{PlanetStreamer, SpawnVolume, StreamUpdate};

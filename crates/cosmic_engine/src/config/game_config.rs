//! Game configuration
//!
//! Defaults are tuned for a 60 fps planet run.

use super::{Config, ConfigError};
use crate::foundation::math::Vec3;
use crate::input::ControlsConfig;
use serde::{Deserialize, Serialize};

/// Complete game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for planet generation. `None` seeds from system entropy.
    pub seed: Option<u64>,

    /// Planet spawning and culling
    pub spawn: SpawnConfig,

    /// Difficulty ramps and scoring
    pub progression: ProgressionConfig,

    /// Camera start pose and spaceship placement
    pub camera: CameraConfig,

    /// Key bindings
    pub controls: ControlsConfig,
}

/// Planet spawning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Lower bound of the per-axis spawn offset around the camera
    pub range_min: f32,

    /// Upper bound of the per-axis spawn offset around the camera
    pub range_max: f32,

    /// Smallest planet scale
    pub min_scale: f32,

    /// Largest planet scale
    pub max_scale: f32,

    /// Extra Z offset pushing spawns ahead of the direction of travel
    pub ahead_offset: f32,

    /// Camera displacement that triggers a new batch
    pub trigger_distance: f32,

    /// Bounding box half extent per unit of planet scale
    pub bounding_box_scale_factor: f32,

    /// Planets generated at session start and on restart
    pub initial_planet_count: usize,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            range_min: -1000.0,
            range_max: 1000.0,
            min_scale: 10.0,
            max_scale: 15.0,
            ahead_offset: -3000.0,
            trigger_distance: 800.0,
            bounding_box_scale_factor: 3.0,
            initial_planet_count: 45,
        }
    }
}

/// Difficulty ramps and scoring
///
/// Speeds are in world units per second and ramp with elapsed play time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// Forward speed at the start of a run
    pub forward_speed_base: f32,

    /// Forward speed gained per second of play
    pub forward_speed_rate: f32,

    /// Forward speed ceiling
    pub forward_speed_cap: f32,

    /// Drift speed while the game is over
    pub game_over_speed: f32,

    /// Planet batch size gained per second of play
    pub planet_count_rate: f32,

    /// Planet batch size ceiling
    pub planet_count_cap: usize,

    /// Strafe speed at the start of a run
    pub strafe_speed_base: f32,

    /// Strafe speed gained per second of play
    pub strafe_speed_rate: f32,

    /// Strafe speed ceiling
    pub strafe_speed_cap: f32,

    /// Look rotation speed in degrees per second
    pub look_speed: f32,

    /// Score per second per second of elapsed play
    pub score_time_weight: f32,

    /// Score per second per unit of forward speed
    pub score_speed_weight: f32,

    /// Score lost for every planet destroyed by firing
    pub fire_penalty: f32,

    /// Planet spin in radians per second
    pub planet_spin_speed: f32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            forward_speed_base: 50.0,
            forward_speed_rate: 25.0,
            forward_speed_cap: 5000.0,
            game_over_speed: 25.0,
            planet_count_rate: 1.0,
            planet_count_cap: 90,
            strafe_speed_base: 12.0,
            strafe_speed_rate: 6.0,
            strafe_speed_cap: 1200.0,
            look_speed: 60.0,
            score_time_weight: 0.06,
            score_speed_weight: 0.12,
            fire_penalty: 1000.0,
            planet_spin_speed: 5.0,
        }
    }
}

/// Camera start pose and spaceship placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position at session start and after restart
    pub start_position: Vec3,

    /// Start pitch in degrees
    pub start_pitch: f32,

    /// Start yaw in degrees (-90 faces -Z)
    pub start_yaw: f32,

    /// Pitch is clamped to +/- this many degrees
    pub pitch_limit: f32,

    /// Distance of the spaceship in front of the camera
    pub spaceship_offset: f32,

    /// Half extent of the spaceship collision box
    pub spaceship_half_extent: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(0.0, 5.0, 20.0),
            start_pitch: -15.0,
            start_yaw: -90.0,
            pitch_limit: 89.0,
            spaceship_offset: 10.0,
            spaceship_half_extent: 1.0,
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let spawn = &self.spawn;
        let progression = &self.progression;
        let camera = &self.camera;

        for (field, value) in [
            ("spawn.range_min", spawn.range_min),
            ("spawn.range_max", spawn.range_max),
            ("spawn.min_scale", spawn.min_scale),
            ("spawn.max_scale", spawn.max_scale),
            ("spawn.ahead_offset", spawn.ahead_offset),
            ("spawn.trigger_distance", spawn.trigger_distance),
            ("spawn.bounding_box_scale_factor", spawn.bounding_box_scale_factor),
            ("progression.forward_speed_base", progression.forward_speed_base),
            ("progression.forward_speed_rate", progression.forward_speed_rate),
            ("progression.forward_speed_cap", progression.forward_speed_cap),
            ("progression.game_over_speed", progression.game_over_speed),
            ("progression.planet_count_rate", progression.planet_count_rate),
            ("progression.strafe_speed_base", progression.strafe_speed_base),
            ("progression.strafe_speed_rate", progression.strafe_speed_rate),
            ("progression.strafe_speed_cap", progression.strafe_speed_cap),
            ("progression.look_speed", progression.look_speed),
            ("progression.score_time_weight", progression.score_time_weight),
            ("progression.score_speed_weight", progression.score_speed_weight),
            ("progression.fire_penalty", progression.fire_penalty),
            ("progression.planet_spin_speed", progression.planet_spin_speed),
            ("camera.start_pitch", camera.start_pitch),
            ("camera.start_yaw", camera.start_yaw),
            ("camera.pitch_limit", camera.pitch_limit),
            ("camera.spaceship_offset", camera.spaceship_offset),
            ("camera.spaceship_half_extent", camera.spaceship_half_extent),
        ] {
            ensure(value.is_finite(), field, "must be a finite number")?;
        }
        ensure(
            camera.start_position.iter().all(|c| c.is_finite()),
            "camera.start_position",
            "must be finite",
        )?;

        ensure(
            spawn.range_min < spawn.range_max,
            "spawn.range_min",
            "must be less than spawn.range_max",
        )?;
        ensure(
            (spawn.range_max - spawn.range_min).is_finite(),
            "spawn.range_max",
            "span from spawn.range_min must be finite",
        )?;
        ensure(
            spawn.min_scale > 0.0 && spawn.min_scale <= spawn.max_scale,
            "spawn.min_scale",
            "must be positive and not exceed spawn.max_scale",
        )?;
        ensure(spawn.trigger_distance > 0.0, "spawn.trigger_distance", "must be positive")?;
        ensure(
            spawn.bounding_box_scale_factor > 0.0,
            "spawn.bounding_box_scale_factor",
            "must be positive",
        )?;
        ensure(
            progression.forward_speed_base <= progression.forward_speed_cap,
            "progression.forward_speed_base",
            "must not exceed progression.forward_speed_cap",
        )?;
        ensure(
            progression.strafe_speed_base <= progression.strafe_speed_cap,
            "progression.strafe_speed_base",
            "must not exceed progression.strafe_speed_cap",
        )?;
        for (field, rate) in [
            ("progression.forward_speed_rate", progression.forward_speed_rate),
            ("progression.strafe_speed_rate", progression.strafe_speed_rate),
            ("progression.planet_count_rate", progression.planet_count_rate),
        ] {
            ensure(rate >= 0.0, field, "must not be negative")?;
        }
        ensure(
            spawn.initial_planet_count <= progression.planet_count_cap,
            "spawn.initial_planet_count",
            "must not exceed progression.planet_count_cap",
        )?;
        ensure(progression.fire_penalty >= 0.0, "progression.fire_penalty", "must not be negative")?;
        ensure(
            camera.pitch_limit > 0.0 && camera.pitch_limit < 90.0,
            "camera.pitch_limit",
            "must lie strictly between 0 and 90 degrees",
        )?;
        ensure(
            camera.spaceship_half_extent > 0.0,
            "camera.spaceship_half_extent",
            "must be positive",
        )?;
        Ok(())
    }
}

fn ensure(condition: bool, field: &'static str, reason: &str) -> Result<(), ConfigError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: reason.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut config = GameConfig::default();
        config.spawn.range_min = 10.0;
        config.spawn.range_max = -10.0;

        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "spawn.range_min"),
            other => panic!("expected invalid range, got {other:?}"),
        }
    }

    fn rejected_field(config: &GameConfig) -> &'static str {
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => field,
            other => panic!("expected an invalid config, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_spawn_range_rejected() {
        let mut config = GameConfig::default();
        config.spawn.range_max = f32::INFINITY;
        assert_eq!(rejected_field(&config), "spawn.range_max");

        let mut config = GameConfig::default();
        config.spawn.range_min = f32::NAN;
        assert_eq!(rejected_field(&config), "spawn.range_min");
    }

    #[test]
    fn test_overflowing_spawn_span_rejected() {
        let mut config = GameConfig::default();
        config.spawn.range_min = -3.0e38;
        config.spawn.range_max = 3.0e38;
        assert_eq!(rejected_field(&config), "spawn.range_max");
    }

    #[test]
    fn test_overflowing_span_in_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.toml");
        std::fs::write(&path, "[spawn]\nrange_min = -3.0e38\nrange_max = 3.0e38\n").unwrap();

        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Invalid { field: "spawn.range_max", .. })
        ));
    }

    #[test]
    fn test_non_finite_scale_and_rates_rejected() {
        let mut config = GameConfig::default();
        config.spawn.max_scale = f32::INFINITY;
        assert_eq!(rejected_field(&config), "spawn.max_scale");

        let mut config = GameConfig::default();
        config.progression.planet_count_rate = f32::INFINITY;
        assert_eq!(rejected_field(&config), "progression.planet_count_rate");

        let mut config = GameConfig::default();
        config.progression.forward_speed_cap = f32::NAN;
        assert_eq!(rejected_field(&config), "progression.forward_speed_cap");

        let mut config = GameConfig::default();
        config.camera.start_position.x = f32::NEG_INFINITY;
        assert_eq!(rejected_field(&config), "camera.start_position");
    }

    #[test]
    fn test_negative_rates_rejected() {
        let mut config = GameConfig::default();
        config.progression.planet_count_rate = -1.0;
        assert_eq!(rejected_field(&config), "progression.planet_count_rate");

        let mut config = GameConfig::default();
        config.progression.forward_speed_rate = -25.0;
        assert_eq!(rejected_field(&config), "progression.forward_speed_rate");
    }

    #[test]
    fn test_pitch_limit_must_avoid_poles() {
        let mut config = GameConfig::default();
        config.camera.pitch_limit = 90.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");

        let mut config = GameConfig::default();
        config.seed = Some(7);
        config.spawn.trigger_distance = 1000.0;
        config.controls.fire_key = KeyCode::F;
        config.save_to_file(&path).unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.ron");

        let mut config = GameConfig::default();
        config.spawn.ahead_offset = -2000.0;
        config.save_to_file(&path).unwrap();

        assert_eq!(GameConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[spawn]\ntrigger_distance = 1000.0\n").unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        assert_eq!(loaded.spawn.trigger_distance, 1000.0);
        assert_eq!(loaded.spawn.initial_planet_count, 45);
        assert_eq!(loaded.progression, ProgressionConfig::default());
    }

    #[test]
    fn test_unknown_extension() {
        let result = GameConfig::load_from_file("game.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_invalid_file_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[spawn]\nmin_scale = 20.0\nmax_scale = 5.0\n").unwrap();

        assert!(matches!(GameConfig::load(&path), Err(ConfigError::Invalid { .. })));
    }
}

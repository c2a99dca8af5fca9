//! Game session
//!
//! [`GameSession`] owns everything one player's run needs: camera, planet
//! field, collision checker, progression state and thrusters. The host calls
//! [`GameSession::tick`] once per frame with the polled input and the frame
//! delta, then hands [`GameSession::snapshot`] to its renderer.
//!
//! Frame order: input, planet streaming, collision, progression, automatic
//! forward motion.

use crate::config::{ConfigError, GameConfig};
use crate::input::{ActionSet, InputSource};
use crate::physics::{CollisionChecker, CollisionReport};
use crate::render::{Camera, CameraAxis, FrameSnapshot, PlanetInstance};
use crate::world::{Planet, PlanetStreamer, StreamUpdate};

use super::spaceship::Thrusters;
use super::state::{GamePhase, GameState};

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameOutcome {
    /// The quit action was held; nothing else was simulated
    pub quit_requested: bool,
    /// The session was restarted this frame
    pub restarted: bool,
    /// Planets destroyed by firing
    pub planets_fired: usize,
    /// Streaming activity
    pub stream: StreamUpdate,
    /// Collision that ended the run this frame
    pub collision: Option<CollisionReport>,
}

/// A complete single-player run
pub struct GameSession {
    config: GameConfig,
    camera: Camera,
    streamer: PlanetStreamer,
    collision: CollisionChecker,
    state: GameState,
    thrusters: Thrusters,
}

impl GameSession {
    /// Validate `config` and start a run with the initial planet field
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let camera = Self::start_camera(&config);
        let mut streamer = PlanetStreamer::new(config.spawn.clone(), config.seed, camera.position());
        streamer.spawn_batch(camera.position(), config.spawn.initial_planet_count);
        let collision = CollisionChecker::new(
            config.camera.spaceship_offset,
            config.camera.spaceship_half_extent,
        );
        let state = GameState::new(&config.progression, config.spawn.initial_planet_count);

        log::info!(
            "Session started with {} planets (seed: {:?})",
            streamer.len(),
            config.seed
        );

        Ok(Self {
            config,
            camera,
            streamer,
            collision,
            state,
            thrusters: Thrusters::new(),
        })
    }

    fn start_camera(config: &GameConfig) -> Camera {
        let camera = &config.camera;
        Camera::new(camera.start_position, camera.start_pitch, camera.start_yaw)
            .with_pitch_limit(camera.pitch_limit)
    }

    /// Active configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera, for hosts feeding mouse look directly
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Planet field
    pub fn streamer(&self) -> &PlanetStreamer {
        &self.streamer
    }

    /// Mutable planet field
    pub fn streamer_mut(&mut self) -> &mut PlanetStreamer {
        &mut self.streamer
    }

    /// Live planets
    pub fn planets(&self) -> &[Planet] {
        self.streamer.planets()
    }

    /// Progression state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Collision checker placing the ship
    pub fn collision_checker(&self) -> &CollisionChecker {
        &self.collision
    }

    /// Poll `input` through the configured bindings and simulate one frame
    pub fn tick(&mut self, input: &impl InputSource, delta_time: f32) -> FrameOutcome {
        let actions = self.config.controls.poll(input);
        self.step(actions, delta_time)
    }

    /// Simulate one frame with the given actions held
    pub fn step(&mut self, actions: ActionSet, delta_time: f32) -> FrameOutcome {
        let mut outcome = FrameOutcome::default();
        if actions.contains(ActionSet::QUIT) {
            outcome.quit_requested = true;
            return outcome;
        }

        match self.state.phase() {
            GamePhase::GameOver => {
                if actions.contains(ActionSet::RESTART) {
                    self.restart();
                    outcome.restarted = true;
                    return outcome;
                }
            }
            GamePhase::Playing => {
                self.apply_movement(actions, delta_time);
                if actions.contains(ActionSet::FIRE) {
                    outcome.planets_fired = self.fire();
                }
            }
        }

        outcome.stream = self.streamer.update(&self.camera, self.state.planet_target());

        if !self.state.is_game_over() {
            outcome.collision = self.check_collisions();
        }

        let initial = self.config.spawn.initial_planet_count;
        self.state.advance(&self.config.progression, initial, delta_time);
        self.thrusters.update(!self.state.is_game_over(), delta_time);

        let forward = self.camera.horizontal_direction();
        self.camera.translate(forward, self.state.forward_speed() * delta_time);

        log::trace!(
            "Score: {} Planets: {} Speed: {}",
            self.state.score() as i64,
            self.streamer.len(),
            self.state.forward_speed()
        );
        outcome
    }

    fn apply_movement(&mut self, actions: ActionSet, delta_time: f32) {
        let strafe = self.state.strafe_speed(&self.config.progression) * delta_time;
        let moves = [
            (ActionSet::MOVE_UP, CameraAxis::Up, strafe),
            (ActionSet::MOVE_DOWN, CameraAxis::Up, -strafe),
            (ActionSet::MOVE_RIGHT, CameraAxis::Right, strafe),
            (ActionSet::MOVE_LEFT, CameraAxis::Right, -strafe),
        ];
        for (action, axis, distance) in moves {
            if actions.contains(action) {
                self.camera.move_along(axis, distance);
            }
        }

        let look = self.config.progression.look_speed * delta_time;
        let axis_input = |positive: ActionSet, negative: ActionSet| -> f32 {
            f32::from(u8::from(actions.contains(positive))) - f32::from(u8::from(actions.contains(negative)))
        };
        let pitch = axis_input(ActionSet::LOOK_UP, ActionSet::LOOK_DOWN) * look;
        let yaw = axis_input(ActionSet::LOOK_RIGHT, ActionSet::LOOK_LEFT) * look;
        if pitch != 0.0 || yaw != 0.0 {
            self.camera.rotate(pitch, yaw);
        }
    }

    /// Test the ship against every planet and end the run on a hit
    pub fn check_collisions(&mut self) -> Option<CollisionReport> {
        let report = self.collision.check(&self.camera, self.streamer.planets())?;
        self.state.enter_game_over();
        log::info!(
            "GAME OVER! Final score: {} Press R to restart!",
            self.state.score() as i64
        );
        log::debug!("Ship hit planet at {:?}", report.planet_position);
        Some(report)
    }

    /// Destroy every planet whose box covers the ship in X and Y
    ///
    /// Each destroyed planet costs the configured penalty. Returns how many
    /// planets were removed.
    pub fn fire(&mut self) -> usize {
        let ship = self.collision.ship_position(&self.camera);
        let removed = self
            .streamer
            .remove_where(|planet| planet.bounds().contains_point_xy(ship));
        if !removed.is_empty() {
            self.state
                .apply_fire_penalty(&self.config.progression, removed.len());
            log::debug!("Fired: destroyed {} planets", removed.len());
        }
        removed.len()
    }

    /// Reset camera, progression, thrusters and the planet field
    pub fn restart(&mut self) {
        self.camera = Self::start_camera(&self.config);
        self.state = GameState::new(&self.config.progression, self.config.spawn.initial_planet_count);
        self.thrusters.reset();
        self.streamer
            .reset(self.camera.position(), self.config.spawn.initial_planet_count);
        log::info!("Session restarted with {} planets", self.streamer.len());
    }

    /// Render-facing view of the current frame
    pub fn snapshot(&self) -> FrameSnapshot {
        let ship_position = self.collision.ship_position(&self.camera);
        FrameSnapshot {
            planets: self
                .streamer
                .planets()
                .iter()
                .map(|planet| PlanetInstance {
                    position: planet.position(),
                    scale: planet.scale(),
                })
                .collect(),
            planet_spin_angle: self.state.spin_angle(),
            view_matrix: self.camera.view_matrix(),
            camera_position: self.camera.position(),
            view_direction: self.camera.view_direction(),
            camera_up: self.camera.up(),
            camera_right: self.camera.right(),
            ship_position,
            thrusters: self.thrusters.view(&self.camera, ship_position),
            score: self.state.score(),
            game_over: self.state.is_game_over(),
        }
    }
}

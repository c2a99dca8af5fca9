//! Score and difficulty progression

use crate::config::ProgressionConfig;
use crate::foundation::math::utils;

/// Phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Flying; progression ramps advance
    #[default]
    Playing,
    /// Crashed; only a restart is accepted
    GameOver,
}

/// Per-run progression state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    phase: GamePhase,
    score: f32,
    elapsed: f32,
    forward_speed: f32,
    planet_target: usize,
    spin_speed: f32,
    spin_angle: f32,
}

impl GameState {
    /// Fresh state for a new run
    pub fn new(config: &ProgressionConfig, initial_planets: usize) -> Self {
        Self {
            phase: GamePhase::Playing,
            score: 0.0,
            elapsed: 0.0,
            forward_speed: config.forward_speed_base,
            planet_target: initial_planets,
            spin_speed: config.planet_spin_speed,
            spin_angle: 0.0,
        }
    }

    /// Current phase
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Whether the run has ended
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Current score
    pub fn score(&self) -> f32 {
        self.score
    }

    /// Seconds of play in this run
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Automatic forward speed in units per second
    pub fn forward_speed(&self) -> f32 {
        self.forward_speed
    }

    /// Size of the next spawned batch
    pub fn planet_target(&self) -> usize {
        self.planet_target
    }

    /// Shared planet spin angle in radians
    pub fn spin_angle(&self) -> f32 {
        self.spin_angle
    }

    /// Strafe speed in units per second for the current elapsed time
    pub fn strafe_speed(&self, config: &ProgressionConfig) -> f32 {
        utils::capped_ramp(
            config.strafe_speed_base,
            config.strafe_speed_rate,
            config.strafe_speed_cap,
            self.elapsed,
        )
    }

    /// Subtract the firing penalty for `planets` destroyed planets
    pub fn apply_fire_penalty(&mut self, config: &ProgressionConfig, planets: usize) {
        self.score -= config.fire_penalty * planets as f32;
    }

    /// End the run
    pub fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
    }

    /// Advance the progression by one frame
    ///
    /// While playing: elapsed time, forward speed, batch size and score all
    /// ramp, and the score is floored at zero. After game over the ramps stay
    /// frozen, the ship drifts at the game-over speed and planets stop spinning.
    pub fn advance(&mut self, config: &ProgressionConfig, initial_planets: usize, delta_time: f32) {
        match self.phase {
            GamePhase::Playing => {
                self.elapsed += delta_time;
                self.forward_speed = utils::capped_ramp(
                    config.forward_speed_base,
                    config.forward_speed_rate,
                    config.forward_speed_cap,
                    self.elapsed,
                );
                let extra = (config.planet_count_rate * self.elapsed).max(0.0) as usize;
                self.planet_target = initial_planets.saturating_add(extra).min(config.planet_count_cap);

                self.score += (self.elapsed * config.score_time_weight
                    + self.forward_speed * config.score_speed_weight)
                    * delta_time;
                self.score = self.score.max(0.0);
            }
            GamePhase::GameOver => {
                self.forward_speed = config.game_over_speed;
                self.spin_speed = 0.0;
            }
        }
        self.spin_angle += self.spin_speed * delta_time;
    }
}

//! Frame timing
//!
//! The simulation consumes one delta per frame. [`FrameClock`] produces that
//! delta either from the wall clock (interactive play) or from a fixed step
//! (headless runs and tests).

use std::time::Instant;

/// How the clock produces frame deltas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockMode {
    /// Measure real elapsed time between ticks
    WallClock,

    /// Advance by a constant number of seconds per tick
    FixedStep(f32),
}

/// Frame clock tracking delta time, total time and frame count
pub struct FrameClock {
    mode: ClockMode,
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock measuring wall-clock time
    pub fn wall_clock() -> Self {
        Self::with_mode(ClockMode::WallClock)
    }

    /// Create a clock advancing by `step` seconds every tick
    pub fn fixed_step(step: f32) -> Self {
        Self::with_mode(ClockMode::FixedStep(step))
    }

    fn with_mode(mode: ClockMode) -> Self {
        Self {
            mode,
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance the clock by one frame and return the new delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta_time = match self.mode {
            ClockMode::WallClock => now.duration_since(self.last_frame).as_secs_f32(),
            ClockMode::FixedStep(step) => step,
        };
        self.last_frame = now;
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.delta_time
    }

    /// Clock mode
    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    /// Time since the previous tick in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Simulated time accumulated since the clock was created
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Average frames per simulated second
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}

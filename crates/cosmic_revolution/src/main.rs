//! Cosmic Revolution headless runner
//!
//! Drives a [`GameSession`] with the autopilot and reports progress through
//! the log. Rendering and windowing hosts consume the same session through
//! [`GameSession::snapshot`].

mod autopilot;
mod cli;

use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use cosmic_engine::config::{Config, ConfigError, GameConfig};
use cosmic_engine::foundation::logging;
use cosmic_engine::foundation::time::FrameClock;
use cosmic_engine::game::{FrameOutcome, GameSession};

use autopilot::Autopilot;
use cli::CliArgs;

/// Frames between progress reports
const REPORT_INTERVAL: u64 = 60;

#[derive(thiserror::Error, Debug)]
enum RunError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid frame step {0}: must be a positive number of seconds")]
    InvalidStep(f32),
}

/// Totals over a whole run
#[derive(Debug, Default)]
struct RunSummary {
    frames: u64,
    crashes: u32,
    restarts: u32,
    planets_fired: usize,
    best_score: i64,
}

impl RunSummary {
    fn record(&mut self, outcome: &FrameOutcome, session: &GameSession) {
        self.frames += 1;
        self.planets_fired += outcome.planets_fired;
        if outcome.collision.is_some() {
            self.crashes += 1;
        }
        if outcome.restarted {
            self.restarts += 1;
        }
        self.best_score = self.best_score.max(session.state().score() as i64);
    }
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init_with_level(args.log_level.as_deref().unwrap_or("info"));

    log::info!("Starting Cosmic Revolution");
    match run(&args) {
        Ok(summary) => {
            log::info!(
                "Run finished after {} frames: best score {}, {} crashes, {} restarts, {} planets fired",
                summary.frames,
                summary.best_score,
                summary.crashes,
                summary.restarts,
                summary.planets_fired
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Cosmic Revolution failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &CliArgs) -> Result<GameConfig, RunError> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from {}", path.display());
            GameConfig::load(path)?
        }
        None => GameConfig::default(),
    };
    cli::apply_cli_overrides(&mut config, args);
    Ok(config)
}

fn run(args: &CliArgs) -> Result<RunSummary, RunError> {
    if let Some(path) = &args.write_default_config {
        GameConfig::default().save_to_file(path)?;
        log::info!("Wrote default configuration to {}", path.display());
        return Ok(RunSummary::default());
    }

    let frame_budget = Duration::try_from_secs_f32(args.dt)
        .ok()
        .filter(|step| !step.is_zero())
        .ok_or(RunError::InvalidStep(args.dt))?;

    let mut session = GameSession::new(load_config(args)?)?;
    let mut clock = if args.realtime {
        FrameClock::wall_clock()
    } else {
        FrameClock::fixed_step(args.dt)
    };
    let mut pilot = Autopilot::new(args.frames, args.restarts);
    let mut summary = RunSummary::default();

    loop {
        let frame_start = Instant::now();
        let delta_time = clock.tick();
        let actions = pilot.next_actions(&session);
        let outcome = session.step(actions, delta_time);
        if outcome.quit_requested {
            break;
        }
        summary.record(&outcome, &session);

        if clock.frame_count() % REPORT_INTERVAL == 0 {
            let state = session.state();
            log::info!(
                "Score: {} Planets: {} Speed: {}",
                state.score() as i64,
                session.planets().len(),
                state.forward_speed()
            );
        }

        if args.realtime {
            if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    log::debug!(
        "Autopilot flew {} frames at an average of {:.1} fps",
        pilot.frames(),
        clock.average_fps()
    );
    Ok(summary)
}

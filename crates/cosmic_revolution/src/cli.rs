//! Command-line argument parsing for the headless runner.

use std::path::PathBuf;

use clap::Parser;
use cosmic_engine::config::GameConfig;

/// Cosmic Revolution command-line arguments.
///
/// CLI values override settings loaded from `--config`.
#[derive(Parser, Debug)]
#[command(name = "cosmic_revolution", about = "Fly through an endless planet field")]
pub struct CliArgs {
    /// Configuration file (.toml or .ron).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Planet generation seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many frames.
    #[arg(long, default_value_t = 3600)]
    pub frames: u64,

    /// Seconds simulated per frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f32,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// How many times the autopilot restarts after a crash.
    #[arg(long, default_value_t = 0)]
    pub restarts: u32,

    /// Pace frames to wall-clock time instead of running as fast as possible.
    #[arg(long)]
    pub realtime: bool,

    /// Write the default configuration to this path and exit.
    #[arg(long)]
    pub write_default_config: Option<PathBuf>,
}

/// Apply CLI overrides to a loaded config.
pub fn apply_cli_overrides(config: &mut GameConfig, args: &CliArgs) {
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["cosmic_revolution"]).unwrap();
        assert_eq!(args.frames, 3600);
        assert_eq!(args.restarts, 0);
        assert!(!args.realtime);
        assert!(args.config.is_none());
        assert!((args.dt - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_cli_override() {
        let args = CliArgs::try_parse_from([
            "cosmic_revolution",
            "--seed",
            "42",
            "--frames",
            "10",
            "--config",
            "game.toml",
        ])
        .unwrap();
        assert_eq!(args.frames, 10);
        assert_eq!(args.config, Some(PathBuf::from("game.toml")));

        let mut config = GameConfig::default();
        apply_cli_overrides(&mut config, &args);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_cli_no_override() {
        let mut config = GameConfig::default();
        config.seed = Some(3);
        let args = CliArgs::try_parse_from(["cosmic_revolution"]).unwrap();
        apply_cli_overrides(&mut config, &args);
        assert_eq!(config.seed, Some(3));
    }
}

//! Logging utilities

pub use log::{debug, error, info, trace, warn, LevelFilter};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with an explicit level
///
/// Unknown level strings fall back to `info`. `RUST_LOG` still refines
/// per-module filters on top of the chosen level. If a logger is already
/// installed it stays in place and the failure is reported through it.
pub fn init_with_level(level: &str) {
    let filter = parse_level(level);
    if let Err(e) = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .try_init()
    {
        warn!("Logger already initialized, keeping it: {}", e);
    }
}

/// Parse a level name (`error`, `warn`, `info`, `debug`, `trace`, `off`)
pub fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("TRACE"), LevelFilter::Trace);
        assert_eq!(parse_level("loud"), LevelFilter::Info);
    }

    #[test]
    fn test_repeated_init_keeps_first_logger() {
        init_with_level("debug");
        let level = log::max_level();
        init_with_level("trace");
        assert_eq!(log::max_level(), level);
    }
}

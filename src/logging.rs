//! Logging setup
//!
//! Installs a global `tracing` subscriber from a [`Config`]. `RUST_LOG`
//! directives take precedence over the configured level.

use std::error::Error;
use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global subscriber. Fails if one is already installed or the
/// log file cannot be opened.
pub fn init(config: &Config) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.log_level.as_tracing_level()).into())
        .from_env_lossy();

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_only_once() {
        let config = Config::default();
        // Another test binary may have installed one already
        let _ = init(&config);
        assert!(init(&config).is_err());
    }
}

//! Logging and tracing initialization for the strobo tools.
//!
//! The pipeline itself only emits `tracing` events; this module decides
//! where they go. Long series runs are often driven from scripts, so the
//! configured log file takes precedence over terminal output when set.

use std::sync::Mutex;

use crate::config::LoggingConfig;

/// Initialize the tracing subscriber with the given configuration.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if let Some(path) = &config.file {
        match std::fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                let subscriber = fmt::Subscriber::builder()
                    .with_env_filter(env_filter)
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .finish();
                tracing::subscriber::set_global_default(subscriber).ok();
                return;
            }
            Err(e) => {
                eprintln!("Failed to open log file {}: {e}", path.display());
            }
        }
    }

    if config.json {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_log_file_receives_events() {
        let path = std::env::temp_dir().join(format!("strobo-log-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        init_logging(&LoggingConfig {
            level: "debug".to_string(),
            json: false,
            file: Some(path.clone()),
        });
        tracing::info!("strobe series written");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("strobe series written"));
        let _ = std::fs::remove_file(&path);
    }
}

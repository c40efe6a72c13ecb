//! # Structured Logging
//!
//! `tracing` setup for the board. The terminal belongs to the board itself,
//! so log output goes to stderr or to a log file, never to stdout.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::Deserialize;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level filter (e.g., "info", "debug", "warn")
    pub level: String,
    /// Emit JSON lines instead of plain text
    pub json_format: bool,
    /// Full filter directive, overrides `level` (e.g. "board=debug")
    pub env_filter: Option<String>,
    /// Append to this file instead of writing to stderr
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
            env_filter: None,
            file: None,
        }
    }
}

impl LogConfig {
    /// Minimal output for tests
    pub fn test() -> Self {
        Self {
            level: "error".to_string(),
            json_format: false,
            env_filter: Some("board=error".to_string()),
            file: None,
        }
    }

    pub fn with_level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.file = Some(path.into());
        self
    }

    /// The directive handed to `EnvFilter` when `RUST_LOG` is unset
    pub fn directive(&self) -> &str {
        self.env_filter.as_deref().unwrap_or(&self.level)
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(config.directive()))?;

    let writer = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::stderr),
    };

    if config.json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(writer).json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(writer).with_ansi(config.file.is_none()))
            .try_init()?;
    }

    tracing::info!(
        target: "board::logging",
        level = %config.level,
        format = if config.json_format { "json" } else { "text" },
        "Logging initialized"
    );

    Ok(())
}

pub fn log_startup_info(service_name: &str, service_version: &str) {
    tracing::info!(
        target: "board::startup",
        service = service_name,
        version = service_version,
        pid = std::process::id(),
        os = std::env::consts::OS,
        "Application startup"
    );
}

pub fn log_shutdown_info(service_name: &str) {
    tracing::info!(target: "board::shutdown", service = service_name, "Application shutdown");
}

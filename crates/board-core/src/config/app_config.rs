use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::validation::validate_range;
use super::{ConfigError, ConfigSource};
use crate::logging::LogConfig;

pub const ENV_ASSETS_DIR: &str = "BOARD_ASSETS_DIR";
pub const ENV_SEED: &str = "BOARD_SEED";
pub const ENV_LOG_LEVEL: &str = "BOARD_LOG_LEVEL";

/// Inclusive `min..=max` bounds for a generated quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Bounds used by the data generator
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub users: CountRange,
    pub comments: CountRange,
    pub words: CountRange,
    pub likes: CountRange,
    pub dislikes: CountRange,
    /// Earliest comment date; the latest is the day before today
    pub start_date: NaiveDate,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            users: CountRange::new(20, 100),
            comments: CountRange::new(20, 25),
            words: CountRange::new(5, 14),
            likes: CountRange::new(1, 499),
            dislikes: CountRange::new(1, 99),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_at(Local::now().date_naive())
    }

    pub fn validate_at(&self, today: NaiveDate) -> Result<(), ConfigError> {
        validate_range("generator.users", &self.users)?;
        validate_range("generator.comments", &self.comments)?;
        validate_range("generator.words", &self.words)?;
        validate_range("generator.likes", &self.likes)?;
        validate_range("generator.dislikes", &self.dislikes)?;

        if self.users.min == 0 {
            return Err(ConfigError::validation_failed(
                "generator.users: at least one user is required to author comments",
            ));
        }

        if self.start_date > today {
            return Err(ConfigError::invalid_value(
                "generator.start_date",
                self.start_date.to_string(),
                format!("a date on or before {}", today),
            ));
        }

        Ok(())
    }
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub assets_dir: PathBuf,
    pub seed: Option<u64>,
    pub log: LogConfig,
    pub generator: GeneratorConfig,
    #[serde(skip)]
    sources: HashMap<String, ConfigSource>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            seed: None,
            log: LogConfig::default(),
            generator: GeneratorConfig::default(),
            sources: HashMap::new(),
        }
    }
}

impl BoardConfig {
    /// Load a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let table: toml::Table = toml::from_str(&contents)?;
        let mut config: Self = toml::from_str(&contents)?;

        // Only keys the file actually sets are attributed to it
        let source = ConfigSource::File(path.display().to_string());
        let log_level_set = table
            .get("log")
            .and_then(|log| log.get("level"))
            .is_some();
        for (field, present) in [
            ("assets_dir", table.contains_key("assets_dir")),
            ("seed", table.contains_key("seed")),
            ("log.level", log_level_set),
            ("generator", table.contains_key("generator")),
        ] {
            if present {
                config.record(field, source.clone());
            }
        }
        Ok(config)
    }

    /// Overlay `BOARD_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| env::var(key).ok())
    }

    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_ASSETS_DIR) {
            self.assets_dir = PathBuf::from(dir);
            self.record("assets_dir", ConfigSource::EnvVar(ENV_ASSETS_DIR.to_string()));
        }

        if let Some(seed) = lookup(ENV_SEED) {
            let parsed = seed
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::invalid_value("seed", &seed, "unsigned 64-bit integer"))?;
            self.seed = Some(parsed);
            self.record("seed", ConfigSource::EnvVar(ENV_SEED.to_string()));
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log.level = level;
            self.record("log.level", ConfigSource::EnvVar(ENV_LOG_LEVEL.to_string()));
        }

        Ok(())
    }

    pub fn with_assets_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.assets_dir = dir.into();
        self.record("assets_dir", ConfigSource::CommandLine);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self.record("seed", ConfigSource::CommandLine);
        self
    }

    pub fn with_log_level<S: Into<String>>(mut self, level: S) -> Self {
        self.log = self.log.with_level(level);
        self.record("log.level", ConfigSource::CommandLine);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()
    }

    /// Where each tracked value came from
    pub fn config_sources(&self) -> HashMap<String, ConfigSource> {
        let mut sources = HashMap::new();
        for field in ["assets_dir", "seed", "log.level", "generator"] {
            sources.insert(field.to_string(), ConfigSource::Default);
        }
        sources.extend(self.sources.iter().map(|(k, v)| (k.clone(), v.clone())));
        sources
    }

    fn record(&mut self, field: &str, source: ConfigSource) {
        self.sources.insert(field.to_string(), source);
    }
}

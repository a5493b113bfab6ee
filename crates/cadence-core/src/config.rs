use anyhow::Result;
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, Environment, FileFormat, Map, Source};
use serde::Deserialize;

use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL,
    DEFAULT_MAX_OCCURRENCES,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub recurrence: RecurrenceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecurrenceConfig {
    /// Hard cap on dates emitted by a single generator run.
    pub max_occurrences: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads settings from `CADENCE_*` environment variables and `cadence.toml`
    /// (optional) on top of the built-in defaults.
    /// File values take precedence over environment variables.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the result fails.
    pub fn load() -> Result<Self> {
        Self::layered(
            environment(),
            config::File::with_name(CONFIG_FILE_NAME).required(false),
        )
    }

    /// ## Summary
    /// Builds settings from an in-memory TOML document on top of the defaults.
    /// The process environment is not consulted.
    ///
    /// ## Errors
    /// Returns an error if the TOML is malformed, has the wrong shape, or
    /// fails validation.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Self::layered(
            environment().source(Some(Map::new())),
            config::File::from_str(toml, FileFormat::Toml),
        )
    }

    /// Defaults, then `env`, then `file`; later sources win.
    fn layered<F>(env: Environment, file: F) -> Result<Self>
    where
        F: Source + Send + Sync + 'static,
    {
        let settings = defaults()?
            // Env
            .add_source(env)
            // TOML file
            .add_source(file)
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but make no sense.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if `recurrence.max_occurrences` is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.recurrence.max_occurrences == 0 {
            return Err(CoreError::ConfigError(
                "recurrence.max_occurrences must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn environment() -> Environment {
    Environment::with_prefix(CONFIG_ENV_PREFIX)
        .prefix_separator("_")
        .separator(CONFIG_ENV_SEPARATOR)
        .ignore_empty(true)
        .try_parsing(true)
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default(
            "recurrence.max_occurrences",
            i64::from(DEFAULT_MAX_OCCURRENCES),
        )?
        .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}

/// Upper bound on the number of dates one generator run may emit.
pub const DEFAULT_MAX_OCCURRENCES: u32 = 10_000;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Prefix for environment overrides, e.g. `CADENCE_LOGGING__LEVEL`.
pub const CONFIG_ENV_PREFIX: &str = "CADENCE";
pub const CONFIG_ENV_SEPARATOR: &str = "__";
pub const CONFIG_FILE_NAME: &str = "cadence.toml";

/// Calendar dates travel as `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

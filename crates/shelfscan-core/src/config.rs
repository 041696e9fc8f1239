use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Reads the `SHELFSCAN_*` settings, picking up a `.env` file first if one exists.
///
/// # Errors
///
/// Returns `ConfigError` when a path variable is set but blank.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Same as [`load_app_config`] but only sees the current process environment.
///
/// # Errors
///
/// Returns `ConfigError` when a path variable is set but blank.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Resolves every setting through `lookup`, applying the data-dir defaults.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_empty_path = |var: &str, default: &str| -> Result<PathBuf, ConfigError> {
        let raw = or_default(var, default);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "path must be non-empty".to_string(),
            });
        }
        Ok(PathBuf::from(raw))
    };

    let env = parse_environment(&or_default("SHELFSCAN_ENV", "development"));
    let log_level = or_default("SHELFSCAN_LOG_LEVEL", "info");
    let data_dir = non_empty_path("SHELFSCAN_DATA_DIR", "./data")?;

    // File locations default to well-known names inside the data directory.
    let raw_file = match lookup("SHELFSCAN_RAW_FILE") {
        Ok(_) => non_empty_path("SHELFSCAN_RAW_FILE", "")?,
        Err(_) => data_dir.join("scrapped_info.json"),
    };
    let data_file = match lookup("SHELFSCAN_DATA_FILE") {
        Ok(_) => non_empty_path("SHELFSCAN_DATA_FILE", "")?,
        Err(_) => data_dir.join("data.json"),
    };

    Ok(AppConfig {
        env,
        log_level,
        data_dir,
        raw_file,
        data_file,
    })
}

/// Maps `SHELFSCAN_ENV` onto an [`Environment`]; unknown names mean development.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

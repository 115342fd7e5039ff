use crate::app_config::{AppConfig, Environment};
use crate::collabs::UserType;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration from an env-var lookup function, so tests
/// can drive it from a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("INFLUFINDER_ENV", "development"))?;
    let log_level = or_default("INFLUFINDER_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default(
        "INFLUFINDER_CATALOG_PATH",
        "./config/catalog.yaml",
    ));

    let user_type = match lookup("INFLUFINDER_USER_TYPE") {
        Ok(raw) if !raw.trim().is_empty() => Some(raw.parse::<UserType>().map_err(|e| {
            ConfigError::InvalidEnvVar {
                var: "INFLUFINDER_USER_TYPE".to_string(),
                reason: e.to_string(),
            }
        })?),
        _ => None,
    };

    Ok(AppConfig {
        env,
        log_level,
        catalog_path,
        user_type,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "INFLUFINDER_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a present env var holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a present env var holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed. Every key has a default; absence is never an error.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let catalog_base_url = or_default("BIZDIR_CATALOG_BASE_URL", "http://localhost:5000");
    let request_timeout_secs = parse_u64("BIZDIR_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("BIZDIR_USER_AGENT", "bizdir/0.1 (directory-search)");
    let debounce_ms = parse_u64("BIZDIR_DEBOUNCE_MS", "300")?;
    let min_loading_ms = parse_u64("BIZDIR_MIN_LOADING_MS", "800")?;
    let result_limit = parse_u32("BIZDIR_RESULT_LIMIT", "50")?;
    let log_level = or_default("BIZDIR_LOG_LEVEL", "info");

    Ok(AppConfig {
        catalog_base_url,
        request_timeout_secs,
        user_agent,
        debounce_ms,
        min_loading_ms,
        result_limit,
        log_level,
    })
}

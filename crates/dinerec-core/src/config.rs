use std::net::SocketAddr;
use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::error::ConfigError;
use crate::tiers::PriceTiers;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed or the price tiers
/// are inconsistent.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in
/// the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful
/// for testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value cannot be parsed or the price tiers
/// are inconsistent.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("DINEREC_ENV", "development"));
    let bind_addr = parse_addr("DINEREC_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("DINEREC_LOG_LEVEL", "info");
    let dataset_path = PathBuf::from(or_default("DINEREC_DATASET_PATH", "./data/restaurants.json"));

    // Missing key is not an error: the engine then runs in
    // deterministic-only mode and every request takes the fallback path.
    let groq_api_key = lookup("GROQ_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());
    let groq_model = or_default("DINEREC_GROQ_MODEL", "llama-3.1-8b-instant");
    let groq_base_url = or_default("DINEREC_GROQ_BASE_URL", "https://api.groq.com/openai/v1");
    let groq_timeout_secs = parse_u64("DINEREC_GROQ_TIMEOUT_SECS", "30")?;

    let candidate_limit = parse_usize("DINEREC_CANDIDATE_LIMIT", "20")?;
    let top_n = parse_usize("DINEREC_TOP_N", "10")?;

    let budget_max = parse_f64("DINEREC_BUDGET_MAX", "500")?;
    let moderate_max = parse_f64("DINEREC_MODERATE_MAX", "1000")?;
    let tiers = PriceTiers::new(budget_max, moderate_max)?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        dataset_path,
        groq_api_key,
        groq_model,
        groq_base_url,
        groq_timeout_secs,
        candidate_limit,
        top_n,
        tiers,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

//! Runtime configuration and credential resolution.
//!
//! The API credential resolves with precedence: process environment
//! variable, then a local `.env` key-value file. Absence is a fatal
//! startup condition.

use std::collections::HashMap;

use thiserror::Error;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API credential: set {API_KEY_VAR} in the environment or a local .env file")]
    MissingApiKey,

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Thresholds for the hotspot merge predicate.
///
/// The defaults come from the scoring contract and are deliberately kept
/// configurable rather than derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DedupeParams {
    /// Bounding-box intersection-over-union above which two hotspots merge.
    pub iou_threshold: f64,
    /// Center-to-center distance (normalized space) below which two
    /// hotspots merge even without bounding-box overlap.
    pub center_dist_threshold: f64,
}

impl Default for DedupeParams {
    fn default() -> Self {
        Self {
            iou_threshold: 0.55,
            center_dist_threshold: 0.12,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub fetch_timeout_secs: u64,
    pub max_body_chars: usize,
    pub dedupe: DedupeParams,
}

/// Load configuration from the process environment, falling back to a
/// local `.env` file for the API credential.
///
/// Calls `dotenvy::dotenv().ok()` first so a `.env` file also feeds the
/// ordinary env-var lookups.
///
/// # Errors
///
/// Returns `ConfigError::MissingApiKey` if no credential is found, or
/// `ConfigError::InvalidEnvVar` if a tunable fails to parse.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    let env_file = std::fs::read_to_string(".env")
        .map(|s| parse_env_file(&s))
        .unwrap_or_default();
    build_config(|key| std::env::var(key), &env_file)
}

/// Core lookup/validation logic, decoupled from the real environment so it
/// can be tested with a pure `HashMap` lookup.
pub(crate) fn build_config<F>(
    lookup: F,
    env_file: &HashMap<String, String>,
) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        or_default(var, default)
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let api_key = lookup(API_KEY_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| env_file.get(API_KEY_VAR).cloned())
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingApiKey)?;

    Ok(AppConfig {
        api_key,
        model: or_default("BRANDFIT_MODEL", "gemini-2.5-flash"),
        fetch_timeout_secs: parse_u64("BRANDFIT_FETCH_TIMEOUT_SECS", "20")?,
        max_body_chars: parse_usize("BRANDFIT_MAX_BODY_CHARS", "14000")?,
        dedupe: DedupeParams {
            iou_threshold: parse_f64("BRANDFIT_DEDUPE_IOU", "0.55")?,
            center_dist_threshold: parse_f64("BRANDFIT_DEDUPE_CENTER_DIST", "0.12")?,
        },
    })
}

/// Parse `KEY=value` lines from a `.env`-style file body.
///
/// Blank lines and `#` comments are ignored; single or double quotes
/// around values are stripped. Lines without `=` are skipped.
#[must_use]
pub fn parse_env_file(contents: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();
    for line in contents.lines() {
        let s = line.trim();
        if s.is_empty() || s.starts_with('#') {
            continue;
        }
        let Some((key, value)) = s.split_once('=') else {
            continue;
        };
        let value = value
            .trim()
            .trim_matches('"')
            .trim_matches('\'')
            .to_string();
        out.insert(key.trim().to_string(), value);
    }
    out
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

//! JSON loading for the environment configuration and parameter overrides.
//! Missing fields fall back to their defaults.

use std::path::Path;

use anyhow::{Context, Result};
use foraging::{EnvConfig, Params};

/// # Errors
///
/// Fails if the file cannot be read or is not a valid configuration.
pub fn load_config(path: &Path) -> Result<EnvConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// # Errors
///
/// Fails if the file cannot be read, is not a valid parameter set, or holds
/// an override the environment would reject.
pub fn load_params(path: &Path) -> Result<Params> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading params {}", path.display()))?;
    let params: Params = serde_json::from_str(&text)
        .with_context(|| format!("parsing params {}", path.display()))?;
    params
        .validate()
        .with_context(|| format!("invalid params in {}", path.display()))?;
    Ok(params)
}

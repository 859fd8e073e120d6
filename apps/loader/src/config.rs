use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use lookup_client::{parse_endpoint, LookupError, SourceConfig, STAND_IN_DELAY};
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_CONFIG_FILE: &str = "loader.toml";
pub const DEFAULT_LOOKUP_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxHdCz8ypy_aBeYztPDif1VJ2flyla_zMtWxvvrNSwCuWGD6oxuYaaBEB6TAEByVEvMMw/exec";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub lookup_endpoint: String,
    pub stand_in_mode: bool,
    pub stand_in_delay_ms: u64,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lookup_endpoint: DEFAULT_LOOKUP_ENDPOINT.into(),
            stand_in_mode: false,
            stand_in_delay_ms: STAND_IN_DELAY.as_millis() as u64,
            request_timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn source_config(&self) -> Result<SourceConfig, LookupError> {
        Ok(SourceConfig {
            endpoint: parse_endpoint(&self.lookup_endpoint)?,
            stand_in: self.stand_in_mode,
            stand_in_delay: Duration::from_millis(self.stand_in_delay_ms),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        })
    }
}

/// Defaults, then the TOML file, then `APP__*` environment overrides.
///
/// Without an explicit path a missing `loader.toml` is fine; an explicit path
/// must exist and parse.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = match path {
        Some(path) => read_settings_file(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                read_settings_file(&default_path)?
            } else {
                Settings::default()
            }
        }
    };

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config file '{}'", path.display()))
}

fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("APP__LOOKUP_ENDPOINT") {
        settings.lookup_endpoint = v;
    }

    if let Some(v) = var("APP__STAND_IN_MODE") {
        match parse_flag(&v) {
            Some(flag) => settings.stand_in_mode = flag,
            None => warn!(value = %v, "ignoring unrecognised APP__STAND_IN_MODE"),
        }
    }

    if let Some(v) = var("APP__STAND_IN_DELAY_MS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.stand_in_delay_ms = parsed,
            Err(_) => warn!(value = %v, "ignoring non-numeric APP__STAND_IN_DELAY_MS"),
        }
    }

    if let Some(v) = var("APP__REQUEST_TIMEOUT_SECS") {
        match v.parse::<u64>() {
            Ok(0) => settings.request_timeout_secs = None,
            Ok(parsed) => settings.request_timeout_secs = Some(parsed),
            Err(_) => warn!(value = %v, "ignoring non-numeric APP__REQUEST_TIMEOUT_SECS"),
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

use std::path::Path;

use serde::Deserialize;

use crate::error::EnvelopeError;

/// Environment variable that overrides [`ResponderConfig::debug`].
pub const DEBUG_ENV_VAR: &str = "RESPONDER_DEBUG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResponderConfig {
    /// Expose handler error text in response bodies.
    pub debug: bool,
}

impl ResponderConfig {
    /// Loads the config from a TOML file, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EnvelopeError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        tracing::info!(?config, "Loaded responder config from {}", path.display());
        Ok(config)
    }

    /// Applies `RESPONDER_DEBUG` from the process environment, if set.
    pub fn with_env_override(self) -> Self {
        let raw = std::env::var(DEBUG_ENV_VAR).ok();
        self.with_debug_override(raw.as_deref())
    }

    pub fn with_debug_override(mut self, raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return self;
        };
        match parse_flag(raw) {
            Some(debug) => self.debug = debug,
            None => tracing::warn!(value = raw, "Ignoring unrecognised {DEBUG_ENV_VAR} value"),
        }
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

use std::path::Path;

use envelope::ResponderConfig;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub port: u16,
    pub responder: ResponderConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            responder: ResponderConfig::default(),
        }
    }
}

impl ServiceConfig {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if !Path::new(path).exists() {
            tracing::info!("Config file not found at {path}, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        tracing::info!(?config, "Loaded notes config from {path}");
        Ok(config)
    }

    /// Applies `SERVER_PORT` and `RESPONDER_DEBUG` from the environment.
    pub fn with_env_overrides(self) -> Self {
        let port = std::env::var("SERVER_PORT").ok();
        let mut config = self.with_port_override(port.as_deref());
        config.responder = config.responder.with_env_override();
        config
    }

    pub fn with_port_override(mut self, raw: Option<&str>) -> Self {
        if let Some(raw) = raw {
            match raw.trim().parse() {
                Ok(port) => self.port = port,
                Err(e) => tracing::warn!(value = raw, "Ignoring invalid SERVER_PORT: {e}"),
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file() {
        let config = ServiceConfig::load("/nowhere/notes.toml").unwrap();
        assert_eq!(config.port, 8080);
        assert!(!config.responder.debug);
    }

    #[test]
    fn parses_nested_responder_table() {
        let config: ServiceConfig = toml::from_str("port = 9000\n[responder]\ndebug = true\n").unwrap();
        assert_eq!(config.port, 9000);
        assert!(config.responder.debug);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let config: ServiceConfig = toml::from_str("[responder]\ndebug = true\n").unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.responder.debug);
    }

    #[test]
    fn port_override_wins_over_file_value() {
        let config: ServiceConfig = toml::from_str("port = 9000\n").unwrap();
        let config = config.with_port_override(Some(" 3000 "));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn env_overrides_reach_the_responder_table() {
        let config = ServiceConfig::default().with_env_overrides();
        assert_eq!(
            config.responder,
            ResponderConfig::default().with_env_override()
        );
    }

    #[test]
    fn invalid_port_override_is_ignored() {
        let config = ServiceConfig::default().with_port_override(Some("eighty"));
        assert_eq!(config.port, 8080);

        let config = ServiceConfig::default().with_port_override(None);
        assert_eq!(config.port, 8080);
    }
}

//! Listener settings read from the environment.

use common::error::PortalError;

pub const HOST_KEY: &str = "PORTAL_HOST";
pub const PORT_KEY: &str = "PORTAL_PORT";
pub const OPEN_BROWSER_KEY: &str = "PORTAL_OPEN_BROWSER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8090,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, PortalError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PortalError> {
        let mut config = Self::default();
        if let Some(host) = lookup(HOST_KEY).filter(|host| !host.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup(PORT_KEY) {
            config.port = port.trim().parse().map_err(|_| PortalError::InvalidConfig {
                key: PORT_KEY,
                value: port.clone(),
            })?;
        }
        if let Some(flag) = lookup(OPEN_BROWSER_KEY) {
            config.open_browser = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(PortalError::InvalidConfig {
                        key: OPEN_BROWSER_KEY,
                        value: flag,
                    })
                }
            };
        }
        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from(pairs: &[(&str, &str)]) -> Result<ServerConfig, PortalError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|key: &str| env.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = from(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8090");
    }

    #[test]
    fn reads_overrides() {
        let config = from(&[(HOST_KEY, "0.0.0.0"), (PORT_KEY, "9000"), (OPEN_BROWSER_KEY, "no")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
    }

    #[test]
    fn rejects_bad_port() {
        let err = from(&[(PORT_KEY, "eighty")]).unwrap_err();
        assert!(matches!(err, PortalError::InvalidConfig { key: PORT_KEY, .. }));
    }
}

use lantern_network::prelude::*;

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error on {1}: {0}")]
    IoError(std::io::Error, PathBuf),
    #[error("Parse error in {1}: {0}")]
    ParseError(json5::Error, PathBuf),
    #[error("Invalid server name: {0}")]
    InvalidServerName(#[from] InvalidServerNameError),
    #[error("No operator password configured")]
    NoOperPassword,
}

fn default_server_name() -> String {
    "lantern.local".to_string()
}

/// Server settings, as read from a json5 configuration file. Every field is
/// optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_server_name")]
    pub server_name: String,
    /// Addresses to accept client connections on
    #[serde(default)]
    pub listen: Vec<SocketAddr>,
    /// A text file whose lines make up the message of the day
    #[serde(default)]
    pub motd: Option<PathBuf>,
    #[serde(default)]
    pub oper_password: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_name: default_server_name(),
            listen: Vec::new(),
            motd: None,
            oper_password: None,
        }
    }
}

impl ServerConfig {
    pub fn load_file<P: AsRef<Path>>(filename: P) -> Result<Self, ConfigError> {
        let filename = filename.as_ref();
        let config = std::fs::read_to_string(filename).map_err(|e| ConfigError::IoError(e, filename.to_owned()))?;
        json5::from_str(&config).map_err(|e| ConfigError::ParseError(e, filename.to_owned()))
    }

    /// The configured server name, checked for validity
    pub fn server_name(&self) -> Result<ServerName, ConfigError> {
        Ok(ServerName::from_str(&self.server_name)?)
    }

    /// Read the message of the day, if one is configured. A file that can't
    /// be read is treated as absent.
    pub fn load_motd(&self) -> Option<Vec<String>> {
        let path = self.motd.as_ref()?;
        match std::fs::read_to_string(path) {
            Ok(text) => Some(text.lines().map(ToString::to_string).collect()),
            Err(e) => {
                tracing::warn!(path = %path.display(), "Couldn't read MOTD file: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config: ServerConfig = json5::from_str("{}").unwrap();
        assert_eq!(config.server_name, "lantern.local");
        assert!(config.listen.is_empty());
        assert!(config.oper_password.is_none());
        assert_eq!(config.server_name().unwrap().to_string(), "lantern.local");
    }

    #[test]
    fn full_config() {
        let config: ServerConfig = json5::from_str(r#"{
            // comments are allowed
            server_name: "irc.example.org",
            listen: [ "127.0.0.1:6667", "[::1]:6667" ],
            motd: "/etc/lantern/motd.txt",
            oper_password: "secret",
        }"#).unwrap();

        assert_eq!(config.server_name, "irc.example.org");
        assert_eq!(config.listen.len(), 2);
        assert_eq!(config.listen[0], "127.0.0.1:6667".parse().unwrap());
        assert_eq!(config.motd, Some(PathBuf::from("/etc/lantern/motd.txt")));
        assert_eq!(config.oper_password.as_deref(), Some("secret"));
    }

    #[test]
    fn bad_server_name() {
        let config: ServerConfig = json5::from_str(r#"{ server_name: "not a name" }"#).unwrap();
        assert!(matches!(config.server_name(), Err(ConfigError::InvalidServerName(_))));
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(json5::from_str::<ServerConfig>(r#"{ colour: "blue" }"#).is_err());
    }

    #[test]
    fn missing_motd_file() {
        let config = ServerConfig {
            motd: Some(PathBuf::from("/nonexistent/lantern/motd")),
            ..Default::default()
        };
        assert!(config.load_motd().is_none());
    }
}

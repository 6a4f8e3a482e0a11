//! Server configuration from environment variables.
//!
//! - `FOILFLOW_HOST`: listen address (default: "0.0.0.0")
//! - `FOILFLOW_PORT`: listen port (default: "3000")
//! - `FOILFLOW_CONTENT`: path to an alternate corpus JSON file (default: the
//!   built-in corpus)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FOILFLOW_PORT must be a port number, got '{0}'")]
    InvalidPort(String),

    #[error("FOILFLOW_CONTENT is set but empty")]
    EmptyContentPath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Alternate corpus file. `None` uses the built-in corpus.
    pub content: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            content: None,
        }
    }
}

impl ServerConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("FOILFLOW_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("FOILFLOW_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let content = match lookup("FOILFLOW_CONTENT") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyContentPath),
            Some(raw) => Some(PathBuf::from(raw)),
            None => None,
        };
        Ok(ServerConfig {
            host,
            port,
            content,
        })
    }

    /// `host:port` for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

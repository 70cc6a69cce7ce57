use std::env;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_API_HOST: &str = "0.0.0.0";
const DEFAULT_API_PORT: u16 = 8000;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // API settings
    pub api_host: String,
    pub api_port: u16,

    // Logging
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first if present.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Every setting has a default, so this never fails. Values that do not
    /// parse fall back to their default; the bind address is validated later
    /// by [`Config::bind_address`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            // API settings
            api_host: lookup("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            api_port: lookup("API_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_API_PORT),

            // Logging
            log_format: LogFormat::from_str(
                &lookup("LOG_FORMAT").unwrap_or_else(|| "text".to_string()),
            ),
        }
    }

    /// Socket address the server should listen on.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBindAddress` if `api_host` is not an IP literal.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .api_host
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(self.api_host.clone()))?;
        Ok(SocketAddr::new(ip, self.api_port))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid bind host: {0}")]
    InvalidBindAddress(String),
}

//! Daemon settings.
//!
//! Read from `faultline.toml` (or the file named by `FAULTLINE_CONFIG`), then
//! overridden from the environment. A missing file means defaults.

use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

const DEFAULT_CONFIG_PATH: &str = "faultline.toml";
const DEFAULT_FILTER: &str = "faultlined=info,faultline=info,tower_http=debug";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

/// Where the error-reporting HTTP surface listens.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directives, `RUST_LOG` syntax.
    pub filter: String,
}

impl Config {
    /// Read the config file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed, when the port is zero or
    /// when the log filter has an invalid directive.
    pub fn load() -> Result<Self, ConfigError> {
        let env = |key: &str| std::env::var(key).ok();
        let path = env("FAULTLINE_CONFIG").unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let mut config = Self::from_file(&path)?;
        config.apply_overrides(env);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("FAULTLINE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("FAULTLINE_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some((host, port)) = lookup("FAULTLINE_BIND").as_deref().and_then(split_bind) {
            self.server.host = host;
            if let Some(port) = port {
                self.server.port = port;
            }
        }
        // RUST_LOG wins so the usual tracing convention keeps working.
        if let Some(filter) = lookup("RUST_LOG").or_else(|| lookup("FAULTLINE_LOG")) {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.logging.env_filter()?;
        Ok(())
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl LoggingConfig {
    /// Build the subscriber filter from the configured directives.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Filter`] for an unparsable directive.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        Ok(EnvFilter::try_new(&self.filter)?)
    }
}

/// Split `host:port`; an unparsable port keeps the host and drops the port.
fn split_bind(bind: &str) -> Option<(String, Option<u16>)> {
    let (host, port) = bind.rsplit_once(':')?;
    Some((host.to_string(), port.parse().ok()))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid log filter")]
    Filter(#[from] ParseError),
    #[error("invalid configuration: {0}")]
    Validation(String),
}

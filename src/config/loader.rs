//! Configuration loading from disk and from the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::{ClientConfig, Environment};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the public key.
pub const ENV_PUBLIC_KEY: &str = "GENGO_PUBLIC_KEY";
/// Environment variable holding the private key.
pub const ENV_PRIVATE_KEY: &str = "GENGO_PRIVATE_KEY";
/// Any non-empty value selects the production deployment.
pub const ENV_PRODUCTION: &str = "GENGO_PRODUCTION";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    MissingEnv(&'static str),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "invalid config file: {}", e),
            ConfigError::MissingEnv(var) => write!(f, "{} is not set", var),
            ConfigError::Validation(errors) => {
                let joined: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "invalid configuration: {}", joined.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ClientConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

impl ClientConfig {
    /// Build a validated configuration from `GENGO_PUBLIC_KEY`,
    /// `GENGO_PRIVATE_KEY` and `GENGO_PRODUCTION`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let public_key = non_empty(ENV_PUBLIC_KEY).ok_or(ConfigError::MissingEnv(ENV_PUBLIC_KEY))?;
        let private_key =
            non_empty(ENV_PRIVATE_KEY).ok_or(ConfigError::MissingEnv(ENV_PRIVATE_KEY))?;
        let environment = if non_empty(ENV_PRODUCTION).is_some() {
            Environment::Production
        } else {
            Environment::Sandbox
        };

        let config = ClientConfig::new(public_key, private_key).with_environment(environment);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

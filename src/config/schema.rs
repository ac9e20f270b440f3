//! Client configuration types.
//!
//! Everything except the key pair has a default, so a config file only
//! needs a `[credentials]` table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gengo sandbox API base URL.
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.gengo.com/v2";

/// Gengo production API base URL.
pub const PRODUCTION_BASE_URL: &str = "https://api.gengo.com/v2";

/// Root configuration for a [`crate::GengoClient`].
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API key pair.
    pub credentials: Credentials,

    /// Which Gengo deployment to talk to.
    pub environment: Environment,

    /// Overrides the environment's base URL (mock servers, proxies).
    pub base_url: Option<String>,

    /// Timeouts handed to the HTTP transport.
    pub timeouts: TimeoutConfig,

    /// User-Agent header sent with every request.
    pub user_agent: String,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

impl ClientConfig {
    /// Sandbox configuration for the given key pair.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(public_key, private_key),
            ..Self::default()
        }
    }

    /// Select the production or sandbox deployment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Point the client at a custom base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The base URL requests are resolved against.
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }
}

/// Public/private key pair issued by Gengo.
#[derive(Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Credentials {
    /// Public key, sent as `api_key`.
    pub public_key: String,

    /// Private key, used only to compute `api_sig`.
    pub private_key: String,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Gengo deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Sandbox: free test credits, no real translators.
    #[default]
    Sandbox,
    /// Production: real orders, real money.
    Production,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

/// Timeout configuration for the HTTP transport.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout in seconds.
    pub connect_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            request_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Record request counters and latency histograms.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            environment: Environment::default(),
            base_url: None,
            timeouts: TimeoutConfig::default(),
            user_agent: format!("gengo-client-rs/{}", env!("CARGO_PKG_VERSION")),
            observability: ObservabilityConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.resolved_base_url(), SANDBOX_BASE_URL);
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.user_agent.starts_with("gengo-client-rs/"));
    }

    #[test]
    fn test_base_url_override() {
        let config = ClientConfig::new("pub", "priv")
            .with_environment(Environment::Production)
            .with_base_url("http://127.0.0.1:9000/v2");
        assert_eq!(config.resolved_base_url(), "http://127.0.0.1:9000/v2");

        let config = ClientConfig::new("pub", "priv").with_environment(Environment::Production);
        assert_eq!(config.resolved_base_url(), PRODUCTION_BASE_URL);
    }

    #[test]
    fn test_private_key_redacted() {
        let creds = Credentials::new("pub", "super-secret");
        let shown = format!("{:?}", creds);
        assert!(shown.contains("pub"));
        assert!(!shown.contains("super-secret"));
    }
}

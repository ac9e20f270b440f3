//! Semantic checks on a [`ClientConfig`].
//!
//! Serde has already rejected malformed input by the time this runs; here we
//! only check that the values make sense together: a key pair is present,
//! the base URL is an http(s) URL, and timeouts are non-zero. Every problem
//! is reported, so a bad config file can be fixed in one pass.

use std::fmt;

use crate::config::schema::ClientConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.credentials.public_key.trim().is_empty() {
        errors.push(ValidationError::new("credentials.public_key", "must not be empty"));
    }
    if config.credentials.private_key.is_empty() {
        errors.push(ValidationError::new("credentials.private_key", "must not be empty"));
    }

    match url::Url::parse(config.resolved_base_url()) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::new(
            "base_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new("base_url", format!("invalid URL: {}", e))),
    }

    if config.timeouts.connect_secs == 0 {
        errors.push(ValidationError::new("timeouts.connect_secs", "must be greater than 0"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = ClientConfig::new("pub", "priv");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ClientConfig::default().with_base_url("not a url");
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "credentials.public_key",
                "credentials.private_key",
                "base_url",
                "timeouts.request_secs"
            ]
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let config = ClientConfig::new("pub", "priv").with_base_url("ftp://api.gengo.com/v2");
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("ftp"));
    }
}

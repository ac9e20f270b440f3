//! Client configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML) ──→ loader.rs (parse & deserialize) ─┐
//! environment vars   ──→ loader.rs (GENGO_* lookup)      ─┼→ validation.rs
//! ClientConfig::new  ─────────────────────────────────────┘      │
//!                                                                 ▼
//!                                     ClientConfig (validated, read-only)
//!                                         → owned by GengoClient
//! ```
//!
//! # Design Decisions
//! - Credentials are an explicit value handed to the client; reading the
//!   environment is one constructor among several
//! - All fields except the key pair have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, ENV_PRIVATE_KEY, ENV_PRODUCTION, ENV_PUBLIC_KEY};
pub use schema::{
    ClientConfig, Credentials, Environment, ObservabilityConfig, TimeoutConfig,
    PRODUCTION_BASE_URL, SANDBOX_BASE_URL,
};
pub use validation::{validate_config, ValidationError};

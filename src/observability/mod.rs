//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! GengoClient::execute
//!     → tracing span `gengo_request` (request id, method, path)
//!     → metrics.rs (request counter, latency histogram)
//!
//! Consumers:
//!     → logging.rs installs a subscriber (CLI, demos)
//!     → any `metrics` recorder the application installs
//! ```
//!
//! # Design Decisions
//! - The library emits events; it never installs a global subscriber or
//!   recorder on its own
//! - Secrets, signatures and request bodies are never logged

pub mod logging;
pub mod metrics;

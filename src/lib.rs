//! Client library for the Gengo translation API.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller
//!     │  typed request (api::*)
//!     ▼
//!   ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐
//!   │ GengoClient  │──▶│ http::request│──▶│ http::Transport  │──▶ Gengo API
//!   │ (client.rs)  │   │ + sign       │   │ (reqwest)        │
//!   └──────┬───────┘   └──────────────┘   └────────┬─────────┘
//!          │                                       │ raw body
//!          ▼                                       ▼
//!   typed response ◀── scalar codec ◀── http::response (envelope)
//! ```
//!
//! Cross-cutting: `config` (keys, environment, timeouts), `observability`
//! (tracing spans, request metrics), `error` (one variant per failure stage).

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod lang;
pub mod observability;
pub mod scalar;
pub mod sign;

pub use client::GengoClient;
pub use config::ClientConfig;
pub use error::{GengoError, Result, TransportError};
pub use lang::{LanguageCode, LanguagePair};
pub use scalar::{Bool, Float64, Int, Time};

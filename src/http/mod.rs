//! Authenticated transport envelope.
//!
//! # Data Flow
//! ```text
//! typed request value (crate::api)
//!     → request.rs (shape: query | form | multipart, inject api_key/ts/api_sig)
//!     → transport.rs (Transport trait; reqwest implementation sends it)
//!     → response.rs (decode {opstat, response, err} envelope)
//!     → crate::client decodes the payload into the caller's type
//! ```
//!
//! # Per-request states
//! ```text
//! Building → Signed → Sent → Decoded-Success
//!                          → Decoded-Error      (GengoError::Api)
//!                          → TransportFailure   (GengoError::Transport / Envelope)
//! ```
//!
//! # Design Decisions
//! - One attempt per call: no retries, no backoff
//! - A fresh timestamp and signature per request; nothing is cached
//! - The envelope, not the HTTP status, decides success

pub mod request;
pub mod response;
pub mod transport;

pub use request::{
    unix_now, ApiRequest, MultipartPart, RequestBody, RequestSigner, FIELD_API_KEY, FIELD_API_SIG,
    FIELD_DATA, FIELD_TS,
};
pub use response::{decode_payload, Envelope, ErrorBody, OPSTAT_ERROR, OPSTAT_OK};
pub use transport::{RawResponse, ReqwestTransport, Transport};

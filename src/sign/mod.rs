//! Request signing.
//!
//! # Data Flow
//! ```text
//! ts (unix seconds, decimal text)
//!     → Signer::sign(ts) using the private key
//!     → api_sig (lowercase hex)
//!     → injected next to api_key and ts by crate::http::request
//! ```
//!
//! # Constraints
//! - Signing is a pure function of (data, key)
//! - No hash state is shared between calls; concurrent requests each
//!   compute their own digest
//! - Keys and signatures are never logged

mod hmac_sha1;

pub use hmac_sha1::HmacSigner;

/// Computes the `api_sig` value for a request.
///
/// Implementations must be pure and callable from many in-flight requests
/// at once. Swap in a fixed signer in tests to get deterministic requests.
pub trait Signer: Send + Sync {
    /// Sign `data` and return the signature as text.
    fn sign(&self, data: &str) -> String;
}

//! Request metrics.
//!
//! # Metrics
//! - `gengo_requests_total` (counter): calls by HTTP method and outcome
//! - `gengo_request_duration_seconds` (histogram): round-trip latency by method
//!
//! Outcomes: `ok`, `api_error`, `transport_error`, `envelope_error`.

use std::time::Duration;

/// How a call ended, for metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    ApiError,
    TransportError,
    EnvelopeError,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Ok => "ok",
            Outcome::ApiError => "api_error",
            Outcome::TransportError => "transport_error",
            Outcome::EnvelopeError => "envelope_error",
        }
    }
}

/// Record one finished call.
pub fn record_request(method: &str, outcome: Outcome, elapsed: Duration) {
    metrics::counter!(
        "gengo_requests_total",
        "method" => method.to_string(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
    metrics::histogram!("gengo_request_duration_seconds", "method" => method.to_string())
        .record(elapsed.as_secs_f64());
}

//! Response envelope handling.
//!
//! # Responsibilities
//! - Decode the `{opstat, response, err}` wrapper every endpoint returns
//! - Turn `opstat = "error"` into [`GengoError::Api`] without looking at
//!   the payload
//! - Hand the untyped payload to the caller's target type
//!
//! # Design Decisions
//! - `err` is decoded leniently: a code and message are extracted when
//!   present, otherwise the raw value becomes the message
//! - An absent or `null` payload is a successful call with no value

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{GengoError, Result};
use crate::scalar::Int;

/// Status tag of a successful call.
pub const OPSTAT_OK: &str = "ok";
/// Status tag of a failed call.
pub const OPSTAT_ERROR: &str = "error";

/// The outer wrapper of every Gengo response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Envelope {
    pub opstat: String,
    #[serde(default)]
    pub response: Option<Value>,
    #[serde(default)]
    pub err: Option<Value>,
}

/// Structured error carried in `err`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: Int,
    #[serde(default, rename = "msg")]
    pub message: String,
}

impl Envelope {
    /// Decode a raw response body.
    pub fn parse(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(GengoError::Envelope)
    }

    /// The error body, if `err` holds one.
    ///
    /// `code` and `msg` are read independently so a malformed message does
    /// not discard a usable code.
    pub fn error_body(&self) -> Option<ErrorBody> {
        let err = self.err.as_ref()?.as_object()?;
        let code = err
            .get("code")
            .and_then(|code| serde_json::from_value::<Int>(code.clone()).ok());
        let message = err.get("msg").and_then(Value::as_str).map(str::to_string);
        if code.is_none() && message.is_none() {
            return None;
        }
        Some(ErrorBody {
            code: code.unwrap_or_default(),
            message: message.unwrap_or_default(),
        })
    }

    /// Resolve to the payload, or to the API error the envelope reports.
    pub fn into_payload(self) -> Result<Option<Value>> {
        if self.opstat != OPSTAT_OK {
            return Err(self.into_api_error());
        }
        Ok(self.response.filter(|payload| !payload.is_null()))
    }

    fn into_api_error(self) -> GengoError {
        match self.error_body() {
            Some(body) if !body.message.is_empty() => GengoError::Api {
                code: body.code.value(),
                message: body.message,
            },
            Some(body) if body.code.value() != 0 => GengoError::Api {
                code: body.code.value(),
                message: format!("request failed with opstat '{}'", self.opstat),
            },
            _ => GengoError::Api {
                code: 0,
                message: match self.err {
                    Some(raw) if !raw.is_null() => raw.to_string(),
                    _ => format!("request failed with opstat '{}'", self.opstat),
                },
            },
        }
    }
}

/// Decode a success payload into `T`.
pub fn decode_payload<T: DeserializeOwned>(payload: Value) -> Result<T> {
    serde_json::from_value(payload).map_err(GengoError::Payload)
}

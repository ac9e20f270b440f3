//! Request shapes and authentication.
//!
//! # Responsibilities
//! - Model the three body shapes the API accepts (none, form, multipart)
//! - Stamp every request with `api_key`, `ts` and `api_sig`
//! - Carry JSON payloads as a single `data` field
//!
//! # Design Decisions
//! - Auth fields go wherever the parameters go: the query string for
//!   GET/DELETE, the form body for POST/PUT, ordinary parts for multipart
//! - A multipart body is a closed list of parts by the time it leaves this
//!   module; the transport never sees a half-written form

use reqwest::Method;
use std::fmt;
use std::sync::Arc;

use crate::scalar::Time;
use crate::sign::Signer;

/// Public key field.
pub const FIELD_API_KEY: &str = "api_key";
/// Unix-seconds timestamp field.
pub const FIELD_TS: &str = "ts";
/// Signature field: `hex(HMAC-SHA1(private_key, ts))`.
pub const FIELD_API_SIG: &str = "api_sig";
/// JSON payload field for form and multipart bodies.
pub const FIELD_DATA: &str = "data";

const RESERVED_FIELDS: [&str; 3] = [FIELD_API_KEY, FIELD_TS, FIELD_API_SIG];

/// Current time in whole seconds since the Unix epoch.
pub fn unix_now() -> u64 {
    u64::try_from(Time::now().unix()).unwrap_or_default()
}

/// A signed request, ready for a [`crate::http::Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    /// First value of a named field in the query, form or text parts.
    pub fn field(&self, name: &str) -> Option<&str> {
        if let Some(v) = find_pair(&self.query, name) {
            return Some(v);
        }
        match &self.body {
            RequestBody::Empty => None,
            RequestBody::Form(fields) => find_pair(fields, name),
            RequestBody::Multipart(parts) => parts.iter().find_map(|part| match part {
                MultipartPart::Text { name: n, value } if n == name => Some(value.as_str()),
                _ => None,
            }),
        }
    }
}

/// Request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    /// `application/x-www-form-urlencoded` fields, in order.
    Form(Vec<(String, String)>),
    /// `multipart/form-data` parts, in order.
    Multipart(Vec<MultipartPart>),
}

/// One part of a multipart body.
#[derive(Clone, PartialEq)]
pub enum MultipartPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        bytes: Vec<u8>,
    },
}

impl MultipartPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        MultipartPart::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn file(name: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        MultipartPart::File {
            name: name.into(),
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MultipartPart::Text { name, .. } | MultipartPart::File { name, .. } => name,
        }
    }
}

impl fmt::Debug for MultipartPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MultipartPart::Text { name, value } => f
                .debug_struct("Text")
                .field("name", name)
                .field("value", value)
                .finish(),
            MultipartPart::File {
                name,
                file_name,
                bytes,
            } => f
                .debug_struct("File")
                .field("name", name)
                .field("file_name", file_name)
                .field("len", &bytes.len())
                .finish(),
        }
    }
}

/// Builds signed requests for one public key.
///
/// Each `build_*` call reads the clock and signs afresh; the `*_at`
/// variants take the timestamp explicitly.
#[derive(Clone)]
pub struct RequestSigner {
    public_key: String,
    signer: Arc<dyn Signer>,
}

impl RequestSigner {
    pub fn new(public_key: impl Into<String>, signer: Arc<dyn Signer>) -> Self {
        Self {
            public_key: public_key.into(),
            signer,
        }
    }

    /// The three authentication fields for timestamp `ts`.
    pub fn auth_fields(&self, ts: u64) -> Vec<(String, String)> {
        let ts = ts.to_string();
        let sig = self.signer.sign(&ts);
        vec![
            (FIELD_API_KEY.to_string(), self.public_key.clone()),
            (FIELD_TS.to_string(), ts),
            (FIELD_API_SIG.to_string(), sig),
        ]
    }

    /// GET/DELETE with auth and `params` in the query string.
    pub fn build_query(&self, method: Method, path: &str, params: Vec<(String, String)>) -> ApiRequest {
        self.build_query_at(unix_now(), method, path, params)
    }

    pub fn build_query_at(
        &self,
        ts: u64,
        method: Method,
        path: &str,
        params: Vec<(String, String)>,
    ) -> ApiRequest {
        let mut query = self.auth_fields(ts);
        query.extend(without_reserved(params));
        ApiRequest {
            method,
            path: path.to_string(),
            query,
            body: RequestBody::Empty,
        }
    }

    /// POST/PUT with auth in a form body; `data` carries the raw JSON text.
    pub fn build_form(&self, method: Method, path: &str, data: Option<String>) -> ApiRequest {
        self.build_form_at(unix_now(), method, path, data)
    }

    pub fn build_form_at(&self, ts: u64, method: Method, path: &str, data: Option<String>) -> ApiRequest {
        let mut fields = self.auth_fields(ts);
        if let Some(data) = data {
            fields.push((FIELD_DATA.to_string(), data));
        }
        ApiRequest {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: RequestBody::Form(fields),
        }
    }

    /// POST multipart: auth parts, then `files`, then the `data` JSON part.
    pub fn build_multipart(
        &self,
        path: &str,
        files: Vec<MultipartPart>,
        data: Option<String>,
    ) -> ApiRequest {
        self.build_multipart_at(unix_now(), path, files, data)
    }

    pub fn build_multipart_at(
        &self,
        ts: u64,
        path: &str,
        files: Vec<MultipartPart>,
        data: Option<String>,
    ) -> ApiRequest {
        let mut parts: Vec<MultipartPart> = self
            .auth_fields(ts)
            .into_iter()
            .map(|(name, value)| MultipartPart::Text { name, value })
            .collect();
        parts.extend(files.into_iter().filter(|p| !RESERVED_FIELDS.contains(&p.name())));
        if let Some(data) = data {
            parts.push(MultipartPart::text(FIELD_DATA, data));
        }
        ApiRequest {
            method: Method::POST,
            path: path.to_string(),
            query: Vec::new(),
            body: RequestBody::Multipart(parts),
        }
    }
}

impl fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestSigner")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

fn find_pair<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

fn without_reserved(params: Vec<(String, String)>) -> impl Iterator<Item = (String, String)> {
    params.into_iter().filter(|(k, _)| {
        let reserved = RESERVED_FIELDS.contains(&k.as_str());
        if reserved {
            tracing::debug!(field = %k, "Dropping caller parameter that shadows an auth field");
        }
        !reserved
    })
}

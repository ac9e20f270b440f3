//! Pluggable HTTP transport.
//!
//! # Responsibilities
//! - Send one prepared [`ApiRequest`] and return the raw status and body
//! - Own connection pooling, TLS and timeouts (reqwest does the work)
//!
//! # Design Decisions
//! - The trait is the seam for tests: a fake transport sees exactly what
//!   would have gone on the wire
//! - No retries here or above; a failed send is reported once

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::request::{ApiRequest, MultipartPart, RequestBody};

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Sends prepared requests.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

/// [`Transport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
    base_url: String,
}

impl ReqwestTransport {
    /// Build a transport from the base URL, timeouts and User-Agent in `config`.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .build()?;
        Ok(Self::with_client(http, config.resolved_base_url()))
    }

    /// Use an existing client (shared pools, custom TLS, proxies).
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

fn into_form(parts: Vec<MultipartPart>) -> Form {
    parts.into_iter().fold(Form::new(), |form, part| match part {
        MultipartPart::Text { name, value } => form.text(name, value),
        MultipartPart::File {
            name,
            file_name,
            bytes,
        } => form.part(name, Part::bytes(bytes).file_name(file_name)),
    })
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let url = self.url(&request.path);
        let mut builder = self
            .http
            .request(request.method, &url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Multipart(parts) => builder.multipart(into_form(parts)),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base: &str) -> ReqwestTransport {
        ReqwestTransport::with_client(Client::new(), base)
    }

    #[test]
    fn test_url_joining() {
        assert_eq!(
            transport("https://api.gengo.com/v2").url("/account/me"),
            "https://api.gengo.com/v2/account/me"
        );
        assert_eq!(
            transport("http://127.0.0.1:9000/v2/").url("translate/jobs"),
            "http://127.0.0.1:9000/v2/translate/jobs"
        );
    }

    #[test]
    fn test_from_config() {
        let config = ClientConfig::new("pub", "priv").with_base_url("http://127.0.0.1:1/v2");
        let transport = ReqwestTransport::new(&config).unwrap();
        assert_eq!(transport.base_url, "http://127.0.0.1:1/v2");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Port 1 is never listening on loopback in CI.
        let config = ClientConfig::new("pub", "priv").with_base_url("http://127.0.0.1:1/v2");
        let transport = ReqwestTransport::new(&config).unwrap();
        let request = ApiRequest {
            method: reqwest::Method::GET,
            path: "/account/me".into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        };
        let err = transport.execute(request).await.unwrap_err();
        assert!(matches!(err, TransportError::Http(_)));
    }
}

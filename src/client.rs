//! The Gengo API client.
//!
//! # Data Flow
//! ```text
//! api::* endpoint (typed request)
//!     → encode body as JSON text (form `data` field)
//!     → RequestSigner: api_key, ts, api_sig        [Building → Signed]
//!     → Transport::execute                         [Sent]
//!     → Envelope::parse → into_payload             [Decoded-Success | Decoded-Error]
//!     → decode_payload::<T>                        (scalar codec runs here)
//! ```
//!
//! # Design Decisions
//! - One attempt per call; failures surface as exactly one [`GengoError`]
//! - Credentials are read-only after construction, so the client is cheap
//!   to clone and share across tasks
//! - Each call gets its own span and request id for log correlation

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::{validate_config, ClientConfig, ConfigError};
use crate::error::{GengoError, Result};
use crate::http::{decode_payload, ApiRequest, Envelope, MultipartPart, RequestSigner, ReqwestTransport, Transport};
use crate::observability::metrics::{record_request, Outcome};
use crate::sign::{HmacSigner, Signer};

/// Client for the Gengo translation API.
#[derive(Clone)]
pub struct GengoClient {
    config: Arc<ClientConfig>,
    signer: RequestSigner,
    transport: Arc<dyn Transport>,
}

impl GengoClient {
    /// Build a client that signs with HMAC-SHA1 and sends through reqwest.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Build a client from `GENGO_PUBLIC_KEY`, `GENGO_PRIVATE_KEY` and
    /// `GENGO_PRODUCTION`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Use a custom transport with the standard signer.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let signer = Arc::new(HmacSigner::new(&config.credentials.private_key));
        Self::with_parts(config, signer, transport)
    }

    /// Use a custom signer and transport.
    pub fn with_parts(
        config: ClientConfig,
        signer: Arc<dyn Signer>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        validate_config(&config).map_err(ConfigError::Validation)?;
        let signer = RequestSigner::new(config.credentials.public_key.clone(), signer);

        tracing::debug!(
            base_url = %config.resolved_base_url(),
            environment = ?config.environment,
            "Gengo client initialized"
        );

        Ok(Self {
            config: Arc::new(config),
            signer,
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a signed request and resolve the envelope.
    ///
    /// Returns `Ok(None)` for a successful call without payload.
    pub async fn execute(&self, request: ApiRequest) -> Result<Option<Value>> {
        let span = tracing::debug_span!(
            "gengo_request",
            request_id = %Uuid::new_v4(),
            method = %request.method,
            path = %request.path,
        );
        self.dispatch(request).instrument(span).await
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<Option<Value>> {
        let method = request.method.to_string();
        let start = Instant::now();
        tracing::debug!("Sending request");

        let result = match self.transport.execute(request).await {
            Ok(raw) => {
                tracing::debug!(status = raw.status, bytes = raw.body.len(), "Response received");
                Envelope::parse(&raw.body).and_then(Envelope::into_payload)
            }
            Err(e) => Err(GengoError::Transport(e)),
        };

        let outcome = match &result {
            Ok(_) => Outcome::Ok,
            Err(GengoError::Api { code, message }) => {
                tracing::warn!(code, message = %message, "Gengo API returned an error");
                Outcome::ApiError
            }
            Err(GengoError::Transport(e)) => {
                tracing::error!(error = %e, "Request failed");
                Outcome::TransportError
            }
            Err(e) => {
                tracing::error!(error = %e, "Malformed response");
                Outcome::EnvelopeError
            }
        };
        if self.config.observability.metrics_enabled {
            record_request(&method, outcome, start.elapsed());
        }

        result
    }

    /// Send a request whose success payload decodes into `T`.
    ///
    /// A success envelope without a payload yields `T::default()`.
    pub async fn send<T: DeserializeOwned + Default>(&self, request: ApiRequest) -> Result<T> {
        match self.execute(request).await? {
            Some(payload) => decode_payload(payload),
            None => Ok(T::default()),
        }
    }

    /// Send a request and discard any success payload.
    pub async fn send_unit(&self, request: ApiRequest) -> Result<()> {
        self.execute(request).await.map(|_| ())
    }

    pub(crate) async fn get<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<T> {
        let request = self.signer.build_query(reqwest::Method::GET, path, params);
        self.send(request).await
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<()> {
        let request = self.signer.build_query(reqwest::Method::DELETE, path, Vec::new());
        self.send_unit(request).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let request = self.signer.build_form(reqwest::Method::POST, path, Some(encode(body)?));
        self.send(request).await
    }

    pub(crate) async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let request = self.signer.build_form(reqwest::Method::POST, path, Some(encode(body)?));
        self.send_unit(request).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let request = self.signer.build_form(reqwest::Method::PUT, path, Some(encode(body)?));
        self.send(request).await
    }

    pub(crate) async fn put_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let request = self.signer.build_form(reqwest::Method::PUT, path, Some(encode(body)?));
        self.send_unit(request).await
    }

    pub(crate) async fn multipart<T, B>(
        &self,
        path: &str,
        files: Vec<MultipartPart>,
        data: &B,
    ) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let request = self.signer.build_multipart(path, files, Some(encode(data)?));
        self.send(request).await
    }
}

impl fmt::Debug for GengoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GengoClient")
            .field("base_url", &self.config.resolved_base_url())
            .field("signer", &self.signer)
            .finish_non_exhaustive()
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String> {
    serde_json::to_string(body).map_err(GengoError::Encode)
}

/// In-memory transport for unit tests.
#[cfg(test)]
pub(crate) mod fake {
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::TransportError;
    use crate::http::RawResponse;

    /// Records every request and answers with one canned body.
    pub(crate) struct FakeTransport {
        body: Vec<u8>,
        seen: Mutex<Vec<ApiRequest>>,
    }

    impl FakeTransport {
        pub(crate) fn raw(body: &str) -> Arc<Self> {
            Arc::new(Self {
                body: body.as_bytes().to_vec(),
                seen: Mutex::new(Vec::new()),
            })
        }

        /// Answer with `{"opstat":"ok","response":<payload>}`.
        pub(crate) fn ok(payload: Value) -> Arc<Self> {
            Self::raw(&serde_json::json!({"opstat": "ok", "response": payload}).to_string())
        }

        pub(crate) fn requests(&self) -> Vec<ApiRequest> {
            self.seen.lock().unwrap().clone()
        }

        pub(crate) fn last(&self) -> ApiRequest {
            self.requests().pop().expect("no request was sent")
        }

        /// The `data` field of the last request, parsed as JSON.
        pub(crate) fn last_data(&self) -> Value {
            let request = self.last();
            let data = request.field(crate::http::FIELD_DATA).expect("no data field");
            serde_json::from_str(data).unwrap()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn execute(&self, request: ApiRequest) -> std::result::Result<RawResponse, TransportError> {
            self.seen.lock().unwrap().push(request);
            Ok(RawResponse {
                status: 200,
                body: self.body.clone(),
            })
        }
    }

    pub(crate) fn client(transport: Arc<FakeTransport>) -> GengoClient {
        GengoClient::with_transport(ClientConfig::new("public", "private"), transport).unwrap()
    }
}

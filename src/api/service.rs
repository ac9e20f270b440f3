//! Service endpoints: supported languages, pair pricing and quotes.
//!
//! # Data Flow
//! ```text
//! quote_file(QuoteFileRequest)
//!     → read each file (tokio::fs)
//!     → assign file_key = file_<index>
//!     → multipart: auth parts, file_<index> parts, data (JSON with keys)
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::api::jobs::{FileJobRequest, JobRequest};
use crate::api::Tier;
use crate::client::GengoClient;
use crate::error::Result;
use crate::http::MultipartPart;
use crate::lang::{LanguageCode, LanguagePair};
use crate::scalar::{Float64, Int};

const NAMESPACE: &str = "/translate/service";

/// A language Gengo translates from or to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    /// `word` or `character`.
    pub unit_type: String,
    #[serde(rename = "lc")]
    pub code: LanguageCode,
    pub localized_name: String,
    #[serde(rename = "language")]
    pub name: String,
}

/// Unit price of one language pair at one tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguagePairPrice {
    #[serde(flatten)]
    pub pair: LanguagePair,
    #[serde(default)]
    pub tier: Tier,
    #[serde(default)]
    pub currency: String,
    pub unit_price: Float64,
}

/// Filters for [`GengoClient::language_pairs`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguagePairsQuery {
    pub source: Option<LanguageCode>,
}

impl LanguagePairsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only pairs translating from `source`.
    pub fn with_source(mut self, source: LanguageCode) -> Self {
        self.source = Some(source);
        self
    }

    fn params(&self) -> Vec<(String, String)> {
        self.source
            .iter()
            .map(|code| ("lc_src".to_string(), code.to_string()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteTextRequest {
    pub jobs: Vec<JobRequest>,
}

impl QuoteTextRequest {
    pub fn new(jobs: Vec<JobRequest>) -> Self {
        Self { jobs }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteTextResponse {
    #[serde(default)]
    pub jobs: Vec<TextQuote>,
}

/// Price and estimate for one job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextQuote {
    #[serde(rename = "type", default)]
    pub job_type: String,
    #[serde(default)]
    pub credits: Float64,
    /// Estimated seconds to completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<Int>,
    #[serde(default)]
    pub unit_count: Int,
    #[serde(rename = "lc_src_detected", default, skip_serializing_if = "Option::is_none")]
    pub detected_source: Option<LanguageCode>,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteFileRequest {
    pub jobs: Vec<FileJobRequest>,
}

impl QuoteFileRequest {
    pub fn new(jobs: Vec<FileJobRequest>) -> Self {
        Self { jobs }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteFileResponse {
    #[serde(default)]
    pub jobs: Vec<FileQuote>,
}

/// Quote for an uploaded file, or the reason it could not be quoted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileQuote {
    #[serde(flatten)]
    pub quote: TextQuote,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(rename = "err", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FileQuoteError>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileQuoteError {
    #[serde(rename = "filename", default)]
    pub file_name: String,
    #[serde(default)]
    pub code: Int,
    #[serde(default)]
    pub key: String,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl GengoClient {
    pub async fn languages(&self) -> Result<Vec<Language>> {
        self.get(&format!("{NAMESPACE}/languages"), Vec::new()).await
    }

    pub async fn language_pairs(&self, query: &LanguagePairsQuery) -> Result<Vec<LanguagePairPrice>> {
        self.get(&format!("{NAMESPACE}/language_pairs"), query.params())
            .await
    }

    pub async fn quote_text(&self, request: &QuoteTextRequest) -> Result<QuoteTextResponse> {
        self.post(&format!("{NAMESPACE}/quote"), request).await
    }

    /// Upload files for quoting.
    ///
    /// Fails with [`crate::GengoError::Io`] before anything is sent if a
    /// file cannot be read.
    pub async fn quote_file(&self, mut request: QuoteFileRequest) -> Result<QuoteFileResponse> {
        let mut files = Vec::with_capacity(request.jobs.len());
        for (index, job) in request.jobs.iter_mut().enumerate() {
            let key = format!("file_{index}");
            let bytes = tokio::fs::read(&job.path).await?;
            tracing::debug!(file_key = %key, bytes = bytes.len(), "Attaching file for quote");
            files.push(MultipartPart::file(key.clone(), file_name(&job.path), bytes));
            job.file_key = Some(key);
        }
        self.multipart(&format!("{NAMESPACE}/quote/file"), files, &request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::{client, FakeTransport};
    use crate::error::GengoError;
    use crate::http::RequestBody;
    use reqwest::Method;
    use serde_json::json;
    use std::io::Write;

    #[tokio::test]
    async fn test_languages() {
        let transport = FakeTransport::ok(json!([
            {"unit_type": "word", "lc": "en", "localized_name": "English", "language": "English"},
            {"unit_type": "character", "lc": "ja", "localized_name": "日本語", "language": "Japanese"}
        ]));
        let languages = client(transport.clone()).languages().await.unwrap();
        assert_eq!(languages[1].code, LanguageCode::JAPANESE);
        assert_eq!(languages[1].unit_type, "character");
        assert_eq!(transport.last().path, "/translate/service/languages");
    }

    #[tokio::test]
    async fn test_language_pairs_filter() {
        let transport = FakeTransport::ok(json!([
            {"lc_src": "de", "lc_tgt": "en", "tier": "standard", "currency": "USD", "unit_price": "0.0500"}
        ]));
        let query = LanguagePairsQuery::new().with_source(LanguageCode::GERMAN);
        let pairs = client(transport.clone()).language_pairs(&query).await.unwrap();
        assert_eq!(pairs[0].pair.source, LanguageCode::GERMAN);
        assert_eq!(pairs[0].unit_price, Float64(0.05));
        assert_eq!(transport.last().field("lc_src"), Some("de"));

        let transport = FakeTransport::ok(json!([]));
        client(transport.clone())
            .language_pairs(&LanguagePairsQuery::new())
            .await
            .unwrap();
        assert_eq!(transport.last().field("lc_src"), None);
    }

    #[tokio::test]
    async fn test_quote_text() {
        let transport = FakeTransport::ok(json!({"jobs": [
            {"type": "text", "credits": 0.05, "eta": 25184, "unit_count": "1", "lc_src_detected": "en", "currency": "USD"}
        ]}));
        let pair = LanguagePair::new(LanguageCode::ENGLISH, LanguageCode::JAPANESE);
        let request = QuoteTextRequest::new(vec![JobRequest::text("Hello", pair, Tier::STANDARD)]);
        let quote = client(transport.clone()).quote_text(&request).await.unwrap();
        assert_eq!(quote.jobs[0].credits.to_string(), "0.05");
        assert_eq!(quote.jobs[0].detected_source, Some(LanguageCode::ENGLISH));

        assert_eq!(transport.last().path, "/translate/service/quote");
        assert_eq!(transport.last_data()["jobs"][0]["body_src"], "Hello");
    }

    #[tokio::test]
    async fn test_quote_file_multipart() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Hello from a file").unwrap();

        let transport = FakeTransport::ok(json!({"jobs": [
            {"type": "file", "credits": "0.10", "unit_count": 4, "identifier": "abc123", "currency": "USD"}
        ]}));
        let pair = LanguagePair::new(LanguageCode::ENGLISH, LanguageCode::FRENCH);
        let request = QuoteFileRequest::new(vec![FileJobRequest::new(
            file.path(),
            JobRequest::file(pair, Tier::PRO),
        )]);
        let quote = client(transport.clone()).quote_file(request).await.unwrap();
        assert_eq!(quote.jobs[0].identifier.as_deref(), Some("abc123"));
        assert_eq!(quote.jobs[0].quote.unit_count, Int(4));

        let sent = transport.last();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.path, "/translate/service/quote/file");
        match &sent.body {
            RequestBody::Multipart(parts) => {
                let names: Vec<_> = parts.iter().map(|p| p.name()).collect();
                assert_eq!(names, vec!["api_key", "ts", "api_sig", "file_0", "data"]);
                match &parts[3] {
                    MultipartPart::File { bytes, .. } => assert_eq!(bytes, b"Hello from a file"),
                    other => panic!("expected file part, got {other:?}"),
                }
            }
            other => panic!("expected multipart body, got {other:?}"),
        }
        let data = transport.last_data();
        assert_eq!(data["jobs"][0]["file_key"], "file_0");
        assert_eq!(data["jobs"][0]["type"], "file");
        assert!(data["jobs"][0].get("path").is_none());
    }

    #[tokio::test]
    async fn test_quote_file_missing_file() {
        let transport = FakeTransport::ok(json!({"jobs": []}));
        let pair = LanguagePair::new(LanguageCode::ENGLISH, LanguageCode::FRENCH);
        let request = QuoteFileRequest::new(vec![FileJobRequest::new(
            "/definitely/not/here.txt",
            JobRequest::file(pair, Tier::STANDARD),
        )]);
        let err = client(transport.clone()).quote_file(request).await.unwrap_err();
        assert!(matches!(err, GengoError::Io(_)));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_file_quote_error() {
        let quote: FileQuote = serde_json::from_value(json!({
            "type": "file",
            "err": {"filename": "broken.docx", "code": "1802", "key": "file_0"}
        }))
        .unwrap();
        let error = quote.error.unwrap();
        assert_eq!(error.code, Int(1802));
        assert_eq!(error.key, "file_0");
    }
}

//! Resource endpoints.
//!
//! # Data Flow
//! ```text
//! typed request (builders in this module tree)
//!     → GengoClient::{get, post, put, delete_unit, multipart}
//!     → signed request → envelope → typed response
//! ```
//!
//! # Layout
//! - account.rs: stats, profile, balance, preferred translators
//! - jobs.rs: job requests and the `/translate/jobs` collection
//! - job.rs: single job revisions, feedback, comments
//! - order.rs: orders and their comment threads
//! - glossary.rs: glossaries
//! - service.rs: languages, pairs, quotes
//!
//! Response fields that the API has been seen to send as strings or numbers
//! use the [`crate::scalar`] wrappers; fields that are not always present
//! are `Option` or default when missing.

pub mod account;
pub mod glossary;
pub mod job;
pub mod jobs;
pub mod order;
pub mod service;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::scalar::Time;

pub use account::{AccountStats, Balance, Me, PreferredTranslator, PreferredTranslatorGroup};
pub use glossary::{Glossary, GlossaryLanguage};
pub use job::{Feedback, Revision, RevisionBody, RevisionList};
pub use jobs::{
    ApproveJob, FileJobRequest, Job, JobList, JobRequest, JobsQuery, PostJobsRequest,
    PostJobsResponse, PostedJob, RejectJob, RejectJobsResponse, RejectedJob, RejectionReason,
    ReviseJob,
};
pub use order::Order;
pub use service::{
    FileQuote, FileQuoteError, Language, LanguagePairPrice, LanguagePairsQuery, QuoteFileRequest,
    QuoteFileResponse, QuoteTextRequest, QuoteTextResponse, TextQuote,
};

/// Service level of a job. Passed through to the API untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tier(Cow<'static, str>);

impl Tier {
    pub const STANDARD: Tier = Tier(Cow::Borrowed("standard"));
    pub const PRO: Tier = Tier(Cow::Borrowed("pro"));
    pub const ULTRA: Tier = Tier(Cow::Borrowed("ultra"));

    pub fn new(tier: impl Into<String>) -> Self {
        Self(Cow::Owned(tier.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a job carries inline text or an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Text,
    File,
}

/// Lifecycle state of a job as reported by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Available,
    Pending,
    Reviewable,
    Approved,
    Revising,
    Rejected,
    Canceled,
    Hold,
    /// A status this client does not know yet.
    #[default]
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Available => "available",
            JobStatus::Pending => "pending",
            JobStatus::Reviewable => "reviewable",
            JobStatus::Approved => "approved",
            JobStatus::Revising => "revising",
            JobStatus::Rejected => "rejected",
            JobStatus::Canceled => "canceled",
            JobStatus::Hold => "hold",
            JobStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference material attached to a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub url: String,
    #[serde(rename = "filename")]
    pub file_name: String,
    pub mime_type: String,
}

impl Attachment {
    pub fn new(
        url: impl Into<String>,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            file_name: file_name.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// One message in a job or order comment thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctime: Option<Time>,
}

/// A comment thread, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentThread {
    #[serde(default)]
    pub thread: Vec<Comment>,
}

/// Body of the add-comment endpoints.
#[derive(Serialize)]
pub(crate) struct NewComment<'a> {
    pub body: &'a str,
}

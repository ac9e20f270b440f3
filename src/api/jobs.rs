//! Job requests and the `/translate/jobs` collection.
//!
//! # Responsibilities
//! - Build text and file job requests with optional settings
//! - Submit, list, fetch and bulk-update jobs
//!
//! # Design Decisions
//! - Optional settings are `Option` fields with `with_*` setters and are
//!   left out of the JSON when unset
//! - Jobs echoed back by a post are sometimes wrapped in an extra array;
//!   [`PostedJob`] absorbs that for this one response and nowhere else

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::api::{Attachment, JobStatus, JobType, Tier};
use crate::client::GengoClient;
use crate::error::Result;
use crate::lang::LanguagePair;
use crate::scalar::{Bool, Float64, Int, Time};

const NAMESPACE: &str = "/translate/jobs";

const ACTION_REVISE: &str = "revise";
const ACTION_ARCHIVE: &str = "archive";
const ACTION_APPROVE: &str = "approve";
const ACTION_REJECT: &str = "reject";

/// A job to quote or submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRequest {
    #[serde(rename = "type")]
    pub job_type: JobType,
    #[serde(flatten)]
    pub pair: LanguagePair,
    pub tier: Tier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<Bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_preferred: Option<Bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_approve: Option<Bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_group: Option<Bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glossary_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chars: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl JobRequest {
    /// A job translating `body` inline.
    pub fn text(body: impl Into<String>, pair: LanguagePair, tier: Tier) -> Self {
        Self {
            body_src: Some(body.into()),
            ..Self::blank(JobType::Text, pair, tier)
        }
    }

    /// A job whose source is an uploaded file; see [`FileJobRequest`].
    pub fn file(pair: LanguagePair, tier: Tier) -> Self {
        Self::blank(JobType::File, pair, tier)
    }

    fn blank(job_type: JobType, pair: LanguagePair, tier: Tier) -> Self {
        Self {
            job_type,
            pair,
            tier,
            body_src: None,
            slug: None,
            attachments: Vec::new(),
            force: None,
            comment: None,
            use_preferred: None,
            callback_url: None,
            auto_approve: None,
            custom_data: None,
            purpose: None,
            as_group: None,
            glossary_id: None,
            max_chars: None,
            position: None,
            identifier: None,
        }
    }

    /// Short title shown to translators.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Submit even if an identical job was ordered before.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = Some(Bool(force));
        self
    }

    /// Instructions for the translator.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_preferred(mut self, use_preferred: bool) -> Self {
        self.use_preferred = Some(Bool(use_preferred));
        self
    }

    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    pub fn with_auto_approve(mut self, auto_approve: bool) -> Self {
        self.auto_approve = Some(Bool(auto_approve));
        self
    }

    /// Opaque data echoed back with the job.
    pub fn with_custom_data(mut self, data: impl Into<String>) -> Self {
        self.custom_data = Some(data.into());
        self
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Keep all jobs of the order with one translator.
    pub fn with_as_group(mut self, as_group: bool) -> Self {
        self.as_group = Some(Bool(as_group));
        self
    }

    pub fn with_glossary_id(mut self, id: i64) -> Self {
        self.glossary_id = Some(id);
        self
    }

    pub fn with_max_chars(mut self, max_chars: u32) -> Self {
        self.max_chars = Some(max_chars);
        self
    }

    /// Ordering of the job within a grouped order.
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}

/// A file job: the job settings plus the local file to upload.
///
/// `file_key` is assigned when the request is sent; the file itself goes
/// in a multipart part of the same name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileJobRequest {
    #[serde(flatten)]
    pub job: JobRequest,
    #[serde(skip)]
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_key: Option<String>,
}

impl FileJobRequest {
    pub fn new(path: impl Into<PathBuf>, job: JobRequest) -> Self {
        Self {
            job,
            path: path.into(),
            file_key: None,
        }
    }
}

/// Body of a job submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostJobsRequest {
    pub jobs: Vec<JobRequest>,
    /// Comment attached to the whole order.
    #[serde(rename = "comment", skip_serializing_if = "Option::is_none")]
    pub group_comment: Option<String>,
}

impl PostJobsRequest {
    pub fn new(jobs: Vec<JobRequest>) -> Self {
        Self {
            jobs,
            group_comment: None,
        }
    }

    pub fn with_group_comment(mut self, comment: impl Into<String>) -> Self {
        self.group_comment = Some(comment.into());
        self
    }
}

/// Result of a job submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostJobsResponse {
    pub order_id: Int,
    pub job_count: Int,
    pub credits_used: Float64,
    #[serde(default)]
    pub currency: String,
    /// Jobs that duplicated earlier orders.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<PostedJob>,
}

/// A job as reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "job_id")]
    pub id: Int,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Int>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_tgt: Option<String>,
    #[serde(flatten)]
    pub pair: LanguagePair,
    #[serde(default)]
    pub tier: Tier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_count: Option<Int>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<Float64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captcha_url: Option<String>,
    /// Estimated seconds to completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta: Option<Int>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_approve: Option<Bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctime: Option<Time>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
    /// Machine translation.
    #[serde(rename = "mt", default, skip_serializing_if = "Option::is_none")]
    pub machine_translation: Option<Bool>,
    #[serde(rename = "file_url_src", default, skip_serializing_if = "Option::is_none")]
    pub file_source_url: Option<String>,
    #[serde(rename = "file_url_tgt", default, skip_serializing_if = "Option::is_none")]
    pub file_target_url: Option<String>,
}

/// A job echoed back by [`GengoClient::post_jobs`].
///
/// Accepts the job either as an object or wrapped in a one-element array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PostedJob(pub Job);

#[derive(Deserialize)]
#[serde(untagged)]
enum PostedJobRepr {
    Nested(Vec<Job>),
    Flat(Job),
}

impl<'de> Deserialize<'de> for PostedJob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match PostedJobRepr::deserialize(deserializer)? {
            PostedJobRepr::Flat(job) => Ok(PostedJob(job)),
            PostedJobRepr::Nested(jobs) => {
                let count = jobs.len();
                let mut jobs = jobs.into_iter();
                match (jobs.next(), count) {
                    (Some(job), 1) => Ok(PostedJob(job)),
                    _ => Err(de::Error::invalid_length(count, &"an array with one job")),
                }
            }
        }
    }
}

/// `{"jobs": [...]}` wrapper used by several endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobList {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// Filters for [`GengoClient::get_jobs`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobsQuery {
    pub status: Option<JobStatus>,
    pub timestamp_after: Option<Time>,
    pub count: Option<u32>,
}

impl JobsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Only jobs created after `ts`.
    pub fn with_timestamp_after(mut self, ts: Time) -> Self {
        self.timestamp_after = Some(ts);
        self
    }

    /// Maximum number of jobs to return.
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.to_string()));
        }
        if let Some(ts) = self.timestamp_after {
            params.push(("timestamp_after".to_string(), ts.unix().to_string()));
        }
        if let Some(count) = self.count {
            params.push(("count".to_string(), count.to_string()));
        }
        params
    }
}

/// Send a reviewable job back to the translator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviseJob {
    pub job_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ReviseJob {
    pub fn new(job_id: i64) -> Self {
        Self {
            job_id,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Accept a reviewable job, optionally with feedback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproveJob {
    pub job_id: i64,
    /// 1 to 5.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(rename = "for_translator", skip_serializing_if = "Option::is_none")]
    pub translator_comment: Option<String>,
    #[serde(rename = "for_mygengo", skip_serializing_if = "Option::is_none")]
    pub gengo_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<Bool>,
}

impl ApproveJob {
    pub fn new(job_id: i64) -> Self {
        Self {
            job_id,
            rating: None,
            translator_comment: None,
            gengo_comment: None,
            public: None,
        }
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_translator_comment(mut self, comment: impl Into<String>) -> Self {
        self.translator_comment = Some(comment.into());
        self
    }

    pub fn with_gengo_comment(mut self, comment: impl Into<String>) -> Self {
        self.gengo_comment = Some(comment.into());
        self
    }

    /// Allow Gengo to publish the feedback.
    pub fn with_public(mut self, public: bool) -> Self {
        self.public = Some(Bool(public));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RejectionReason {
    Quality,
    Incomplete,
    Other,
}

/// Reject a reviewable job. Requires the captcha shown for the job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectJob {
    pub job_id: i64,
    pub reason: RejectionReason,
    pub comment: String,
    pub captcha: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captcha_url: Option<String>,
    /// `requeue` or `cancel`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
}

impl RejectJob {
    pub fn new(
        job_id: i64,
        reason: RejectionReason,
        comment: impl Into<String>,
        captcha: impl Into<String>,
    ) -> Self {
        Self {
            job_id,
            reason,
            comment: comment.into(),
            captcha: captcha.into(),
            captcha_url: None,
            follow_up: None,
        }
    }

    pub fn with_captcha_url(mut self, url: impl Into<String>) -> Self {
        self.captcha_url = Some(url.into());
        self
    }

    pub fn with_follow_up(mut self, follow_up: impl Into<String>) -> Self {
        self.follow_up = Some(follow_up.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RejectedJob {
    #[serde(rename = "job_id")]
    pub id: Int,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Int>,
    #[serde(rename = "worker_id", default, skip_serializing_if = "Option::is_none")]
    pub translator_id: Option<Int>,
    #[serde(rename = "rejection_comments", default)]
    pub comment: String,
    #[serde(rename = "rejection_reason", default)]
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RejectJobsResponse {
    #[serde(default)]
    pub jobs: Vec<RejectedJob>,
}

#[derive(Serialize)]
struct JobsAction<'a, T> {
    action: &'static str,
    job_ids: &'a [T],
}

impl GengoClient {
    /// Submit jobs as one order.
    pub async fn post_jobs(&self, request: &PostJobsRequest) -> Result<PostJobsResponse> {
        self.post(NAMESPACE, request).await
    }

    /// List recent jobs.
    pub async fn get_jobs(&self, query: &JobsQuery) -> Result<Vec<Job>> {
        self.get(NAMESPACE, query.params()).await
    }

    /// Fetch several jobs in one call. No ids means no request.
    pub async fn get_jobs_by_id(&self, ids: &[i64]) -> Result<JobList> {
        if ids.is_empty() {
            return Ok(JobList::default());
        }
        let ids: Vec<String> = ids.iter().map(i64::to_string).collect();
        self.get(&format!("{NAMESPACE}/{}", ids.join(",")), Vec::new())
            .await
    }

    pub async fn revise_jobs(&self, jobs: &[ReviseJob]) -> Result<()> {
        self.put_unit(NAMESPACE, &JobsAction { action: ACTION_REVISE, job_ids: jobs })
            .await
    }

    pub async fn archive_jobs(&self, ids: &[i64]) -> Result<()> {
        self.put_unit(NAMESPACE, &JobsAction { action: ACTION_ARCHIVE, job_ids: ids })
            .await
    }

    pub async fn approve_jobs(&self, jobs: &[ApproveJob]) -> Result<()> {
        self.put_unit(NAMESPACE, &JobsAction { action: ACTION_APPROVE, job_ids: jobs })
            .await
    }

    pub async fn reject_jobs(&self, jobs: &[RejectJob]) -> Result<RejectJobsResponse> {
        self.put(NAMESPACE, &JobsAction { action: ACTION_REJECT, job_ids: jobs })
            .await
    }
}

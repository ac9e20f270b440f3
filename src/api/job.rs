//! Single-job endpoints under `/translate/job/{id}`.

use serde::{Deserialize, Serialize};

use crate::api::jobs::Job;
use crate::api::{CommentThread, NewComment};
use crate::client::GengoClient;
use crate::error::Result;
use crate::scalar::{Float64, Int, Time};

const NAMESPACE: &str = "/translate/job";

#[derive(Default, Deserialize)]
struct JobEnvelope {
    job: Job,
}

/// Revision history of a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevisionList {
    pub job_id: Int,
    #[serde(default)]
    pub revisions: Vec<Revision>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    #[serde(rename = "rev_id")]
    pub id: Int,
    pub ctime: Time,
}

/// Translated text as of one revision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevisionBody {
    #[serde(rename = "body_tgt", default)]
    pub body: String,
    pub ctime: Time,
}

#[derive(Default, Deserialize)]
struct RevisionEnvelope {
    revision: RevisionBody,
}

/// Feedback left when the job was approved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "for_translator", default)]
    pub comment: String,
    /// Sent as text such as `"4.0"`.
    #[serde(default)]
    pub rating: Float64,
}

#[derive(Default, Deserialize)]
struct FeedbackEnvelope {
    feedback: Feedback,
}

impl GengoClient {
    pub async fn get_job(&self, id: i64) -> Result<Job> {
        let envelope: JobEnvelope = self.get(&format!("{NAMESPACE}/{id}"), Vec::new()).await?;
        Ok(envelope.job)
    }

    /// Cancel a job that no translator has started.
    pub async fn cancel_job(&self, id: i64) -> Result<()> {
        self.delete_unit(&format!("{NAMESPACE}/{id}")).await
    }

    pub async fn job_revisions(&self, id: i64) -> Result<RevisionList> {
        self.get(&format!("{NAMESPACE}/{id}/revisions"), Vec::new())
            .await
    }

    pub async fn job_revision(&self, id: i64, revision_id: i64) -> Result<RevisionBody> {
        let envelope: RevisionEnvelope = self
            .get(&format!("{NAMESPACE}/{id}/revisions/{revision_id}"), Vec::new())
            .await?;
        Ok(envelope.revision)
    }

    pub async fn job_feedback(&self, id: i64) -> Result<Feedback> {
        let envelope: FeedbackEnvelope = self
            .get(&format!("{NAMESPACE}/{id}/feedback"), Vec::new())
            .await?;
        Ok(envelope.feedback)
    }

    pub async fn job_comments(&self, id: i64) -> Result<CommentThread> {
        self.get(&format!("{NAMESPACE}/{id}/comments"), Vec::new())
            .await
    }

    /// Post a message to the job's comment thread.
    pub async fn add_job_comment(&self, id: i64, body: &str) -> Result<()> {
        self.post_unit(&format!("{NAMESPACE}/{id}/comment"), &NewComment { body })
            .await
    }
}

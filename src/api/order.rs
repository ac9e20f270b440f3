//! Order endpoints under `/translate/order/{id}`.

use serde::{Deserialize, Serialize};

use crate::api::{CommentThread, NewComment};
use crate::client::GengoClient;
use crate::error::Result;
use crate::scalar::{Float64, Int};

const NAMESPACE: &str = "/translate/order";

/// Jobs submitted together, grouped by state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub order_id: Int,
    pub jobs_queued: Int,
    pub jobs_available: Vec<Int>,
    pub jobs_pending: Vec<Int>,
    pub jobs_reviewable: Vec<Int>,
    pub jobs_approved: Vec<Int>,
    pub jobs_revising: Vec<Int>,
    #[serde(rename = "total_credits")]
    pub credits: Float64,
    #[serde(rename = "total_units")]
    pub units: Int,
    #[serde(rename = "total_jobs")]
    pub job_count: Int,
    pub currency: String,
}

#[derive(Default, Deserialize)]
struct OrderEnvelope {
    order: Order,
}

impl GengoClient {
    pub async fn get_order(&self, id: i64) -> Result<Order> {
        let envelope: OrderEnvelope = self.get(&format!("{NAMESPACE}/{id}"), Vec::new()).await?;
        Ok(envelope.order)
    }

    /// Cancel every job in an order. Only works while all of them are
    /// still available.
    pub async fn cancel_order(&self, id: i64) -> Result<()> {
        self.delete_unit(&format!("{NAMESPACE}/{id}")).await
    }

    pub async fn order_comments(&self, id: i64) -> Result<CommentThread> {
        self.get(&format!("{NAMESPACE}/{id}/comments"), Vec::new())
            .await
    }

    pub async fn add_order_comment(&self, id: i64, body: &str) -> Result<()> {
        self.post_unit(&format!("{NAMESPACE}/{id}/comment"), &NewComment { body })
            .await
    }
}

//! Account endpoints.

use serde::{Deserialize, Serialize};

use crate::api::Tier;
use crate::client::GengoClient;
use crate::error::Result;
use crate::lang::LanguagePair;
use crate::scalar::{Float64, Int, Time};

const NAMESPACE: &str = "/account";

/// Spending summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountStats {
    pub credits_spent: Float64,
    /// Credits held by jobs still in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing: Option<Float64>,
    pub user_since: Time,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub billing_type: String,
    #[serde(default)]
    pub customer_type: String,
}

/// Profile of the authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Me {
    pub email: String,
    pub full_name: String,
    pub display_name: String,
    pub language_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub credits: Float64,
    #[serde(default)]
    pub currency: String,
}

/// Preferred translators for one language pair and tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferredTranslatorGroup {
    #[serde(flatten)]
    pub pair: LanguagePair,
    #[serde(default)]
    pub tier: Tier,
    #[serde(default)]
    pub translators: Vec<PreferredTranslator>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferredTranslator {
    pub id: Int,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<Time>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_jobs: Option<Int>,
}

impl GengoClient {
    /// Credits spent and account metadata.
    pub async fn account_stats(&self) -> Result<AccountStats> {
        self.get(&format!("{NAMESPACE}/stats"), Vec::new()).await
    }

    /// Email and names of the authenticated user.
    pub async fn me(&self) -> Result<Me> {
        self.get(&format!("{NAMESPACE}/me"), Vec::new()).await
    }

    /// Remaining credits.
    pub async fn balance(&self) -> Result<Balance> {
        self.get(&format!("{NAMESPACE}/balance"), Vec::new()).await
    }

    pub async fn preferred_translators(&self) -> Result<Vec<PreferredTranslatorGroup>> {
        self.get(&format!("{NAMESPACE}/preferred_translators"), Vec::new())
            .await
    }
}

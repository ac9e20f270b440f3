//! Glossary endpoints.

use serde::{Deserialize, Serialize};

use crate::client::GengoClient;
use crate::error::Result;
use crate::lang::LanguageCode;
use crate::scalar::{Bool, Int, Time};

const NAMESPACE: &str = "/translate/glossary";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glossary {
    pub id: Int,
    #[serde(rename = "customer_user_id")]
    pub user_id: Int,
    #[serde(rename = "source_language_id")]
    pub source_id: Int,
    #[serde(rename = "source_language_code")]
    pub source_code: LanguageCode,
    #[serde(rename = "target_languages")]
    pub targets: Vec<GlossaryLanguage>,
    #[serde(rename = "is_public")]
    pub public: Bool,
    pub unit_count: Int,
    pub ctime: Time,
    pub title: String,
    pub status: Int,
}

/// A target language of a glossary.
///
/// The API sends these as `[id, code]`; an object keyed `"0"` and `"1"`
/// is accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GlossaryLanguageRepr", into = "(Int, LanguageCode)")]
pub struct GlossaryLanguage {
    pub id: Int,
    pub code: LanguageCode,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GlossaryLanguageRepr {
    Pair(Int, LanguageCode),
    Keyed {
        #[serde(rename = "0")]
        id: Int,
        #[serde(rename = "1")]
        code: LanguageCode,
    },
}

impl From<GlossaryLanguageRepr> for GlossaryLanguage {
    fn from(repr: GlossaryLanguageRepr) -> Self {
        match repr {
            GlossaryLanguageRepr::Pair(id, code) | GlossaryLanguageRepr::Keyed { id, code } => {
                Self { id, code }
            }
        }
    }
}

impl From<GlossaryLanguage> for (Int, LanguageCode) {
    fn from(lang: GlossaryLanguage) -> Self {
        (lang.id, lang.code)
    }
}

impl GengoClient {
    /// Glossaries owned by the authenticated user.
    pub async fn list_glossaries(&self) -> Result<Vec<Glossary>> {
        self.get(NAMESPACE, Vec::new()).await
    }

    pub async fn get_glossary(&self, id: i64) -> Result<Glossary> {
        self.get(&format!("{NAMESPACE}/{id}"), Vec::new()).await
    }
}

//! Language codes and language pairs.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A Gengo language code such as `en`, `ja` or `pt-br`.
///
/// Codes are passed through to the API as-is; the constants cover the
/// languages Gengo lists, but any code the API returns round-trips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(Cow<'static, str>);

impl LanguageCode {
    pub const ARABIC: LanguageCode = LanguageCode::from_static("ar");
    pub const BRAZILIAN_PORTUGUESE: LanguageCode = LanguageCode::from_static("pt-br");
    pub const BRITISH_ENGLISH: LanguageCode = LanguageCode::from_static("en-gb");
    pub const BULGARIAN: LanguageCode = LanguageCode::from_static("bg");
    pub const CZECH: LanguageCode = LanguageCode::from_static("cs");
    pub const DANISH: LanguageCode = LanguageCode::from_static("da");
    pub const DUTCH: LanguageCode = LanguageCode::from_static("nl");
    pub const ENGLISH: LanguageCode = LanguageCode::from_static("en");
    pub const EUROPEAN_PORTUGUESE: LanguageCode = LanguageCode::from_static("pt");
    pub const FINNISH: LanguageCode = LanguageCode::from_static("fi");
    pub const FRENCH: LanguageCode = LanguageCode::from_static("fr");
    pub const FRENCH_CANADIAN: LanguageCode = LanguageCode::from_static("fr-ca");
    pub const GERMAN: LanguageCode = LanguageCode::from_static("de");
    pub const GREEK: LanguageCode = LanguageCode::from_static("el");
    pub const HEBREW: LanguageCode = LanguageCode::from_static("he");
    pub const HUNGARIAN: LanguageCode = LanguageCode::from_static("hu");
    pub const INDONESIAN: LanguageCode = LanguageCode::from_static("id");
    pub const ITALIAN: LanguageCode = LanguageCode::from_static("it");
    pub const JAPANESE: LanguageCode = LanguageCode::from_static("ja");
    pub const KOREAN: LanguageCode = LanguageCode::from_static("ko");
    pub const LATIN_AMERICAN_SPANISH: LanguageCode = LanguageCode::from_static("es-la");
    pub const MALAY: LanguageCode = LanguageCode::from_static("ms");
    pub const NORWEGIAN: LanguageCode = LanguageCode::from_static("no");
    pub const POLISH: LanguageCode = LanguageCode::from_static("pl");
    pub const ROMANIAN: LanguageCode = LanguageCode::from_static("ro");
    pub const RUSSIAN: LanguageCode = LanguageCode::from_static("ru");
    pub const SERBIAN: LanguageCode = LanguageCode::from_static("sr");
    pub const SIMPLIFIED_CHINESE: LanguageCode = LanguageCode::from_static("zh");
    pub const SLOVAK: LanguageCode = LanguageCode::from_static("sk");
    pub const SPANISH: LanguageCode = LanguageCode::from_static("es");
    pub const SWEDISH: LanguageCode = LanguageCode::from_static("sv");
    pub const TAGALOG: LanguageCode = LanguageCode::from_static("tl");
    pub const THAI: LanguageCode = LanguageCode::from_static("th");
    pub const TRADITIONAL_CHINESE: LanguageCode = LanguageCode::from_static("zh-tw");
    pub const TURKISH: LanguageCode = LanguageCode::from_static("tr");
    pub const UKRAINIAN: LanguageCode = LanguageCode::from_static("uk");
    pub const VIETNAMESE: LanguageCode = LanguageCode::from_static("vi");

    pub const fn from_static(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    pub fn new(code: impl Into<String>) -> Self {
        Self(Cow::Owned(code.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Source and target language of a job.
///
/// Shared by requests and responses; embedded with `#[serde(flatten)]` so
/// the two codes sit next to the other fields on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguagePair {
    #[serde(rename = "lc_src")]
    pub source: LanguageCode,
    #[serde(rename = "lc_tgt")]
    pub target: LanguageCode,
}

impl LanguagePair {
    pub fn new(source: LanguageCode, target: LanguageCode) -> Self {
        Self { source, target }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

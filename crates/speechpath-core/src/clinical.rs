//! Clinical selectors shared by the catalog, the resolver and stored plans.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The one diagnosis whose templates are keyed by severity instead of age.
pub const APHASIA: &str = "aphasia";

pub const DEFAULT_LANGUAGE: &str = "en";

/// Aphasia severity. Only meaningful for the `aphasia` diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Severity {
    Mild,
    Moderate,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "mild" => Ok(Severity::Mild),
            "moderate" => Ok(Severity::Moderate),
            _ => Err(CoreError::InvalidSeverity(s.to_string())),
        }
    }
}

/// Trim and lowercase a diagnosis, severity or language code.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Language names patients are commonly recorded with, and their ISO 639-1 codes.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("english", "en"),
    ("spanish", "es"),
    ("hindi", "hi"),
    ("malayalam", "ml"),
    ("tamil", "ta"),
    ("telugu", "te"),
    ("kannada", "kn"),
    ("bengali", "bn"),
    ("marathi", "mr"),
    ("gujarati", "gu"),
    ("punjabi", "pa"),
    ("urdu", "ur"),
    ("arabic", "ar"),
    ("french", "fr"),
    ("german", "de"),
    ("italian", "it"),
    ("portuguese", "pt"),
    ("russian", "ru"),
    ("chinese", "zh"),
    ("mandarin", "zh"),
    ("japanese", "ja"),
    ("korean", "ko"),
];

/// Resolve a language name or code to a two-letter ISO 639-1 code.
///
/// Absent, blank and unrecognized values fall back to English.
pub fn normalize_language(raw: Option<&str>) -> String {
    let lang = raw.map(normalize_code).unwrap_or_default();
    if lang.is_empty() {
        return DEFAULT_LANGUAGE.to_string();
    }
    if let Some((_, code)) = LANGUAGE_NAMES.iter().find(|(name, _)| *name == lang) {
        return code.to_string();
    }
    if lang.len() == 2 && lang.chars().all(|c| c.is_ascii_lowercase()) {
        return lang;
    }
    tracing::debug!(language = %lang, "unrecognized language, using default");
    DEFAULT_LANGUAGE.to_string()
}

pub fn is_aphasia(diagnosis: &str) -> bool {
    normalize_code(diagnosis) == APHASIA
}

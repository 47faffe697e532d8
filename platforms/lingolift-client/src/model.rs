use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct AnalysisRequest<'a> {
    pub sentence: &'a str,
    /// ISO-639-1 code; the backend detects the language when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct InflectionRequest<'a> {
    pub word: &'a str,
}

/// Body of a 400 response.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error_message: serde_json::Value,
}

/// Part of speech as reported alongside inflections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartOfSpeechDescription {
    pub value: String,
    pub explanation: String,
}

/// One inflected form with its Universal Features, e.g. "gehst" with
/// `{"Person": "2", "Number": "Sing", "Tense": "Pres"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inflection {
    pub word: String,
    pub morphology: BTreeMap<String, String>,
}

/// Every inflection of a word. `gender` is only set for nouns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inflections {
    pub pos: PartOfSpeechDescription,
    #[serde(default)]
    pub gender: Option<String>,
    pub inflections: Vec<Inflection>,
}

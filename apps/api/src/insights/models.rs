use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The derived analysis for one document. Exactly one payload exists per
/// record, selected by the `type` tag on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Insight {
    AiSummary {
        summary: String,
    },
    WordFrequency {
        #[serde(rename = "topWords")]
        top_words: Vec<String>,
    },
}

impl Insight {
    pub fn type_str(&self) -> &'static str {
        match self {
            Insight::AiSummary { .. } => "ai_summary",
            Insight::WordFrequency { .. } => "word_frequency",
        }
    }
}

/// A persisted insight. Serialized as
/// `{id, filename, uploadDate, type, summary?, topWords?}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsightRecord {
    pub id: Uuid,
    pub filename: String,
    pub upload_date: DateTime<Utc>,
    #[serde(flatten)]
    pub insight: Insight,
}

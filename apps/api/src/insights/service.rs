//! Upload pipeline core: summarize (or fall back), build the record, persist it.

use tracing::{info, warn};
use uuid::Uuid;

use crate::insights::builder::build_record;
use crate::insights::models::InsightRecord;
use crate::insights::store::{InsightStore, StorageError};
use crate::insights::summarizer::Summarizer;

/// Produces and stores the insight for one document's extracted text.
///
/// Summarizer failures degrade to the word-frequency fallback. Only storage
/// errors are returned; the record is not considered saved when one occurs.
pub async fn analyze_document(
    store: &dyn InsightStore,
    summarizer: &dyn Summarizer,
    id: Uuid,
    filename: &str,
    extracted_text: &str,
) -> Result<InsightRecord, StorageError> {
    let ai_summary = match summarizer.summarize(extracted_text, filename).await {
        Ok(summary) => Some(summary),
        Err(e) => {
            warn!("AI summary unavailable for {filename}, using word frequency: {e}");
            None
        }
    };

    let record = build_record(id, filename, extracted_text, ai_summary.as_deref());
    store.append(record.clone()).await?;

    info!(
        "Created {} insight {} for {}",
        record.insight.type_str(),
        record.id,
        record.filename
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::insights::models::Insight;
    use crate::insights::store::{JsonFileStore, MemoryStore};
    use crate::insights::summarizer::{DisabledSummarizer, SummarizationUnavailable};

    struct CannedSummarizer(&'static str);

    #[async_trait]
    impl Summarizer for CannedSummarizer {
        async fn summarize(
            &self,
            _text: &str,
            _filename: &str,
        ) -> Result<String, SummarizationUnavailable> {
            Ok(self.0.to_string())
        }
    }

    struct FailingSummarizer;

    #[async_trait]
    impl Summarizer for FailingSummarizer {
        async fn summarize(
            &self,
            _text: &str,
            _filename: &str,
        ) -> Result<String, SummarizationUnavailable> {
            Err(SummarizationUnavailable::EmptyContent)
        }
    }

    const RESUME_TEXT: &str = "Experienced experienced software software engineer engineer \
                               with with strong strong skills skills";

    #[tokio::test]
    async fn test_unavailable_summary_stores_word_frequency() {
        let store = MemoryStore::new();
        let id = Uuid::new_v4();

        let record = analyze_document(&store, &FailingSummarizer, id, "cv.pdf", RESUME_TEXT)
            .await
            .unwrap();

        assert_eq!(
            record.insight,
            Insight::WordFrequency {
                top_words: ["experienced", "software", "engineer", "strong", "skills"]
                    .map(String::from)
                    .to_vec()
            }
        );
        assert_eq!(store.get_by_id(id).await, Some(record));
    }

    #[tokio::test]
    async fn test_available_summary_is_cleaned_and_stored() {
        let store = MemoryStore::new();
        let summarizer = CannedSummarizer("**PROFESSIONAL SUMMARY:**\n- Backend engineer");

        let record = analyze_document(&store, &summarizer, Uuid::new_v4(), "a.pdf", RESUME_TEXT)
            .await
            .unwrap();

        assert_eq!(
            record.insight,
            Insight::AiSummary {
                summary: "PROFESSIONAL SUMMARY:\nBackend engineer".to_string()
            }
        );
        assert_eq!(store.list_all().await, vec![record]);
    }

    #[tokio::test]
    async fn test_empty_text_still_produces_a_record() {
        let store = MemoryStore::new();
        let record = analyze_document(&store, &DisabledSummarizer, Uuid::new_v4(), "scan.pdf", "")
            .await
            .unwrap();
        assert_eq!(record.insight, Insight::WordFrequency { top_words: vec![] });
    }

    #[tokio::test]
    async fn test_storage_failure_is_propagated() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("data");
        std::fs::write(&blocker, b"").unwrap();
        let store = JsonFileStore::new(&blocker);

        let result =
            analyze_document(&store, &DisabledSummarizer, Uuid::new_v4(), "cv.pdf", RESUME_TEXT)
                .await;
        assert!(result.is_err());
    }
}

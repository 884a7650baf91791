//! Assembles an `InsightRecord` from either a summarizer result or the
//! word-frequency fallback. No I/O happens here.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::analysis::frequency::top_frequent_words;
use crate::analysis::markdown::strip_markdown;
use crate::insights::models::{Insight, InsightRecord};

/// Number of words kept by the frequency fallback.
pub const FALLBACK_WORD_COUNT: usize = 5;

/// Builds a record stamped with the current time.
///
/// `ai_summary` is `None` when the summarizer was unavailable. A summary that
/// is empty once markdown is stripped also falls back to word frequency.
pub fn build_record(
    id: Uuid,
    filename: &str,
    extracted_text: &str,
    ai_summary: Option<&str>,
) -> InsightRecord {
    build_record_at(id, filename, extracted_text, ai_summary, Utc::now())
}

pub fn build_record_at(
    id: Uuid,
    filename: &str,
    extracted_text: &str,
    ai_summary: Option<&str>,
    upload_date: DateTime<Utc>,
) -> InsightRecord {
    let cleaned = ai_summary.map(strip_markdown).filter(|s| !s.is_empty());

    let insight = match cleaned {
        Some(summary) => Insight::AiSummary { summary },
        None => Insight::WordFrequency {
            top_words: top_frequent_words(extracted_text, FALLBACK_WORD_COUNT),
        },
    };

    InsightRecord {
        id,
        filename: filename.to_string(),
        upload_date,
        insight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME_TEXT: &str = "Experienced experienced software software engineer engineer \
                               with with strong strong skills skills";

    #[test]
    fn test_ai_summary_is_cleaned_and_used() {
        let id = Uuid::new_v4();
        let record = build_record(
            id,
            "jane.pdf",
            RESUME_TEXT,
            Some("## PROFESSIONAL SUMMARY\n- **Seasoned** backend engineer"),
        );
        assert_eq!(record.id, id);
        assert_eq!(record.filename, "jane.pdf");
        assert_eq!(
            record.insight,
            Insight::AiSummary {
                summary: "PROFESSIONAL SUMMARY\nSeasoned backend engineer".to_string()
            }
        );
    }

    #[test]
    fn test_missing_summary_falls_back_to_word_frequency() {
        let record = build_record(Uuid::new_v4(), "cv.pdf", RESUME_TEXT, None);
        assert_eq!(
            record.insight,
            Insight::WordFrequency {
                top_words: vec![
                    "experienced".to_string(),
                    "software".to_string(),
                    "engineer".to_string(),
                    "strong".to_string(),
                    "skills".to_string(),
                ]
            }
        );
    }

    #[test]
    fn test_blank_or_markup_only_summary_falls_back() {
        for summary in ["", "   ", "**\n- \n```"] {
            let record = build_record(Uuid::new_v4(), "cv.pdf", RESUME_TEXT, Some(summary));
            assert_eq!(record.insight.type_str(), "word_frequency", "input {summary:?}");
        }
    }

    #[test]
    fn test_empty_text_without_summary_gives_empty_word_list() {
        let record = build_record(Uuid::new_v4(), "blank.pdf", "", None);
        assert_eq!(record.insight, Insight::WordFrequency { top_words: vec![] });
    }

    #[test]
    fn test_upload_date_is_now() {
        let before = Utc::now();
        let record = build_record(Uuid::new_v4(), "cv.pdf", RESUME_TEXT, None);
        let after = Utc::now();
        assert!(record.upload_date >= before && record.upload_date <= after);
    }
}

//! Summarizer — pluggable, trait-based source of AI résumé summaries.
//!
//! Default with an API key: `LlmSummarizer` (chat-completions via `LlmClient`).
//! Without one: `DisabledSummarizer`, which always reports unavailability so
//! the word-frequency fallback runs.
//!
//! `AppState` holds an `Arc<dyn Summarizer>`, chosen at startup from config.

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::prompts::build_summary_prompt;
use crate::llm_client::{LlmClient, LlmError};

/// Why no AI summary is available. Never fatal: callers fall back to
/// word frequency.
#[derive(Debug, Error)]
pub enum SummarizationUnavailable {
    #[error("no summarization API key configured")]
    NotConfigured,

    #[error("extracted text is empty")]
    EmptyInput,

    #[error("summarization API call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("summarization API returned empty content")]
    EmptyContent,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Returns the raw (uncleaned) summary text.
    async fn summarize(
        &self,
        text: &str,
        filename: &str,
    ) -> Result<String, SummarizationUnavailable>;
}

pub struct LlmSummarizer(pub LlmClient);

#[async_trait]
impl Summarizer for LlmSummarizer {
    async fn summarize(
        &self,
        text: &str,
        filename: &str,
    ) -> Result<String, SummarizationUnavailable> {
        if text.trim().is_empty() {
            return Err(SummarizationUnavailable::EmptyInput);
        }

        let prompt = build_summary_prompt(text, filename);
        let response = self.0.call(&prompt).await?;

        response
            .text()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .ok_or(SummarizationUnavailable::EmptyContent)
    }
}

pub struct DisabledSummarizer;

#[async_trait]
impl Summarizer for DisabledSummarizer {
    async fn summarize(
        &self,
        _text: &str,
        _filename: &str,
    ) -> Result<String, SummarizationUnavailable> {
        Err(SummarizationUnavailable::NotConfigured)
    }
}

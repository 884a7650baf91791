use std::sync::Arc;

use crate::config::Config;
use crate::insights::store::InsightStore;
use crate::insights::summarizer::Summarizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Durable insight history. Default: JsonFileStore under `DATA_DIR`.
    pub store: Arc<dyn InsightStore>,
    /// LlmSummarizer when SARVAM_API_KEY is set, DisabledSummarizer otherwise.
    pub summarizer: Arc<dyn Summarizer>,
}

//! PDF text extraction. Thin wrapper over `pdf-extract`, run off the async
//! executor since parsing is CPU-bound.

use bytes::Bytes;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to extract PDF text: {0}")]
    Pdf(String),

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Extracts and tidies the text of a PDF. An image-only PDF yields an empty
/// string, not an error.
pub async fn extract_pdf_text(data: Bytes) -> Result<String, ExtractionError> {
    let text = tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&data).map_err(|e| e.to_string())
    })
    .await?
    .map_err(|e| {
        warn!("PDF extraction failed: {e}");
        ExtractionError::Pdf(e)
    })?;

    let cleaned = clean_extracted_text(&text);
    info!("PDF extraction successful: {} characters", cleaned.len());
    Ok(cleaned)
}

/// Trims each line and drops blank ones.
fn clean_extracted_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

//! Axum route handlers for the upload and insight-history API.

use axum::{
    extract::{Multipart, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::extract_pdf_text;
use crate::insights::models::InsightRecord;
use crate::insights::service::analyze_document;
use crate::state::AppState;
use crate::uploads::save_upload;

/// Multipart field carrying the PDF.
pub const RESUME_FIELD: &str = "resume";
const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Deserialize)]
pub struct InsightQuery {
    pub id: Option<String>,
}

struct UploadedFile {
    filename: String,
    content_type: String,
    data: Bytes,
}

/// POST /api/upload-resume
///
/// Extracts the PDF's text, keeps a copy of the file, then stores and returns
/// the insight (AI summary or word-frequency fallback).
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<InsightRecord>, AppError> {
    let upload = read_resume_field(&mut multipart)
        .await?
        .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    if upload.content_type != PDF_CONTENT_TYPE {
        return Err(AppError::Validation(
            "Only PDF files are allowed".to_string(),
        ));
    }
    if upload.data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let id = Uuid::new_v4();
    let text = extract_pdf_text(upload.data.clone()).await?;
    save_upload(&state.config.uploads_dir, id, &upload.filename, &upload.data).await?;

    let record = analyze_document(
        state.store.as_ref(),
        state.summarizer.as_ref(),
        id,
        &upload.filename,
        &text,
    )
    .await?;

    Ok(Json(record))
}

/// GET /api/insights[?id=<id>]
///
/// Without `id` (or with an empty one): every insight, most recent first.
/// With `id`: that insight.
pub async fn handle_list_insights(
    State(state): State<AppState>,
    Query(params): Query<InsightQuery>,
) -> Result<Response, AppError> {
    match params.id.filter(|id| !id.is_empty()) {
        Some(id) => Ok(Json(find_insight(&state, &id).await?).into_response()),
        None => Ok(Json(state.store.list_all().await).into_response()),
    }
}

/// GET /api/insights/:id
pub async fn handle_get_insight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InsightRecord>, AppError> {
    Ok(Json(find_insight(&state, &id).await?))
}

async fn find_insight(state: &AppState, id: &str) -> Result<InsightRecord, AppError> {
    let not_found = || AppError::NotFound("Insight not found".to_string());
    // A malformed id cannot match any record.
    let id = Uuid::parse_str(id).map_err(|_| not_found())?;
    state.store.get_by_id(id).await.ok_or_else(not_found)
}

async fn read_resume_field(multipart: &mut Multipart) -> Result<Option<UploadedFile>, AppError> {
    let invalid = |e: axum::extract::multipart::MultipartError| {
        AppError::Validation(format!("Invalid multipart body: {e}"))
    };

    while let Some(field) = multipart.next_field().await.map_err(invalid)? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload.pdf").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(invalid)?;
        return Ok(Some(UploadedFile {
            filename,
            content_type,
            data,
        }));
    }

    Ok(None)
}

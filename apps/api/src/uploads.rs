//! Keeps a copy of every uploaded document as `<id>-<filename>`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use uuid::Uuid;

/// Writes `data` under `uploads_dir`, creating the directory if needed.
/// Returns the path written.
pub async fn save_upload(uploads_dir: &Path, id: Uuid, filename: &str, data: &[u8]) -> Result<PathBuf> {
    tokio::fs::create_dir_all(uploads_dir)
        .await
        .with_context(|| format!("Failed to create uploads dir {}", uploads_dir.display()))?;

    let path = uploads_dir.join(format!("{id}-{}", safe_file_name(filename)));
    tokio::fs::write(&path, data)
        .await
        .with_context(|| format!("Failed to write upload {}", path.display()))?;

    debug!("Saved upload to {}", path.display());
    Ok(path)
}

/// Final path component of a client-supplied name, so it cannot escape the
/// uploads directory.
fn safe_file_name(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or_default();
    match base {
        "" | "." | ".." => "upload.pdf".to_string(),
        name => name.to_string(),
    }
}

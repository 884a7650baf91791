//! Insight persistence.
//!
//! `InsightStore` is the seam handlers and the pipeline depend on.
//! `JsonFileStore` keeps every record in one pretty-printed JSON array;
//! `MemoryStore` (test builds only) is the in-process fake.
//!
//! Write discipline: `JsonFileStore::append` runs its read-modify-write cycle
//! under a single async mutex and replaces the file via temp-file + rename, so
//! concurrent appends never lose records and readers never see a torn file.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tempfile::NamedTempFile;
use thiserror::Error;
#[cfg(test)]
use tokio::sync::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::insights::models::InsightRecord;

pub const STORE_FILE_NAME: &str = "insights.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to replace store file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Insight {0} already exists")]
    DuplicateId(Uuid),
}

/// Result of reading the persisted collection. Read paths recover from every
/// non-`Loaded` variant by treating the collection as empty.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Vec<InsightRecord>),
    /// Nothing has been written yet.
    Missing,
    /// The file exists but is not a valid record array.
    Malformed(serde_json::Error),
    /// The file could not be read at all.
    Unreadable(std::io::Error),
}

impl LoadOutcome {
    /// Collapses the outcome to a record list, logging anything recovered from.
    pub fn into_records(self) -> Vec<InsightRecord> {
        match self {
            LoadOutcome::Loaded(records) => records,
            LoadOutcome::Missing => Vec::new(),
            LoadOutcome::Malformed(e) => {
                warn!("Insight store is malformed, treating as empty: {e}");
                Vec::new()
            }
            LoadOutcome::Unreadable(e) => {
                error!("Insight store is unreadable, treating as empty: {e}");
                Vec::new()
            }
        }
    }
}

#[async_trait]
pub trait InsightStore: Send + Sync {
    /// Durably adds `record`. On error the record is not stored.
    async fn append(&self, record: InsightRecord) -> Result<(), StorageError>;

    /// All records, most recent `upload_date` first.
    async fn list_all(&self) -> Vec<InsightRecord>;

    async fn get_by_id(&self, id: Uuid) -> Option<InsightRecord>;
}

fn sort_most_recent_first(records: &mut [InsightRecord]) {
    records.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
}

// ────────────────────────────────────────────────────────────────────────────
// JsonFileStore
// ────────────────────────────────────────────────────────────────────────────

pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Store backed by `<data_dir>/insights.json`. Nothing touches disk until
    /// the first read or append.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STORE_FILE_NAME),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> LoadOutcome {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return LoadOutcome::Missing,
            Err(e) => return LoadOutcome::Unreadable(e),
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => LoadOutcome::Loaded(records),
            Err(e) => LoadOutcome::Malformed(e),
        }
    }

    /// Moves a malformed store aside so the next write cannot destroy it.
    async fn quarantine(&self) -> Result<PathBuf, StorageError> {
        let stamp = Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        let target = self
            .path
            .with_file_name(format!("{STORE_FILE_NAME}.corrupt-{stamp}"));
        tokio::fs::rename(&self.path, &target).await?;
        Ok(target)
    }
}

#[async_trait]
impl InsightStore for JsonFileStore {
    async fn append(&self, record: InsightRecord) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut records = match self.load().await {
            LoadOutcome::Loaded(records) => records,
            LoadOutcome::Missing => Vec::new(),
            LoadOutcome::Malformed(e) => {
                let moved_to = self.quarantine().await?;
                warn!(
                    "Insight store was malformed ({e}); moved to {} and starting a new collection",
                    moved_to.display()
                );
                Vec::new()
            }
            LoadOutcome::Unreadable(e) => return Err(StorageError::Io(e)),
        };

        if records.iter().any(|r| r.id == record.id) {
            return Err(StorageError::DuplicateId(record.id));
        }

        let id = record.id;
        records.push(record);
        let bytes = serde_json::to_vec_pretty(&records)?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &bytes))
            .await
            .map_err(|e| StorageError::Io(std::io::Error::other(e)))??;

        info!("Stored insight {id} ({} total)", records.len());
        Ok(())
    }

    async fn list_all(&self) -> Vec<InsightRecord> {
        let mut records = self.load().await.into_records();
        sort_most_recent_first(&mut records);
        debug!("Listed {} insights", records.len());
        records
    }

    async fn get_by_id(&self, id: Uuid) -> Option<InsightRecord> {
        self.load()
            .await
            .into_records()
            .into_iter()
            .find(|r| r.id == id)
    }
}

/// Writes `bytes` to a sibling temp file, fsyncs, then renames over `path`.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryStore
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<InsightRecord>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[async_trait]
impl InsightStore for MemoryStore {
    async fn append(&self, record: InsightRecord) -> Result<(), StorageError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id == record.id) {
            return Err(StorageError::DuplicateId(record.id));
        }
        records.push(record);
        Ok(())
    }

    async fn list_all(&self) -> Vec<InsightRecord> {
        let mut records = self.records.read().await.clone();
        sort_most_recent_first(&mut records);
        records
    }

    async fn get_by_id(&self, id: Uuid) -> Option<InsightRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }
}

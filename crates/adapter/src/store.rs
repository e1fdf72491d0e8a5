//! Score persistence.
//!
//! The file store keeps every run in one JSON array: read it, push, write it
//! back. Writes are serialized through a mutex so concurrent appends in one
//! process never lose each other.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::record::ScoreRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("score store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("score store holds invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Append one finished run
    async fn append(&self, record: ScoreRecord) -> Result<(), StoreError>;

    /// Every stored run, oldest first
    async fn load_all(&self) -> Result<Vec<ScoreRecord>, StoreError>;

    async fn scores_for_student(&self, student_id: &str) -> Result<Vec<ScoreRecord>, StoreError> {
        let all = self.load_all().await?;
        Ok(all
            .into_iter()
            .filter(|r| r.student_id == student_id)
            .collect())
    }
}

/// JSON array in a single file. A missing or empty file is an empty list.
#[derive(Debug)]
pub struct JsonFileScoreStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_records(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl ScoreStore for JsonFileScoreStore {
    async fn append(&self, record: ScoreRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.read_records().await?;
        records.push(record);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let json = serde_json::to_vec_pretty(&records)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        self.read_records().await
    }
}

/// In-process store for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    records: Mutex<Vec<ScoreRecord>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn append(&self, record: ScoreRecord) -> Result<(), StoreError> {
        self.records.lock().await.push(record);
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<ScoreRecord>, StoreError> {
        Ok(self.records.lock().await.clone())
    }
}

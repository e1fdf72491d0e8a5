//! Background score reporting.
//!
//! Bridges the sync game loop with the async store: the loop hands a record over
//! and keeps going; a task on the reporter's own runtime does the write.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::record::ScoreRecord;
use crate::store::ScoreStore;

pub struct ScoreReporter {
    rt: Runtime,
    tx: Option<mpsc::UnboundedSender<ScoreRecord>>,
    worker: Option<JoinHandle<usize>>,
}

impl ScoreReporter {
    /// Start the writer task. Must be called outside any tokio runtime.
    pub fn start(store: Arc<dyn ScoreStore>) -> Result<Self> {
        let rt = Runtime::new().context("failed to create tokio runtime")?;
        let (tx, mut rx) = mpsc::unbounded_channel::<ScoreRecord>();

        let worker = rt.spawn(async move {
            let mut written = 0usize;
            while let Some(record) = rx.recv().await {
                let score = record.score;
                match store.append(record).await {
                    Ok(()) => {
                        written += 1;
                        tracing::debug!(score, "score saved");
                    }
                    Err(e) => tracing::warn!(error = %e, score, "failed to save score"),
                }
            }
            written
        });

        Ok(Self {
            rt,
            tx: Some(tx),
            worker: Some(worker),
        })
    }

    /// Queue a record. Never blocks and never fails the caller.
    pub fn report(&self, record: ScoreRecord) {
        let Some(tx) = &self.tx else {
            return;
        };
        if tx.send(record).is_err() {
            tracing::warn!("score writer has stopped; record dropped");
        }
    }

    /// Flush queued records and stop. Returns how many were written successfully.
    pub fn shutdown(mut self) -> usize {
        self.tx.take();
        match self.worker.take() {
            Some(worker) => self.rt.block_on(worker).unwrap_or(0),
            None => 0,
        }
    }
}

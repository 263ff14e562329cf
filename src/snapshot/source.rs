// Snapshot source trait — where the topic_info CSV comes from.
//
// The web layer and the CLI only need "give me the current snapshot CSV".
// MlflowClient fetches the latest run's artifact from the tracking server;
// FileSnapshotSource reads a local export for offline use and tests.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

/// An upstream service answered with a non-success status.
///
/// Carried inside `anyhow::Error` so the web layer can downcast it and
/// mirror the status code back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamError {
    pub status: u16,
    pub message: String,
}

impl UpstreamError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (upstream status {})", self.message, self.status)
    }
}

impl std::error::Error for UpstreamError {}

/// Trait for fetching the CSV text of the current topic snapshot.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_csv(&self) -> Result<String>;
}

/// Reads the snapshot from a CSV file on disk.
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn fetch_csv(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read snapshot file {}", self.path.display()))
    }
}

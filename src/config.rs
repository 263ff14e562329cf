use std::env;

use anyhow::Result;

/// Default MLflow tracking server.
pub const DEFAULT_TRACKING_URI: &str = "http://localhost:5000";
/// Experiment the topic model logs its runs under.
pub const DEFAULT_EXPERIMENT_NAME: &str = "bertopic-pemerintah";
/// Artifact name prefix; the run id and `.csv` follow it.
pub const DEFAULT_ARTIFACT_PREFIX: &str = "topic_info_";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the MLflow tracking server (MLFLOW_TRACKING_URI).
    pub tracking_uri: String,
    /// Experiment whose latest run supplies the snapshot (MLFLOW_EXPERIMENT_NAME).
    pub experiment_name: String,
    /// Artifact file prefix (TOPICSCOPE_ARTIFACT_PREFIX).
    pub artifact_prefix: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn load() -> Result<Self> {
        Ok(Self {
            tracking_uri: env::var("MLFLOW_TRACKING_URI")
                .unwrap_or_else(|_| DEFAULT_TRACKING_URI.to_string()),
            experiment_name: env::var("MLFLOW_EXPERIMENT_NAME")
                .unwrap_or_else(|_| DEFAULT_EXPERIMENT_NAME.to_string()),
            artifact_prefix: env::var("TOPICSCOPE_ARTIFACT_PREFIX")
                .unwrap_or_else(|_| DEFAULT_ARTIFACT_PREFIX.to_string()),
        })
    }

    /// Check that the tracking URI looks usable.
    /// Call this before any operation that talks to MLflow.
    pub fn require_tracking_uri(&self) -> Result<()> {
        let uri = self.tracking_uri.trim();
        if uri.is_empty() {
            anyhow::bail!(
                "MLFLOW_TRACKING_URI is empty. Set it in your .env file, e.g.\n  \
                 MLFLOW_TRACKING_URI={DEFAULT_TRACKING_URI}"
            );
        }
        if !(uri.starts_with("http://") || uri.starts_with("https://")) {
            anyhow::bail!(
                "MLFLOW_TRACKING_URI must be an http(s) URL, got '{uri}'.\n\
                 Local file stores are not supported; point it at a tracking server."
            );
        }
        if self.experiment_name.trim().is_empty() {
            anyhow::bail!("MLFLOW_EXPERIMENT_NAME is empty.");
        }
        Ok(())
    }
}

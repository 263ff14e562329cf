// HTTP client for the MLflow tracking server REST API.
//
// Resolves the newest run of an experiment through `experiments/get-by-name`
// and `runs/search`, then downloads that run's topic_info artifact through
// the server's `get-artifact` proxy. Non-success responses become
// `UpstreamError`s carrying the server's status.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::snapshot::source::{SnapshotSource, UpstreamError};

/// Client for one experiment on an MLflow tracking server.
pub struct MlflowClient {
    client: reqwest::Client,
    base_url: String,
    experiment_name: String,
    artifact_prefix: String,
}

impl MlflowClient {
    pub fn new(base_url: &str, experiment_name: &str, artifact_prefix: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("topicscope/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            experiment_name: experiment_name.to_string(),
            artifact_prefix: artifact_prefix.to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.tracking_uri,
            &config.experiment_name,
            &config.artifact_prefix,
        )
    }

    /// Artifact path of the topic table logged by `run_id`.
    pub fn artifact_path(&self, run_id: &str) -> String {
        artifact_path(&self.artifact_prefix, run_id)
    }

    /// Look up the experiment id for the configured experiment name.
    pub async fn experiment_id(&self) -> Result<String> {
        let url = format!("{}/api/2.0/mlflow/experiments/get-by-name", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("experiment_name", self.experiment_name.as_str())])
            .send()
            .await
            .context("MLflow experiment lookup failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::new(
                status.as_u16(),
                format!("Failed to find experiment '{}': {body}", self.experiment_name),
            )
            .into());
        }

        let resp: GetExperimentResponse = response
            .json()
            .await
            .context("Failed to parse MLflow experiment response")?;
        Ok(resp.experiment.experiment_id)
    }

    /// The id of the most recently started run of the experiment.
    pub async fn latest_run_id(&self) -> Result<String> {
        let experiment_id = self.experiment_id().await?;
        let url = format!("{}/api/2.0/mlflow/runs/search", self.base_url);

        let body = SearchRunsRequest {
            experiment_ids: vec![experiment_id.clone()],
            order_by: vec!["attributes.start_time DESC".to_string()],
            max_results: 1,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("MLflow run search failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(
                UpstreamError::new(status.as_u16(), format!("Failed to search runs: {body}")).into(),
            );
        }

        let resp: SearchRunsResponse = response
            .json()
            .await
            .context("Failed to parse MLflow run search response")?;

        let run_id = resp
            .runs
            .into_iter()
            .next()
            .map(|run| run.info.run_id)
            .ok_or_else(|| {
                UpstreamError::new(
                    404,
                    format!("Experiment '{}' has no runs", self.experiment_name),
                )
            })?;

        debug!(experiment_id = %experiment_id, run_id = %run_id, "Resolved latest MLflow run");
        Ok(run_id)
    }

    /// Download the topic table artifact of `run_id` as text.
    pub async fn download_artifact(&self, run_id: &str) -> Result<String> {
        let url = format!("{}/get-artifact", self.base_url);
        let path = self.artifact_path(run_id);

        let response = self
            .client
            .get(&url)
            .query(&[("run_uuid", run_id), ("path", path.as_str())])
            .send()
            .await
            .with_context(|| format!("Artifact request failed: {path}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::new(
                status.as_u16(),
                format!("Failed to download artifact: {body}"),
            )
            .into());
        }

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read artifact body: {path}"))?;
        info!(run_id = run_id, bytes = text.len(), "Downloaded topic snapshot");
        Ok(text)
    }
}

#[async_trait]
impl SnapshotSource for MlflowClient {
    async fn fetch_csv(&self) -> Result<String> {
        let run_id = self.latest_run_id().await?;
        self.download_artifact(&run_id).await
    }
}

/// `{prefix}{run_id}.csv`, the name the training job logs its topic table under.
pub fn artifact_path(prefix: &str, run_id: &str) -> String {
    format!("{prefix}{run_id}.csv")
}

// -- Serde types for the MLflow REST API --

#[derive(Debug, Deserialize)]
pub struct GetExperimentResponse {
    pub experiment: Experiment,
}

#[derive(Debug, Deserialize)]
pub struct Experiment {
    pub experiment_id: String,
}

#[derive(Debug, Serialize)]
pub struct SearchRunsRequest {
    pub experiment_ids: Vec<String>,
    pub order_by: Vec<String>,
    pub max_results: u32,
}

/// `runs` is omitted entirely when the search matches nothing.
#[derive(Debug, Deserialize)]
pub struct SearchRunsResponse {
    #[serde(default)]
    pub runs: Vec<Run>,
}

#[derive(Debug, Deserialize)]
pub struct Run {
    pub info: RunInfo,
}

#[derive(Debug, Deserialize)]
pub struct RunInfo {
    pub run_id: String,
}

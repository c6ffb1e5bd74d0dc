// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! A client for the IOMETE Spark Job API.
//!
//! Jobs and runs are passed around as plain [`serde_json::Value`]s: the
//! client only knows where to send them.

use iomete_http::{ApiClient, CallError};
use serde_json::Value;

/// Path of the Spark Job API, relative to the host
const SPARK_JOBS_PATH: &str = "/api/v1/spark-jobs";

/// Manages Spark jobs and their runs.
#[derive(Debug, Clone)]
pub struct SparkJobClient {
    api: ApiClient,
    endpoint: String,
}

impl SparkJobClient {
    /// Create a client for the given host.
    ///
    /// No call is made until an operation is used.
    ///
    /// # Parameters
    ///
    /// * `http_client` - The reqwest client to use for making HTTP requests.
    /// * `host` - The base URL of the IOMETE deployment, like
    ///   `https://dev.iomete.cloud`.
    /// * `api_key` - The API key sent as a bearer token.
    #[must_use]
    pub fn new(http_client: reqwest::Client, host: &str, api_key: &str) -> Self {
        let endpoint = format!("{}{SPARK_JOBS_PATH}", host.trim_end_matches('/'));
        tracing::debug!(endpoint, "Created Spark job client");

        Self {
            api: ApiClient::new(http_client, api_key),
            endpoint,
        }
    }

    /// The root of the Spark Job API
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn job_url(&self, job_id: &str) -> String {
        format!("{}/{}", self.endpoint, urlencoding::encode(job_id))
    }

    fn runs_url(&self, job_id: &str) -> String {
        format!("{}/runs", self.job_url(job_id))
    }

    fn run_url(&self, job_id: &str, run_id: &str) -> String {
        format!("{}/{}", self.runs_url(job_id), urlencoding::encode(run_id))
    }

    /// Create a new job.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the job, or if the call fails.
    #[tracing::instrument(name = "spark_jobs.create_job", skip_all, err(Debug))]
    pub async fn create_job(&self, payload: &Value) -> Result<Value, CallError> {
        let data = self.api.post(&self.endpoint, payload).await?;
        Ok(data.unwrap_or_default())
    }

    /// Replace the definition of a job.
    ///
    /// # Errors
    ///
    /// Returns an error if the job doesn't exist, if the server rejects the
    /// new definition, or if the call fails.
    #[tracing::instrument(
        name = "spark_jobs.update_job",
        skip_all,
        fields(job.id = job_id),
        err(Debug),
    )]
    pub async fn update_job(&self, job_id: &str, payload: &Value) -> Result<Value, CallError> {
        let data = self.api.put(&self.job_url(job_id), payload).await?;
        Ok(data.unwrap_or_default())
    }

    /// List the jobs.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    #[tracing::instrument(name = "spark_jobs.get_jobs", skip_all, err(Debug))]
    pub async fn get_jobs(&self) -> Result<Value, CallError> {
        let data = self.api.get(&self.endpoint).await?;
        Ok(data.unwrap_or_default())
    }

    /// Get a job by its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the job doesn't exist, or if the call fails.
    #[tracing::instrument(
        name = "spark_jobs.get_job_by_id",
        skip_all,
        fields(job.id = job_id),
        err(Debug),
    )]
    pub async fn get_job_by_id(&self, job_id: &str) -> Result<Value, CallError> {
        let data = self.api.get(&self.job_url(job_id)).await?;
        Ok(data.unwrap_or_default())
    }

    /// Delete a job.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses the deletion, or if the call
    /// fails.
    #[tracing::instrument(
        name = "spark_jobs.delete_job_by_id",
        skip_all,
        fields(job.id = job_id),
        err(Debug),
    )]
    pub async fn delete_job_by_id(&self, job_id: &str) -> Result<Value, CallError> {
        let data = self.api.delete(&self.job_url(job_id)).await?;
        Ok(data.unwrap_or_default())
    }

    /// List the runs of a job.
    ///
    /// # Errors
    ///
    /// Returns an error if the job doesn't exist, or if the call fails.
    #[tracing::instrument(
        name = "spark_jobs.get_job_runs",
        skip_all,
        fields(job.id = job_id),
        err(Debug),
    )]
    pub async fn get_job_runs(&self, job_id: &str) -> Result<Value, CallError> {
        let data = self.api.get(&self.runs_url(job_id)).await?;
        Ok(data.unwrap_or_default())
    }

    /// Start a new run of a job.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses to start the run, or if the
    /// call fails.
    #[tracing::instrument(
        name = "spark_jobs.submit_job_run",
        skip_all,
        fields(job.id = job_id),
        err(Debug),
    )]
    pub async fn submit_job_run(&self, job_id: &str, payload: &Value) -> Result<Value, CallError> {
        let data = self.api.post(&self.runs_url(job_id), payload).await?;
        Ok(data.unwrap_or_default())
    }

    /// Cancel a run.
    ///
    /// # Errors
    ///
    /// Returns an error if the run doesn't exist, or if the call fails.
    #[tracing::instrument(
        name = "spark_jobs.cancel_job_run",
        skip_all,
        fields(job.id = job_id, run.id = run_id),
        err(Debug),
    )]
    pub async fn cancel_job_run(&self, job_id: &str, run_id: &str) -> Result<Value, CallError> {
        let data = self.api.delete(&self.run_url(job_id, run_id)).await?;
        Ok(data.unwrap_or_default())
    }

    /// Get a run by its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the run doesn't exist, or if the call fails.
    #[tracing::instrument(
        name = "spark_jobs.get_job_run_by_id",
        skip_all,
        fields(job.id = job_id, run.id = run_id),
        err(Debug),
    )]
    pub async fn get_job_run_by_id(&self, job_id: &str, run_id: &str) -> Result<Value, CallError> {
        let data = self.api.get(&self.run_url(job_id, run_id)).await?;
        Ok(data.unwrap_or_default())
    }

    /// Get the logs of a run.
    ///
    /// # Errors
    ///
    /// Returns an error if the run doesn't exist, or if the call fails.
    #[tracing::instrument(
        name = "spark_jobs.get_job_run_logs",
        skip_all,
        fields(job.id = job_id, run.id = run_id),
        err(Debug),
    )]
    pub async fn get_job_run_logs(&self, job_id: &str, run_id: &str) -> Result<Value, CallError> {
        let url = format!("{}/logs", self.run_url(job_id, run_id));
        let data = self.api.get(&url).await?;
        Ok(data.unwrap_or_default())
    }

    /// Get the metrics of a run.
    ///
    /// # Errors
    ///
    /// Returns an error if the run doesn't exist, or if the call fails.
    #[tracing::instrument(
        name = "spark_jobs.get_job_run_metrics",
        skip_all,
        fields(job.id = job_id, run.id = run_id),
        err(Debug),
    )]
    pub async fn get_job_run_metrics(
        &self,
        job_id: &str,
        run_id: &str,
    ) -> Result<Value, CallError> {
        let url = format!("{}/metrics", self.run_url(job_id, run_id));
        let data = self.api.get(&url).await?;
        Ok(data.unwrap_or_default())
    }
}

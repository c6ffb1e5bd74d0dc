// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use figment::Figment;
use serde_json::Value;
use tracing::{Instrument, info_span};

use crate::util::{print_json, read_document, spark_job_client_from_config};

#[derive(Parser, Debug)]
pub(super) struct Options {
    #[command(subcommand)]
    subcommand: Subcommand,
}

#[derive(Parser, Debug)]
enum Subcommand {
    /// List the jobs
    List,

    /// Show a job
    Get { job_id: String },

    /// Create a job from a YAML or JSON file
    Create {
        #[arg(short, long)]
        file: Utf8PathBuf,
    },

    /// Replace the definition of a job
    Update {
        job_id: String,

        #[arg(short, long)]
        file: Utf8PathBuf,
    },

    /// Delete a job
    Delete { job_id: String },

    /// List the runs of a job
    Runs { job_id: String },

    /// Start a new run of a job
    Submit {
        job_id: String,

        /// Run parameters. An empty object is sent if not specified
        #[arg(short, long)]
        file: Option<Utf8PathBuf>,
    },

    /// Show a run
    Run { job_id: String, run_id: String },

    /// Cancel a run
    Cancel { job_id: String, run_id: String },

    /// Show the logs of a run
    Logs { job_id: String, run_id: String },

    /// Show the metrics of a run
    Metrics { job_id: String, run_id: String },
}

impl Options {
    pub async fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        let client = spark_job_client_from_config(figment)?;

        use Subcommand as SC;
        let output = match self.subcommand {
            SC::List => {
                client
                    .get_jobs()
                    .instrument(info_span!("cli.spark_job.list"))
                    .await?
            }

            SC::Get { job_id } => {
                client
                    .get_job_by_id(&job_id)
                    .instrument(info_span!("cli.spark_job.get"))
                    .await?
            }

            SC::Create { file } => {
                let payload: Value = read_document(&file).await?;
                client
                    .create_job(&payload)
                    .instrument(info_span!("cli.spark_job.create"))
                    .await?
            }

            SC::Update { job_id, file } => {
                let payload: Value = read_document(&file).await?;
                client
                    .update_job(&job_id, &payload)
                    .instrument(info_span!("cli.spark_job.update"))
                    .await?
            }

            SC::Delete { job_id } => {
                client
                    .delete_job_by_id(&job_id)
                    .instrument(info_span!("cli.spark_job.delete"))
                    .await?
            }

            SC::Runs { job_id } => {
                client
                    .get_job_runs(&job_id)
                    .instrument(info_span!("cli.spark_job.runs"))
                    .await?
            }

            SC::Submit { job_id, file } => {
                let payload = match file {
                    Some(file) => read_document(&file).await?,
                    None => Value::Object(serde_json::Map::new()),
                };
                client
                    .submit_job_run(&job_id, &payload)
                    .instrument(info_span!("cli.spark_job.submit"))
                    .await?
            }

            SC::Run { job_id, run_id } => {
                client
                    .get_job_run_by_id(&job_id, &run_id)
                    .instrument(info_span!("cli.spark_job.run"))
                    .await?
            }

            SC::Cancel { job_id, run_id } => {
                client
                    .cancel_job_run(&job_id, &run_id)
                    .instrument(info_span!("cli.spark_job.cancel"))
                    .await?
            }

            SC::Logs { job_id, run_id } => {
                client
                    .get_job_run_logs(&job_id, &run_id)
                    .instrument(info_span!("cli.spark_job.logs"))
                    .await?
            }

            SC::Metrics { job_id, run_id } => {
                client
                    .get_job_run_metrics(&job_id, &run_id)
                    .instrument(info_span!("cli.spark_job.metrics"))
                    .await?
            }
        };

        // Deletions and cancellations usually come back without a body
        if !output.is_null() {
            print_json(&output).await?;
        }

        Ok(ExitCode::SUCCESS)
    }
}

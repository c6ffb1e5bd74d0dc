// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use anyhow::Context;
use camino::Utf8Path;
use figment::Figment;
use iomete_config::{ApiConfig, ConfigurationSection, DataSecurityConfig, SparkJobsConfig};
use iomete_data_security::DataSecurityClient;
use iomete_spark_jobs::SparkJobClient;
use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncWriteExt;

/// Read a YAML or JSON document from a file
pub async fn read_document<T: DeserializeOwned>(path: &Utf8Path) -> anyhow::Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("could not read {path}"))?;

    // JSON documents are valid YAML
    serde_yaml::from_str(&content).with_context(|| format!("could not parse {path}"))
}

/// Write a value as pretty JSON to the standard output
pub async fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let mut output = serde_json::to_vec_pretty(value)?;
    output.push(b'\n');

    let mut stdout = tokio::io::stdout();
    stdout.write_all(&output).await?;
    stdout.flush().await?;
    Ok(())
}

#[tracing::instrument(name = "cli.data_security.connect", skip_all)]
pub async fn data_security_client_from_config(
    figment: &Figment,
) -> anyhow::Result<DataSecurityClient> {
    let api_config = ApiConfig::extract(figment).map_err(anyhow::Error::from_boxed)?;
    let config = DataSecurityConfig::extract(figment).map_err(anyhow::Error::from_boxed)?;

    let client = DataSecurityClient::connect_with_account_endpoint(
        iomete_http::reqwest_client(),
        config.account_endpoint.as_str(),
        &config.workspace_id,
        &api_config.api_key,
    )
    .await
    .context("could not connect to the workspace controller")?;

    tracing::info!(endpoint = client.endpoint(), "Connected to the Data Security API");
    Ok(client)
}

pub fn spark_job_client_from_config(figment: &Figment) -> anyhow::Result<SparkJobClient> {
    let api_config = ApiConfig::extract(figment).map_err(anyhow::Error::from_boxed)?;
    let config = SparkJobsConfig::extract(figment).map_err(anyhow::Error::from_boxed)?;

    Ok(SparkJobClient::new(
        iomete_http::reqwest_client(),
        config.host.as_str(),
        &api_config.api_key,
    ))
}

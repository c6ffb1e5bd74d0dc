// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::{Deserialize, Serialize};

mod api;
mod data_security;
mod spark_jobs;

pub use self::{api::ApiConfig, data_security::DataSecurityConfig, spark_jobs::SparkJobsConfig};
use crate::util::ConfigurationSection;

/// Application configuration root
#[derive(Debug, Serialize, Deserialize)]
pub struct RootConfig {
    /// Credentials used for every API call
    pub api: ApiConfig,

    /// Configuration related to the Data Security API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_security: Option<DataSecurityConfig>,

    /// Configuration related to the Spark Job API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spark_jobs: Option<SparkJobsConfig>,
}

impl ConfigurationSection for RootConfig {
    fn validate(
        &self,
        figment: &figment::Figment,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
        self.api.validate(figment)?;

        if let Some(data_security) = &self.data_security {
            data_security.validate(figment)?;
        }

        Ok(())
    }
}

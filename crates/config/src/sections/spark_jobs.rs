// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::ConfigurationSection;

/// Configuration related to the Spark Job API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparkJobsConfig {
    /// The base URL of the IOMETE deployment, like `https://dev.iomete.cloud`
    pub host: Url,
}

impl ConfigurationSection for SparkJobsConfig {
    const PATH: Option<&'static str> = Some("spark_jobs");
}

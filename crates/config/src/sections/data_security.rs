// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{ConfigurationSection, util::error_on_field};

fn default_account_endpoint() -> Url {
    Url::parse("https://account.iomete.com/").unwrap()
}

fn is_default_account_endpoint(value: &Url) -> bool {
    *value == default_account_endpoint()
}

/// Configuration related to the Data Security API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSecurityConfig {
    /// The ID of the workspace whose policies are managed
    pub workspace_id: String,

    /// The account service used to find the workspace controller. Defaults
    /// to `https://account.iomete.com/`.
    #[serde(
        default = "default_account_endpoint",
        skip_serializing_if = "is_default_account_endpoint"
    )]
    pub account_endpoint: Url,
}

impl ConfigurationSection for DataSecurityConfig {
    const PATH: Option<&'static str> = Some("data_security");

    fn validate(
        &self,
        figment: &figment::Figment,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
        if self.workspace_id.is_empty() {
            let error = figment::Error::from("the workspace ID must not be empty".to_owned());
            return Err(error_on_field(figment, "data_security", "workspace_id", error).into());
        }

        Ok(())
    }
}

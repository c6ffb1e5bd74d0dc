// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::{Deserialize, Serialize};

use crate::{ConfigurationSection, util::error_on_field};

/// Credentials used for every API call
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// The API key, sent as a bearer token
    pub api_key: String,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig").finish_non_exhaustive()
    }
}

impl ConfigurationSection for ApiConfig {
    const PATH: Option<&'static str> = Some("api");

    fn validate(
        &self,
        figment: &figment::Figment,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
        if self.api_key.trim().is_empty() {
            let error = figment::Error::from("the API key must not be empty".to_owned());
            return Err(error_on_field(figment, "api", "api_key", error).into());
        }

        Ok(())
    }
}

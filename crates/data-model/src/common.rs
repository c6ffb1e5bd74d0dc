// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::JsonMap;

/// A time window during which a policy is active.
///
/// Times are kept as the server formats them (`2023/07/01 00:00:00`). They
/// are neither parsed nor checked for ordering here, the server rejects
/// windows ending before they start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityPeriod {
    pub start_time: String,
    pub end_time: String,
    pub time_zone: String,
}

impl ValidityPeriod {
    #[must_use]
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        time_zone: impl Into<String>,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            time_zone: time_zone.into(),
        }
    }
}

impl JsonMap for ValidityPeriod {}

/// Whether the listed names of a resource are matched or excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceInclusionType {
    /// The listed names are matched
    #[default]
    Include,

    /// Everything but the listed names is matched
    Exclude,
}

impl ResourceInclusionType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Include => "INCLUDE",
            Self::Exclude => "EXCLUDE",
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid resource inclusion type {0:?}")]
pub struct InvalidResourceInclusionTypeError(String);

impl std::str::FromStr for ResourceInclusionType {
    type Err = InvalidResourceInclusionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INCLUDE" => Ok(Self::Include),
            "EXCLUDE" => Ok(Self::Exclude),
            s => Err(InvalidResourceInclusionTypeError(s.to_owned())),
        }
    }
}

impl std::fmt::Display for ResourceInclusionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

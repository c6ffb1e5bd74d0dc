// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::{Deserialize, Serialize};

use crate::{JsonMap, ValidityPeriod, map::null_as_default};

/// The column a data mask policy applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataMaskPolicyResource {
    pub database: String,
    pub table: String,
    pub column: String,
}

impl DataMaskPolicyResource {
    #[must_use]
    pub fn new(
        database: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            database: database.into(),
            table: table.into(),
            column: column.into(),
        }
    }
}

impl JsonMap for DataMaskPolicyResource {}

/// A mask applied to a column for a list of users.
///
/// The mask type (`MASK_SHOW_LAST_4`, `MASK_HASH`, ...) is checked by the
/// server against the masks it supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataMaskPolicyItem {
    pub data_mask_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<String>,
}

impl DataMaskPolicyItem {
    #[must_use]
    pub fn new<U>(data_mask_type: impl Into<String>, users: U) -> Self
    where
        U: IntoIterator,
        U::Item: Into<String>,
    {
        Self {
            data_mask_type: data_mask_type.into(),
            users: users.into_iter().map(Into::into).collect(),
        }
    }
}

impl JsonMap for DataMaskPolicyItem {}

/// A data mask policy, as sent to and returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataMaskPolicyView {
    /// Assigned by the server on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub validity_period: Option<ValidityPeriod>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Vec<DataMaskPolicyResource>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub data_mask_policy_items: Vec<DataMaskPolicyItem>,
}

impl DataMaskPolicyView {
    /// Create an empty policy with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            validity_period: None,
            resources: Vec::new(),
            data_mask_policy_items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_validity_period(mut self, validity_period: ValidityPeriod) -> Self {
        self.validity_period = Some(validity_period);
        self
    }

    #[must_use]
    pub fn with_resource(mut self, resource: DataMaskPolicyResource) -> Self {
        self.resources.push(resource);
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: DataMaskPolicyItem) -> Self {
        self.data_mask_policy_items.push(item);
        self
    }
}

impl JsonMap for DataMaskPolicyView {}

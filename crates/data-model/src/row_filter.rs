// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::{Deserialize, Serialize};

use crate::{JsonMap, ValidityPeriod, map::null_as_default};

/// The table a row filter policy applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilterPolicyResource {
    pub database: String,
    pub table: String,
}

impl RowFilterPolicyResource {
    #[must_use]
    pub fn new(database: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            table: table.into(),
        }
    }
}

impl JsonMap for RowFilterPolicyResource {}

/// A filter applied to the rows seen by a list of users.
///
/// The expression is evaluated by the server and passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilterPolicyItem {
    pub filter_expr: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<String>,
}

impl RowFilterPolicyItem {
    #[must_use]
    pub fn new<U>(filter_expr: impl Into<String>, users: U) -> Self
    where
        U: IntoIterator,
        U::Item: Into<String>,
    {
        Self {
            filter_expr: filter_expr.into(),
            users: users.into_iter().map(Into::into).collect(),
        }
    }
}

impl JsonMap for RowFilterPolicyItem {}

/// A row filter policy, as sent to and returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilterPolicyView {
    /// Assigned by the server on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub validity_period: Option<ValidityPeriod>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Vec<RowFilterPolicyResource>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub row_filter_policy_items: Vec<RowFilterPolicyItem>,
}

impl RowFilterPolicyView {
    /// Create an empty policy with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            validity_period: None,
            resources: Vec::new(),
            row_filter_policy_items: Vec::new(),
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
    pub fn with_resource(mut self, resource: RowFilterPolicyResource) -> Self {
        self.resources.push(resource);
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: RowFilterPolicyItem) -> Self {
        self.row_filter_policy_items.push(item);
        self
    }
}

impl JsonMap for RowFilterPolicyView {}

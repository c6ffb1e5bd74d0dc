// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{JsonMap, ResourceInclusionType, ValidityPeriod, map::null_as_default};

/// A kind of permission granted by an access policy item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessType {
    Select,
    Update,
    Create,
    Drop,
    Alter,
    Index,
    Lock,
    All,
    Read,
    Write,
}

impl AccessType {
    /// Every access type, in declaration order
    pub const ALL: [Self; 10] = [
        Self::Select,
        Self::Update,
        Self::Create,
        Self::Drop,
        Self::Alter,
        Self::Index,
        Self::Lock,
        Self::All,
        Self::Read,
        Self::Write,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Update => "UPDATE",
            Self::Create => "CREATE",
            Self::Drop => "DROP",
            Self::Alter => "ALTER",
            Self::Index => "INDEX",
            Self::Lock => "LOCK",
            Self::All => "ALL",
            Self::Read => "READ",
            Self::Write => "WRITE",
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid access type {0:?}")]
pub struct InvalidAccessTypeError(String);

impl std::str::FromStr for AccessType {
    type Err = InvalidAccessTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|access| access.as_str() == s)
            .ok_or_else(|| InvalidAccessTypeError(s.to_owned()))
    }
}

impl std::fmt::Display for AccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The databases, tables and columns an access policy applies to.
///
/// `*` matches everything at a given level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicyResource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub databases: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub database_inclusion_type: ResourceInclusionType,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tables: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub table_inclusion_type: ResourceInclusionType,

    #[serde(default, deserialize_with = "null_as_default")]
    pub columns: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub column_inclusion_type: ResourceInclusionType,
}

impl AccessPolicyResource {
    /// Create a resource including the given databases, tables and columns.
    #[must_use]
    pub fn new<D, T, C>(databases: D, tables: T, columns: C) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            databases: databases.into_iter().map(Into::into).collect(),
            database_inclusion_type: ResourceInclusionType::Include,
            tables: tables.into_iter().map(Into::into).collect(),
            table_inclusion_type: ResourceInclusionType::Include,
            columns: columns.into_iter().map(Into::into).collect(),
            column_inclusion_type: ResourceInclusionType::Include,
        }
    }

    #[must_use]
    pub fn with_database_inclusion_type(mut self, inclusion_type: ResourceInclusionType) -> Self {
        self.database_inclusion_type = inclusion_type;
        self
    }

    #[must_use]
    pub fn with_table_inclusion_type(mut self, inclusion_type: ResourceInclusionType) -> Self {
        self.table_inclusion_type = inclusion_type;
        self
    }

    #[must_use]
    pub fn with_column_inclusion_type(mut self, inclusion_type: ResourceInclusionType) -> Self {
        self.column_inclusion_type = inclusion_type;
        self
    }
}

impl JsonMap for AccessPolicyResource {}

/// Permissions granted to a list of users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicyItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub accesses: Vec<AccessType>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<String>,
}

impl AccessPolicyItem {
    #[must_use]
    pub fn new<A, U>(accesses: A, users: U) -> Self
    where
        A: IntoIterator<Item = AccessType>,
        U: IntoIterator,
        U::Item: Into<String>,
    {
        Self {
            accesses: accesses.into_iter().collect(),
            users: users.into_iter().map(Into::into).collect(),
        }
    }
}

impl JsonMap for AccessPolicyItem {}

/// An access policy, as sent to and returned by the server.
///
/// The server expects at least one resource and one item, and answers with
/// an error otherwise. Updates replace the whole policy, so an unset
/// description or validity period is sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicyView {
    /// Assigned by the server on creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub validity_period: Option<ValidityPeriod>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Vec<AccessPolicyResource>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub allow_policy_items: Vec<AccessPolicyItem>,
}

impl AccessPolicyView {
    /// Create an empty policy with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            validity_period: None,
            resources: Vec::new(),
            allow_policy_items: Vec::new(),
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
    pub fn with_resource(mut self, resource: AccessPolicyResource) -> Self {
        self.resources.push(resource);
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: AccessPolicyItem) -> Self {
        self.allow_policy_items.push(item);
        self
    }
}

impl JsonMap for AccessPolicyView {}

// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Operations on row filter policies.

use iomete_data_model::RowFilterPolicyView;

use crate::{DataSecurityClient, Error};

impl DataSecurityClient {
    /// Create a new row filter policy.
    ///
    /// The filter expressions are sent as-is, the server is the one parsing
    /// them.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the policy, or if the call fails.
    #[tracing::instrument(
        name = "data_security.create_filter_policy",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.name = policy.name,
        ),
        err(Debug),
    )]
    pub async fn create_filter_policy(
        &self,
        policy: &RowFilterPolicyView,
    ) -> Result<RowFilterPolicyView, Error> {
        self.create(policy).await
    }

    /// List the row filter policies of the workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    #[tracing::instrument(
        name = "data_security.get_filter_policies",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
        ),
        err(Debug),
    )]
    pub async fn get_filter_policies(&self) -> Result<Vec<RowFilterPolicyView>, Error> {
        self.list().await
    }

    /// Get a row filter policy by its name.
    ///
    /// # Errors
    ///
    /// Returns an error if no policy has this name, or if the call fails.
    #[tracing::instrument(
        name = "data_security.get_filter_policy_by_name",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.name = policy_name,
        ),
        err(Debug),
    )]
    pub async fn get_filter_policy_by_name(
        &self,
        policy_name: &str,
    ) -> Result<RowFilterPolicyView, Error> {
        self.get_by_name(policy_name).await
    }

    /// Get a row filter policy by its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no policy has this ID, or if the call fails.
    #[tracing::instrument(
        name = "data_security.get_filter_policy_by_id",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.id = policy_id,
        ),
        err(Debug),
    )]
    pub async fn get_filter_policy_by_id(
        &self,
        policy_id: i64,
    ) -> Result<RowFilterPolicyView, Error> {
        self.get_by_id(policy_id).await
    }

    /// Replace the row filter policy with the given name.
    ///
    /// The server replaces the whole policy: anything not set on `policy` is
    /// not kept from the previous version.
    ///
    /// # Errors
    ///
    /// Returns an error if no policy has this name, if the server rejects the
    /// new policy, or if the call fails.
    #[tracing::instrument(
        name = "data_security.update_filter_policy_by_name",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.name = policy_name,
        ),
        err(Debug),
    )]
    pub async fn update_filter_policy_by_name(
        &self,
        policy_name: &str,
        policy: &RowFilterPolicyView,
    ) -> Result<RowFilterPolicyView, Error> {
        self.update_by_name(policy_name, policy).await
    }

    /// Replace the row filter policy with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no policy has this ID, if the server rejects the
    /// new policy, or if the call fails.
    #[tracing::instrument(
        name = "data_security.update_filter_policy_by_id",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.id = policy_id,
        ),
        err(Debug),
    )]
    pub async fn update_filter_policy_by_id(
        &self,
        policy_id: i64,
        policy: &RowFilterPolicyView,
    ) -> Result<RowFilterPolicyView, Error> {
        self.update_by_id(policy_id, policy).await
    }

    /// Delete the row filter policy with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses the deletion, or if the call
    /// fails.
    #[tracing::instrument(
        name = "data_security.delete_filter_policy_by_id",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.id = policy_id,
        ),
        err(Debug),
    )]
    pub async fn delete_filter_policy_by_id(&self, policy_id: i64) -> Result<(), Error> {
        self.delete_by_id::<RowFilterPolicyView>(policy_id).await
    }
}

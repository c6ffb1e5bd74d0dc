// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Operations on access policies.

use iomete_data_model::AccessPolicyView;

use crate::{DataSecurityClient, Error};

impl DataSecurityClient {
    /// Create a new access policy.
    ///
    /// Returns the policy as stored by the server, with its ID set.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the policy, for example because
    /// it has no resource or no item, or if the call fails.
    #[tracing::instrument(
        name = "data_security.create_access_policy",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.name = policy.name,
        ),
        err(Debug),
    )]
    pub async fn create_access_policy(
        &self,
        policy: &AccessPolicyView,
    ) -> Result<AccessPolicyView, Error> {
        self.create(policy).await
    }

    /// List the access policies of the workspace, in the order returned by
    /// the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    #[tracing::instrument(
        name = "data_security.get_access_policies",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
        ),
        err(Debug),
    )]
    pub async fn get_access_policies(&self) -> Result<Vec<AccessPolicyView>, Error> {
        self.list().await
    }

    /// Get an access policy by its name.
    ///
    /// # Errors
    ///
    /// Returns an error if no policy has this name, or if the call fails.
    #[tracing::instrument(
        name = "data_security.get_access_policy_by_name",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.name = policy_name,
        ),
        err(Debug),
    )]
    pub async fn get_access_policy_by_name(
        &self,
        policy_name: &str,
    ) -> Result<AccessPolicyView, Error> {
        self.get_by_name(policy_name).await
    }

    /// Get an access policy by its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no policy has this ID, or if the call fails.
    #[tracing::instrument(
        name = "data_security.get_access_policy_by_id",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.id = policy_id,
        ),
        err(Debug),
    )]
    pub async fn get_access_policy_by_id(&self, policy_id: i64) -> Result<AccessPolicyView, Error> {
        self.get_by_id(policy_id).await
    }

    /// Replace the access policy with the given name.
    ///
    /// The server replaces the whole policy: anything not set on `policy` is
    /// not kept from the previous version.
    ///
    /// # Errors
    ///
    /// Returns an error if no policy has this name, if the server rejects the
    /// new policy, or if the call fails.
    #[tracing::instrument(
        name = "data_security.update_access_policy_by_name",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.name = policy_name,
        ),
        err(Debug),
    )]
    pub async fn update_access_policy_by_name(
        &self,
        policy_name: &str,
        policy: &AccessPolicyView,
    ) -> Result<AccessPolicyView, Error> {
        self.update_by_name(policy_name, policy).await
    }

    /// Replace the access policy with the given ID.
    ///
    /// Same as [`Self::update_access_policy_by_name`].
    ///
    /// # Errors
    ///
    /// Returns an error if no policy has this ID, if the server rejects the
    /// new policy, or if the call fails.
    #[tracing::instrument(
        name = "data_security.update_access_policy_by_id",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.id = policy_id,
        ),
        err(Debug),
    )]
    pub async fn update_access_policy_by_id(
        &self,
        policy_id: i64,
        policy: &AccessPolicyView,
    ) -> Result<AccessPolicyView, Error> {
        self.update_by_id(policy_id, policy).await
    }

    /// Delete the access policy with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses the deletion, or if the call
    /// fails.
    #[tracing::instrument(
        name = "data_security.delete_access_policy_by_id",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.id = policy_id,
        ),
        err(Debug),
    )]
    pub async fn delete_access_policy_by_id(&self, policy_id: i64) -> Result<(), Error> {
        self.delete_by_id::<AccessPolicyView>(policy_id).await
    }
}

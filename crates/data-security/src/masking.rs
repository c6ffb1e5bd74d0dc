// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use iomete_data_model::DataMaskPolicyView;

use crate::{DataSecurityClient, Error};

impl DataSecurityClient {
    /// Create a new data mask policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the policy, which includes mask
    /// types it doesn't know about, or if the call fails.
    #[tracing::instrument(
        name = "data_security.create_masking_policy",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.name = policy.name,
        ),
        err(Debug),
    )]
    pub async fn create_masking_policy(
        &self,
        policy: &DataMaskPolicyView,
    ) -> Result<DataMaskPolicyView, Error> {
        self.create(policy).await
    }

    /// List the data mask policies of the workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    #[tracing::instrument(
        name = "data_security.get_masking_policies",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
        ),
        err(Debug),
    )]
    pub async fn get_masking_policies(&self) -> Result<Vec<DataMaskPolicyView>, Error> {
        self.list().await
    }

    /// Get a data mask policy by its name.
    ///
    /// # Errors
    ///
    /// Returns an error if no policy has this name, or if the call fails.
    #[tracing::instrument(
        name = "data_security.get_masking_policy_by_name",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.name = policy_name,
        ),
        err(Debug),
    )]
    pub async fn get_masking_policy_by_name(
        &self,
        policy_name: &str,
    ) -> Result<DataMaskPolicyView, Error> {
        self.get_by_name(policy_name).await
    }

    /// Get a data mask policy by its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no policy has this ID, or if the call fails.
    #[tracing::instrument(
        name = "data_security.get_masking_policy_by_id",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.id = policy_id,
        ),
        err(Debug),
    )]
    pub async fn get_masking_policy_by_id(
        &self,
        policy_id: i64,
    ) -> Result<DataMaskPolicyView, Error> {
        self.get_by_id(policy_id).await
    }

    /// Replace the data mask policy with the given name.
    ///
    /// # Errors
    ///
    /// Returns an error if no policy has this name, if the server rejects the
    /// new policy, or if the call fails.
    #[tracing::instrument(
        name = "data_security.update_masking_policy_by_name",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.name = policy_name,
        ),
        err(Debug),
    )]
    pub async fn update_masking_policy_by_name(
        &self,
        policy_name: &str,
        policy: &DataMaskPolicyView,
    ) -> Result<DataMaskPolicyView, Error> {
        self.update_by_name(policy_name, policy).await
    }

    /// Replace the data mask policy with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no policy has this ID, if the server rejects the
    /// new policy, or if the call fails.
    #[tracing::instrument(
        name = "data_security.update_masking_policy_by_id",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.id = policy_id,
        ),
        err(Debug),
    )]
    pub async fn update_masking_policy_by_id(
        &self,
        policy_id: i64,
        policy: &DataMaskPolicyView,
    ) -> Result<DataMaskPolicyView, Error> {
        self.update_by_id(policy_id, policy).await
    }

    /// Delete the data mask policy with the given ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the server refuses the deletion, or if the call
    /// fails.
    #[tracing::instrument(
        name = "data_security.delete_masking_policy_by_id",
        skip_all,
        fields(
            workspace.id = self.workspace_id,
            policy.id = policy_id,
        ),
        err(Debug),
    )]
    pub async fn delete_masking_policy_by_id(&self, policy_id: i64) -> Result<(), Error> {
        self.delete_by_id::<DataMaskPolicyView>(policy_id).await
    }
}

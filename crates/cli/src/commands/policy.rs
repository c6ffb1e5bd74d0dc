// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use figment::Figment;
use iomete_data_model::{AccessPolicyView, DataMaskPolicyView, RowFilterPolicyView};
use iomete_data_security::{DataSecurityClient, Error};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{Instrument, info, info_span};

use crate::util::{data_security_client_from_config, print_json, read_document};

#[derive(Parser, Debug)]
pub(super) struct Options {
    #[command(subcommand)]
    subcommand: Subcommand,
}

#[derive(Parser, Debug)]
enum Subcommand {
    /// Manage access policies
    #[command(subcommand)]
    Access(Action),

    /// Manage row filter policies
    #[command(subcommand)]
    Filter(Action),

    /// Manage data mask policies
    #[command(subcommand)]
    Mask(Action),
}

#[derive(clap::Subcommand, Debug)]
enum Action {
    /// List the policies of the workspace
    List,

    /// Show a single policy
    Get {
        #[command(flatten)]
        target: Target,
    },

    /// Create a policy from a YAML or JSON file
    Create {
        /// The file describing the policy
        #[arg(short, long)]
        file: Utf8PathBuf,
    },

    /// Replace a policy with the content of a YAML or JSON file
    Update {
        #[command(flatten)]
        target: Target,

        /// The file describing the new policy
        #[arg(short, long)]
        file: Utf8PathBuf,
    },

    /// Delete a policy
    Delete {
        /// The ID of the policy
        #[arg(long)]
        id: i64,
    },
}

#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
struct Target {
    /// The ID of the policy
    #[arg(long)]
    id: Option<i64>,

    /// The name of the policy
    #[arg(long)]
    name: Option<String>,
}

/// The operations of the Data Security API for one kind of policy
trait ManagedPolicy: Serialize + DeserializeOwned {
    const KIND: &'static str;

    fn id(&self) -> Option<i64>;

    async fn create(client: &DataSecurityClient, policy: &Self) -> Result<Self, Error>;
    async fn list(client: &DataSecurityClient) -> Result<Vec<Self>, Error>;
    async fn get_by_name(client: &DataSecurityClient, name: &str) -> Result<Self, Error>;
    async fn get_by_id(client: &DataSecurityClient, id: i64) -> Result<Self, Error>;
    async fn update_by_name(
        client: &DataSecurityClient,
        name: &str,
        policy: &Self,
    ) -> Result<Self, Error>;
    async fn update_by_id(
        client: &DataSecurityClient,
        id: i64,
        policy: &Self,
    ) -> Result<Self, Error>;
    async fn delete_by_id(client: &DataSecurityClient, id: i64) -> Result<(), Error>;
}

impl ManagedPolicy for AccessPolicyView {
    const KIND: &'static str = "access";

    fn id(&self) -> Option<i64> {
        self.id
    }

    async fn create(client: &DataSecurityClient, policy: &Self) -> Result<Self, Error> {
        client.create_access_policy(policy).await
    }

    async fn list(client: &DataSecurityClient) -> Result<Vec<Self>, Error> {
        client.get_access_policies().await
    }

    async fn get_by_name(client: &DataSecurityClient, name: &str) -> Result<Self, Error> {
        client.get_access_policy_by_name(name).await
    }

    async fn get_by_id(client: &DataSecurityClient, id: i64) -> Result<Self, Error> {
        client.get_access_policy_by_id(id).await
    }

    async fn update_by_name(
        client: &DataSecurityClient,
        name: &str,
        policy: &Self,
    ) -> Result<Self, Error> {
        client.update_access_policy_by_name(name, policy).await
    }

    async fn update_by_id(
        client: &DataSecurityClient,
        id: i64,
        policy: &Self,
    ) -> Result<Self, Error> {
        client.update_access_policy_by_id(id, policy).await
    }

    async fn delete_by_id(client: &DataSecurityClient, id: i64) -> Result<(), Error> {
        client.delete_access_policy_by_id(id).await
    }
}

impl ManagedPolicy for RowFilterPolicyView {
    const KIND: &'static str = "filter";

    fn id(&self) -> Option<i64> {
        self.id
    }

    async fn create(client: &DataSecurityClient, policy: &Self) -> Result<Self, Error> {
        client.create_filter_policy(policy).await
    }

    async fn list(client: &DataSecurityClient) -> Result<Vec<Self>, Error> {
        client.get_filter_policies().await
    }

    async fn get_by_name(client: &DataSecurityClient, name: &str) -> Result<Self, Error> {
        client.get_filter_policy_by_name(name).await
    }

    async fn get_by_id(client: &DataSecurityClient, id: i64) -> Result<Self, Error> {
        client.get_filter_policy_by_id(id).await
    }

    async fn update_by_name(
        client: &DataSecurityClient,
        name: &str,
        policy: &Self,
    ) -> Result<Self, Error> {
        client.update_filter_policy_by_name(name, policy).await
    }

    async fn update_by_id(
        client: &DataSecurityClient,
        id: i64,
        policy: &Self,
    ) -> Result<Self, Error> {
        client.update_filter_policy_by_id(id, policy).await
    }

    async fn delete_by_id(client: &DataSecurityClient, id: i64) -> Result<(), Error> {
        client.delete_filter_policy_by_id(id).await
    }
}

impl ManagedPolicy for DataMaskPolicyView {
    const KIND: &'static str = "mask";

    fn id(&self) -> Option<i64> {
        self.id
    }

    async fn create(client: &DataSecurityClient, policy: &Self) -> Result<Self, Error> {
        client.create_masking_policy(policy).await
    }

    async fn list(client: &DataSecurityClient) -> Result<Vec<Self>, Error> {
        client.get_masking_policies().await
    }

    async fn get_by_name(client: &DataSecurityClient, name: &str) -> Result<Self, Error> {
        client.get_masking_policy_by_name(name).await
    }

    async fn get_by_id(client: &DataSecurityClient, id: i64) -> Result<Self, Error> {
        client.get_masking_policy_by_id(id).await
    }

    async fn update_by_name(
        client: &DataSecurityClient,
        name: &str,
        policy: &Self,
    ) -> Result<Self, Error> {
        client.update_masking_policy_by_name(name, policy).await
    }

    async fn update_by_id(
        client: &DataSecurityClient,
        id: i64,
        policy: &Self,
    ) -> Result<Self, Error> {
        client.update_masking_policy_by_id(id, policy).await
    }

    async fn delete_by_id(client: &DataSecurityClient, id: i64) -> Result<(), Error> {
        client.delete_masking_policy_by_id(id).await
    }
}

impl Options {
    pub async fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        let client = data_security_client_from_config(figment).await?;

        use Subcommand as SC;
        match self.subcommand {
            SC::Access(action) => run_action::<AccessPolicyView>(&client, action).await?,
            SC::Filter(action) => run_action::<RowFilterPolicyView>(&client, action).await?,
            SC::Mask(action) => run_action::<DataMaskPolicyView>(&client, action).await?,
        }

        Ok(ExitCode::SUCCESS)
    }
}

async fn run_action<P: ManagedPolicy>(
    client: &DataSecurityClient,
    action: Action,
) -> anyhow::Result<()> {
    match action {
        Action::List => {
            let span = info_span!("cli.policy.list", policy.kind = P::KIND);
            let policies = P::list(client).instrument(span).await?;
            print_json(&policies).await?;
        }

        Action::Get { target } => {
            let span = info_span!("cli.policy.get", policy.kind = P::KIND);
            let policy = match (target.id, target.name) {
                (Some(id), _) => P::get_by_id(client, id).instrument(span).await?,
                (None, Some(name)) => P::get_by_name(client, &name).instrument(span).await?,
                (None, None) => anyhow::bail!("either --id or --name is required"),
            };
            print_json(&policy).await?;
        }

        Action::Create { file } => {
            let span = info_span!("cli.policy.create", policy.kind = P::KIND);
            let policy: P = read_document(&file).await?;
            let created = P::create(client, &policy).instrument(span).await?;
            info!(policy.id = created.id(), "Policy created");
            print_json(&created).await?;
        }

        Action::Update { target, file } => {
            let span = info_span!("cli.policy.update", policy.kind = P::KIND);
            let policy: P = read_document(&file).await?;
            let updated = match (target.id, target.name) {
                (Some(id), _) => P::update_by_id(client, id, &policy).instrument(span).await?,
                (None, Some(name)) => {
                    P::update_by_name(client, &name, &policy)
                        .instrument(span)
                        .await?
                }
                (None, None) => anyhow::bail!("either --id or --name is required"),
            };
            info!(policy.id = updated.id(), "Policy updated");
            print_json(&updated).await?;
        }

        Action::Delete { id } => {
            let span = info_span!("cli.policy.delete", policy.kind = P::KIND);
            P::delete_by_id(client, id).instrument(span).await?;
            info!(policy.id = id, "Policy deleted");
        }
    }

    Ok(())
}

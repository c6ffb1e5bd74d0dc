// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! A client for the IOMETE Data Security API.
//!
//! The API is served by the controller of each workspace. The controller host
//! is looked up once, when connecting, from the account service:
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use iomete_data_security::DataSecurityClient;
//!
//! let http_client = iomete_http::reqwest_client();
//! let client = DataSecurityClient::connect(http_client, "my-workspace", "my-api-key").await?;
//!
//! for policy in client.get_access_policies().await? {
//!     println!("{}", policy.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Each policy kind (access, row filter, data mask) gets the same set of
//! operations. None of them validate anything locally: a policy the server
//! doesn't accept comes back as a [`ClientError`].
//!
//! [`ClientError`]: iomete_http::ClientError

#![allow(clippy::module_name_repetitions)]

mod access;
pub mod error;
mod filter;
mod masking;
mod policy;

use iomete_data_model::JsonMap;
use iomete_http::ApiClient;
use serde_json::Value;
use url::Url;

pub use self::error::{ConnectError, Error};
use self::policy::Policy;

/// Base URL of the account service, used to find the controller of a
/// workspace
pub const DEFAULT_ACCOUNT_ENDPOINT: &str = "https://account.iomete.com";

/// Manages the data security policies of a workspace.
#[derive(Debug, Clone)]
pub struct DataSecurityClient {
    api: ApiClient,
    workspace_id: String,
    base_url: Url,
    endpoint: String,
}

impl DataSecurityClient {
    /// Create a client for a workspace whose controller is already known.
    ///
    /// # Parameters
    ///
    /// * `http_client` - The reqwest client to use for making HTTP requests.
    /// * `base_url` - The base URL of the workspace controller.
    /// * `workspace_id` - The ID of the workspace.
    /// * `api_key` - The API key sent as a bearer token.
    #[must_use]
    pub fn new(
        http_client: reqwest::Client,
        base_url: Url,
        workspace_id: &str,
        api_key: &str,
    ) -> Self {
        let endpoint = format!(
            "{}/api/v1/workspaces/{}/data-security",
            base_url.as_str().trim_end_matches('/'),
            urlencoding::encode(workspace_id),
        );

        Self {
            api: ApiClient::new(http_client, api_key),
            workspace_id: workspace_id.to_owned(),
            base_url,
            endpoint,
        }
    }

    /// Look up the controller of the workspace and create a client for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the account service can't be reached, rejects the
    /// call, or doesn't return a usable controller endpoint.
    pub async fn connect(
        http_client: reqwest::Client,
        workspace_id: &str,
        api_key: &str,
    ) -> Result<Self, ConnectError> {
        Self::connect_with_account_endpoint(
            http_client,
            DEFAULT_ACCOUNT_ENDPOINT,
            workspace_id,
            api_key,
        )
        .await
    }

    /// Same as [`Self::connect`], against another account service.
    ///
    /// # Errors
    ///
    /// Returns an error if the account service can't be reached, rejects the
    /// call, or doesn't return a usable controller endpoint.
    #[tracing::instrument(
        name = "data_security.connect",
        skip_all,
        fields(
            workspace.id = workspace_id,
            account.endpoint = account_endpoint,
        ),
        err(Debug),
    )]
    pub async fn connect_with_account_endpoint(
        http_client: reqwest::Client,
        account_endpoint: &str,
        workspace_id: &str,
        api_key: &str,
    ) -> Result<Self, ConnectError> {
        let api = ApiClient::new(http_client.clone(), api_key);
        let info_url = format!(
            "{}/api/v1/workspaces/{}/info",
            account_endpoint.trim_end_matches('/'),
            urlencoding::encode(workspace_id),
        );

        let info = api.get(&info_url).await?;
        let controller_endpoint = info
            .as_ref()
            .and_then(|info| info.get("controller_endpoint"))
            .and_then(Value::as_str)
            .ok_or(ConnectError::MissingControllerEndpoint)?;

        tracing::debug!(controller_endpoint, "Resolved workspace controller");

        let base_url = Url::parse(&format!("https://{controller_endpoint}")).map_err(|source| {
            ConnectError::InvalidControllerEndpoint {
                endpoint: controller_endpoint.to_owned(),
                source,
            }
        })?;

        Ok(Self::new(http_client, base_url, workspace_id, api_key))
    }

    /// The ID of the workspace this client manages
    #[must_use]
    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    /// The base URL of the workspace controller
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The root of the Data Security API for this workspace
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn policies_url<P: Policy>(&self) -> String {
        format!("{}/{}/policy", self.endpoint, P::PATH)
    }

    fn policy_url<P: Policy>(&self, policy_id: i64) -> String {
        format!("{}/{policy_id}", self.policies_url::<P>())
    }

    fn policy_name_url<P: Policy>(&self, policy_name: &str) -> String {
        format!(
            "{}/name/{}",
            self.policies_url::<P>(),
            urlencoding::encode(policy_name)
        )
    }

    async fn create<P: Policy>(&self, policy: &P) -> Result<P, Error> {
        let payload = policy.to_map()?;
        let data = self.api.post(&self.policies_url::<P>(), &payload).await?;
        decode_policy(data)
    }

    async fn list<P: Policy>(&self) -> Result<Vec<P>, Error> {
        let data = self.api.get(&self.policies_url::<P>()).await?;
        decode_policies(data)
    }

    async fn get_by_name<P: Policy>(&self, policy_name: &str) -> Result<P, Error> {
        let data = self.api.get(&self.policy_name_url::<P>(policy_name)).await?;
        decode_policy(data)
    }

    async fn get_by_id<P: Policy>(&self, policy_id: i64) -> Result<P, Error> {
        let data = self.api.get(&self.policy_url::<P>(policy_id)).await?;
        decode_policy(data)
    }

    async fn update_by_name<P: Policy>(&self, policy_name: &str, policy: &P) -> Result<P, Error> {
        let payload = policy.to_map()?;
        let data = self
            .api
            .put(&self.policy_name_url::<P>(policy_name), &payload)
            .await?;
        decode_policy(data)
    }

    async fn update_by_id<P: Policy>(&self, policy_id: i64, policy: &P) -> Result<P, Error> {
        let payload = policy.to_map()?;
        let data = self.api.put(&self.policy_url::<P>(policy_id), &payload).await?;
        decode_policy(data)
    }

    async fn delete_by_id<P: Policy>(&self, policy_id: i64) -> Result<(), Error> {
        self.api.delete(&self.policy_url::<P>(policy_id)).await?;
        Ok(())
    }
}

fn decode_policy<P: JsonMap>(data: Option<Value>) -> Result<P, Error> {
    match data {
        Some(Value::Object(map)) => Ok(P::from_map(map)?),
        _ => Err(Error::UnexpectedResponse {
            expected: "a policy object",
        }),
    }
}

fn decode_policies<P: JsonMap>(data: Option<Value>) -> Result<Vec<P>, Error> {
    match data {
        // Keep the order the server gave us
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| decode_policy(Some(item)))
            .collect(),
        _ => Err(Error::UnexpectedResponse {
            expected: "a list of policies",
        }),
    }
}

// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use http::Method;
use serde::Serialize;
use serde_json::Value;

use crate::{CallError, RequestBuilderExt as _, ResponseExt as _};

/// Issues authenticated JSON calls against the IOMETE APIs.
///
/// Every request carries the API key as a bearer token. This is the only
/// place where error responses get translated, into a [`ClientError`].
///
/// [`ClientError`]: crate::ClientError
#[derive(Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    api_key: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(http_client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
        }
    }

    fn builder(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.http_client
            .request(method, url)
            .bearer_auth(&self.api_key)
    }

    /// Call the API and return the parsed JSON body, if there is one.
    ///
    /// # Parameters
    ///
    /// * `method` - The HTTP method to use.
    /// * `url` - The full URL to call.
    /// * `payload` - An optional value sent as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::Client`] if the server responds with a non-2xx
    /// status, [`CallError::Http`] if the request fails at the transport level
    /// and [`CallError::Json`] if the payload or the response body isn't valid
    /// JSON.
    pub async fn call<B>(
        &self,
        method: Method,
        url: &str,
        payload: Option<&B>,
    ) -> Result<Option<Value>, CallError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.builder(method, url);
        if let Some(payload) = payload {
            // Serialize here rather than with `RequestBuilder::json` so that
            // serialization errors are reported as such
            let body = serde_json::to_vec(payload)?;
            request = request
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request
            .send_traced()
            .await?
            .error_for_client_error()
            .await?;

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        Ok(Some(serde_json::from_slice(&body)?))
    }

    /// Shorthand for a `GET` without a body.
    ///
    /// # Errors
    ///
    /// See [`Self::call`].
    pub async fn get(&self, url: &str) -> Result<Option<Value>, CallError> {
        self.call::<Value>(Method::GET, url, None).await
    }

    /// Shorthand for a `DELETE` without a body.
    ///
    /// # Errors
    ///
    /// See [`Self::call`].
    pub async fn delete(&self, url: &str) -> Result<Option<Value>, CallError> {
        self.call::<Value>(Method::DELETE, url, None).await
    }

    /// Shorthand for a `POST` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::call`].
    pub async fn post<B>(&self, url: &str, payload: &B) -> Result<Option<Value>, CallError>
    where
        B: Serialize + ?Sized,
    {
        self.call(Method::POST, url, Some(payload)).await
    }

    /// Shorthand for a `PUT` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::call`].
    pub async fn put<B>(&self, url: &str, payload: &B) -> Result<Option<Value>, CallError>
    where
        B: Serialize + ?Sized,
    {
        self.call(Method::PUT, url, Some(payload)).await
    }
}

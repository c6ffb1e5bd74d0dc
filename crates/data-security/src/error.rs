// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! The error types used in this crate.

use http::StatusCode;
use iomete_http::{CallError, ClientError};
use thiserror::Error;

/// All possible errors when resolving the workspace controller.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// The account service call failed.
    #[error("failed to fetch the workspace info")]
    Lookup(#[from] CallError),

    /// The account service answered without a `controller_endpoint`.
    #[error("the workspace info has no controller endpoint")]
    MissingControllerEndpoint,

    /// The controller endpoint doesn't make a valid URL.
    #[error("invalid controller endpoint {endpoint:?}")]
    InvalidControllerEndpoint {
        /// The endpoint returned by the account service
        endpoint: String,

        /// Why it couldn't be parsed
        #[source]
        source: url::ParseError,
    },
}

/// All possible errors when calling the Data Security API.
#[derive(Debug, Error)]
pub enum Error {
    /// The call failed, either because the server rejected it or because of
    /// the transport.
    #[error(transparent)]
    Call(#[from] CallError),

    /// A policy couldn't be converted to or from its JSON form.
    #[error("could not convert the policy to or from JSON")]
    Json(#[from] serde_json::Error),

    /// The server answered with a body of the wrong shape.
    #[error("unexpected response from the server, expected {expected}")]
    UnexpectedResponse {
        /// What the body should have been
        expected: &'static str,
    },
}

impl Error {
    /// The [`ClientError`] behind this error, if the server responded with a
    /// non-2xx status
    #[must_use]
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Call(error) => error.client_error(),
            _ => None,
        }
    }

    /// The HTTP status code returned by the server, if it rejected the call
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.client_error().map(ClientError::status)
    }
}

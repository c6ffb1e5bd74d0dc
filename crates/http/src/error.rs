// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::fmt::Display;

use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// What the server sent back along with an error status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorBody {
    /// The body parsed as JSON
    Json(Value),

    /// The body wasn't JSON, kept as-is
    Text(String),

    /// The body was empty
    Empty,
}

impl ErrorBody {
    fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            return Self::Empty;
        }

        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }

    /// Find a human-readable message in the body, if any.
    ///
    /// Looks at the `message` then `error` fields of a JSON body, or returns
    /// the raw text.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Json(value) => value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(Value::as_str),
            Self::Text(text) => Some(text),
            Self::Empty => None,
        }
    }
}

impl Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Empty => f.write_str("(empty body)"),
        }
    }
}

/// An error response from an IOMETE API.
///
/// Every non-2xx response ends up as this error, whether it is a validation
/// failure, a missing resource or a server fault. Look at [`Self::status`]
/// and [`Self::body`] to tell them apart.
#[derive(Debug, Error)]
#[error("API responded with {status}: {body}")]
pub struct ClientError {
    status: StatusCode,
    body: ErrorBody,
}

impl ClientError {
    #[must_use]
    pub fn new(status: StatusCode, body: ErrorBody) -> Self {
        Self { status, body }
    }

    /// The HTTP status code of the response
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The diagnostic payload of the response
    #[must_use]
    pub fn body(&self) -> &ErrorBody {
        &self.body
    }

    /// Returns `true` if the server responded with a 404
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }
}

/// Everything that can go wrong while calling an IOMETE API.
#[derive(Debug, Error)]
pub enum CallError {
    /// The server responded with a non-2xx status code.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The request could not be sent, or the response could not be read.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The payload could not be serialized, or the response wasn't valid
    /// JSON.
    #[error("invalid JSON payload")]
    Json(#[from] serde_json::Error),
}

impl CallError {
    /// The [`ClientError`] behind this error, if the server responded
    #[must_use]
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client(error) => Some(error),
            _ => None,
        }
    }

    /// The HTTP status code returned by the server, if it responded
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.client_error().map(ClientError::status)
    }
}

/// An extension trait for [`reqwest::Response`] to turn error responses into
/// [`ClientError`]s.
pub trait ResponseExt: Sized {
    /// Return the response as-is if it has a 2xx status, or a
    /// [`ClientError`] carrying the status and body otherwise.
    fn error_for_client_error(self) -> impl Future<Output = Result<Self, ClientError>> + Send;
}

impl ResponseExt for reqwest::Response {
    async fn error_for_client_error(self) -> Result<Self, ClientError> {
        let status = self.status();
        if status.is_success() {
            return Ok(self);
        }

        // If we can't even read the body, the status is all we have
        let body = self
            .text()
            .await
            .map_or(ErrorBody::Empty, ErrorBody::from_text);

        Err(ClientError::new(status, body))
    }
}

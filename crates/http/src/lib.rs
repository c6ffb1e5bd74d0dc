// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Utilities to do HTTP requests against the IOMETE APIs

#![deny(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

mod client;
mod error;
mod reqwest;

pub use self::{
    client::ApiClient,
    error::{CallError, ClientError, ErrorBody, ResponseExt},
    reqwest::{RequestBuilderExt, client as reqwest_client},
};

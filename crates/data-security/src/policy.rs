// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use iomete_data_model::{AccessPolicyView, DataMaskPolicyView, JsonMap, RowFilterPolicyView};

/// A policy kind served by the Data Security API
pub(crate) trait Policy: JsonMap {
    /// Path segment of the kind, under the Data Security endpoint
    const PATH: &'static str;
}

impl Policy for AccessPolicyView {
    const PATH: &'static str = "access";
}

impl Policy for RowFilterPolicyView {
    const PATH: &'static str = "filter";
}

impl Policy for DataMaskPolicyView {
    const PATH: &'static str = "mask";
}

// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Models for the policies managed through the IOMETE Data Security API.
//!
//! Every policy view is a root aggregate which owns its resources and items,
//! and converts to and from the JSON object sent on the wire through
//! [`JsonMap`].

#![allow(clippy::module_name_repetitions)]

mod access;
mod common;
mod data_mask;
mod map;
mod row_filter;
#[cfg(test)]
mod test_utils;

pub use self::{
    access::{
        AccessPolicyItem, AccessPolicyResource, AccessPolicyView, AccessType,
        InvalidAccessTypeError,
    },
    common::{InvalidResourceInclusionTypeError, ResourceInclusionType, ValidityPeriod},
    data_mask::{DataMaskPolicyItem, DataMaskPolicyResource, DataMaskPolicyView},
    map::JsonMap,
    row_filter::{RowFilterPolicyItem, RowFilterPolicyResource, RowFilterPolicyView},
};

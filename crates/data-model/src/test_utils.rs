// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::fmt::Debug;

use crate::JsonMap;

/// Check that the model converts to the expected JSON object, and that this
/// object converts back to the same model.
#[track_caller]
pub(crate) fn assert_json_map<T: JsonMap + PartialEq + Debug>(
    got: &T,
    expected_value: serde_json::Value,
) {
    let got_map = got.to_map().expect("could not convert model to a JSON map");
    assert_eq!(serde_json::Value::Object(got_map.clone()), expected_value);

    let keys: Vec<&String> = got_map.keys().collect();
    let expected_keys: Vec<&String> = expected_value
        .as_object()
        .expect("expected value is not an object")
        .keys()
        .collect();
    assert_eq!(keys, expected_keys, "keys are not in the expected order");

    let back = T::from_map(got_map).expect("could not convert JSON map back to the model");
    assert_eq!(got, &back);
}

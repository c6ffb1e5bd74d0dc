// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned, ser::Error as _};
use serde_json::{Map, Value};

/// Conversion of a model to and from the JSON object sent on the wire.
///
/// Keys are the field names, in declaration order. Decoding is lenient:
/// unknown keys are ignored, missing optional fields become [`None`] and
/// missing lists become empty.
pub trait JsonMap: Serialize + DeserializeOwned {
    /// Convert the model to an ordered JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if the model doesn't serialize to a JSON object.
    fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde_json::Error::custom(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    /// Build the model back from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or has the wrong type.
    fn from_map(map: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(map))
    }
}

/// Deserialize an explicit `null` as the default value, so that lists sent as
/// `null` decode as empty lists.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

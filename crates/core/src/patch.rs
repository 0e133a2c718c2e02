//! Shallow JSON merge for partial updates

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Overlay the top-level fields of `patch` onto `current`
///
/// Fields absent from the patch keep their current value; fields present
/// (including explicit `null`) replace it. The merged object is then
/// deserialized back into `T`, so the patch cannot produce a value the type
/// would reject.
pub fn merge_patch<T>(current: &T, patch: &Value) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let Value::Object(fields) = patch else {
        return Err(Error::InvalidInput("updates must be a JSON object".to_string()));
    };

    let mut merged = serde_json::to_value(current)?;
    if let Value::Object(target) = &mut merged {
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
    }

    Ok(serde_json::from_value(merged)?)
}

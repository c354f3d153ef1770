//! Field deserializers that turn a wrongly-typed JSON value into an absent
//! one, so the form's own validation reports it with the field's message.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A JSON string, or `None` for `null` and every non-string type.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Like [`string`], with anything but a string read as `""`.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string(deserializer)?.unwrap_or_default())
}

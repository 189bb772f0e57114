/*
[INPUT]:  Loosely typed JSON scalars from exchange responses
[OUTPUT]: Normalized String / bool values for wire structs
[POS]:    Data layer - shared serde adapters
[UPDATE]: When an endpoint starts mixing scalar encodings
*/

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept `"51000"`, `51000` or `null` and normalize to an optional string
pub fn option_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => Ok(Some(raw)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Same as [`option_string_or_number`] but missing/null becomes an empty string
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    option_string_or_number(deserializer).map(Option::unwrap_or_default)
}

/// Accept `true`, `"true"`, `"false"` or `null`
pub fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(flag)) => Ok(flag),
        Some(Value::String(raw)) => match raw.trim() {
            "" | "false" => Ok(false),
            "true" => Ok(true),
            other => Err(D::Error::custom(format!("invalid boolean string {other:?}"))),
        },
        Some(other) => Err(D::Error::custom(format!("expected boolean, got {other}"))),
    }
}

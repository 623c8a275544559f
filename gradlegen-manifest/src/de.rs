//! Shared deserializers.

use serde::{Deserialize, Deserializer, de::Error};

/// Accept a TOML string, integer or float and keep its textual form.
///
/// SDK levels and tool versions are written verbatim into the build script,
/// so `compile_sdk_version = 23` and `compile_sdk_version = "23"` are equivalent.
pub(crate) fn scalar<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match toml::Value::deserialize(deserializer)? {
        toml::Value::String(s) => Ok(s),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string or a number, found {}",
            other.type_str()
        ))),
    }
}

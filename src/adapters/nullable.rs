//! Serde helpers shared by the directory models

use serde::{Deserialize, Deserializer};

/// Deserialize an explicit `null` the same way as an absent field.
///
/// Use together with `#[serde(default)]`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! Deserialization helpers shared by the response types.

use serde::{Deserialize, Deserializer};

/// Decode an explicit `null` the same way as a missing key: as `T::default()`.
///
/// Pair with container-level `#[serde(default)]`, which only covers keys that
/// are absent.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! Serde helpers for the host's wire conventions.

/// The sentinel string the host uses for "no target".
pub const NO_TARGET: &str = "0";

/// Encode/decode `Option<TaskId>` using the host's `"0"` sentinel.
///
/// The host predates optional fields: "no target" travels as the string
/// `"0"` (occasionally as an empty string).  Decoding maps both to
/// `None`; encoding always writes `"0"` so every host version parses it.
pub mod target_lock {
    use fetch_core::TaskId;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::NO_TARGET;

    pub fn serialize<S: Serializer>(
        value: &Option<TaskId>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(task) => serializer.serialize_str(task.as_str()),
            None       => serializer.serialize_str(NO_TARGET),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<TaskId>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() || raw == NO_TARGET {
            Ok(None)
        } else {
            Ok(Some(TaskId::new(raw)))
        }
    }
}

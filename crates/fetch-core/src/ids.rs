//! Strongly typed identifier wrappers with a total, fleet-wide order.
//!
//! Entity ids arrive from the host as strings.  Each wrapper caches a
//! numeric ordering key at construction: ids that parse as unsigned
//! integers rank numerically; anything that does not parse maps to a
//! `u64::MAX` sentinel key and falls back to lexicographic order among
//! its kind.  The order is therefore total, and — critically — every
//! agent in the fleet ranks the same pair of ids the same way, which the
//! claim tournament relies on for convergence.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Ordering key assigned to ids that do not parse as unsigned integers.
const NON_NUMERIC_KEY: u64 = u64::MAX;

/// Generate a typed ID wrapper around a host-supplied string.
macro_rules! keyed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, Debug)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(from = "String", into = "String")
        )]
        $vis struct $name {
            raw: String,
            key: u64,
        }

        impl $name {
            /// Wrap a host id, caching its numeric ordering key.
            pub fn new(raw: impl Into<String>) -> Self {
                let raw = raw.into();
                let key = raw.parse::<u64>().unwrap_or(NON_NUMERIC_KEY);
                Self { raw, key }
            }

            /// The id exactly as the host supplied it.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.raw
            }

            /// Numeric ordering key: the parsed value, or `u64::MAX` for
            /// ids that are not unsigned integers.
            #[inline]
            pub fn sort_key(&self) -> u64 {
                self.key
            }
        }

        // `key` is derived from `raw`, so identity is the raw string alone.
        impl PartialEq for $name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.raw == other.raw
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.raw.hash(state);
            }
        }

        impl Ord for $name {
            /// Numeric ids first (ascending), then malformed ids by raw
            /// string.  Total: no two distinct ids compare equal.
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                (self.key, &self.raw).cmp(&(other.key, &other.raw))
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::new(raw)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.raw
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.raw)
            }
        }
    };
}

keyed_id! {
    /// Identity of one agent in the fleet.
    pub struct AgentId;
}

keyed_id! {
    /// Identity of one task (a placeable item on the floor).
    pub struct TaskId;
}

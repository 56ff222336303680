//! Observable lifecycle phase.
//!
//! ```text
//! Seeking → Targeting → Arriving ─(host picks up)→ Delivering → Dropping
//!    ▲                                                              │
//!    └──────────────────────(host drops off)───────────────────────┘
//! ```
//!
//! The phase is derived fresh each tick from the carrying flag, the
//! claim outcome, and distance; it is recorded in the agent context for
//! observability, never consulted to make the next decision.

/// Where in the pickup/delivery cycle an agent currently is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Phase {
    /// No target held; heading back to spawn until work appears.
    #[default]
    Seeking,
    /// A task is locked; moving toward it.
    Targeting,
    /// Within pickup range of the locked task; asking the host to grab it.
    Arriving,
    /// Carrying; moving toward the chosen delivery zone.
    Delivering,
    /// Within drop range of the zone; asking the host to release.
    Dropping,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Seeking    => "seeking",
            Phase::Targeting  => "targeting",
            Phase::Arriving   => "arriving",
            Phase::Delivering => "delivering",
            Phase::Dropping   => "dropping",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

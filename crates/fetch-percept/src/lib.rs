//! `fetch-percept` — the perception snapshot delivered to each agent.
//!
//! The perception is the **only** information an agent receives about the
//! world: if something is not in the snapshot, the agent does not know
//! about it.  The snapshot is read-only and one tick stale — it reflects
//! what every peer committed at the end of the *previous* tick, never
//! what they are deciding concurrently.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`snapshot`] | `Perception` and the per-entity sighting structs     |
//! | [`wire`]     | serde helpers for the host's `"0"` no-target sentinel |

pub mod snapshot;
pub mod wire;


pub use snapshot::{DeliveryZone, Obstacle, Perception, PeerSighting, TaskSighting};

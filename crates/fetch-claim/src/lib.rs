//! `fetch-claim` — decentralized task claiming.
//!
//! Every agent runs the identical deterministic tournament over the same
//! read-only snapshot, with no messages and no locks.  Convergence to a
//! duplicate-free allocation is a cross-tick property: two agents may win
//! the same task in the same tick (the snapshot is one tick stale), but
//! each sees the other's reservation in the next snapshot, both release,
//! and the following tournament has exactly one winner.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`rank`]     | `beats` — the fleet-wide tournament comparator      |
//! | [`resolver`] | `ClaimResolver`, `Claim`                            |

pub mod rank;
pub mod resolver;


pub use rank::beats;
pub use resolver::{Claim, ClaimResolver};

//! `fetch-avoid` — local repulsion field for obstacle and peer avoidance.
//!
//! Purely local and reactive: every nearby entity pushes the agent away
//! with a linear falloff, contributions sum, and the resulting offset is
//! added to the movement target.  No path planning, no lookahead — O(k)
//! per tick for k sensed entities.  Symmetric opposing pushes can cancel
//! into a temporary stall; that is accepted here and recovered by the
//! outer loop re-deciding on a later tick.
//!
//! # Crate layout
//!
//! | Module    | Contents                              |
//! |-----------|---------------------------------------|
//! | [`field`] | `AvoidanceConfig`, `AvoidanceField`   |

pub mod field;


pub use field::{AvoidanceConfig, AvoidanceField, MIN_SEPARATION};

//! `fetch-decide` — decision assembly and the batch boundary.
//!
//! # Two-phase batch
//!
//! ```text
//! for each tick:
//!   ① Evaluate — for every agent, run claim → lifecycle → avoidance
//!                against the shared read-only snapshot (parallel with
//!                the `parallel` feature; evaluation never mutates).
//!   ② Commit   — in ascending AgentId order: store the updated agent
//!                context, substitute the safe stop/none decision for
//!                any agent whose evaluation failed.
//! ```
//!
//! The split makes the batch result independent of evaluation order, and
//! confines every fault to the one agent that raised it.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                            |
//! |------------|---------------------------------------------------|
//! | `parallel` | Runs the evaluate phase on Rayon's thread pool.   |
//!
//! # Crate layout
//!
//! | Module       | Contents                                  |
//! |--------------|-------------------------------------------|
//! | [`decision`] | `Decision`, `Movement`, `Action` wire types |
//! | [`engine`]   | `EngineConfig`, `DecisionEngine`          |
//! | [`error`]    | `DecideError`, `DecideResult`             |

pub mod decision;
pub mod engine;
pub mod error;

#[cfg(test)]
mod tests;

pub use decision::{Action, Decision, Movement};
pub use engine::{DecisionEngine, EngineConfig};
pub use error::{DecideError, DecideResult};

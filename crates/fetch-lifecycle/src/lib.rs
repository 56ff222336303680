//! `fetch-lifecycle` — the pickup/delivery cycle.
//!
//! Turns "have a target or not / carrying or not" plus distance into a
//! movement gait and a manipulator action, and owns the only mutable
//! state in the whole core: the per-agent context map (target lock, last
//! delivery destination, phase).  The map is volatile by design — it
//! lives exactly as long as the process, and a restart loses all locks;
//! the fleet simply re-converges over the next ticks.
//!
//! # Crate layout
//!
//! | Module      | Contents                                     |
//! |-------------|----------------------------------------------|
//! | [`phase`]   | `Phase` — the cycle's observable state       |
//! | [`context`] | `AgentContext`, `ContextStore`               |
//! | [`planner`] | `plan` — one agent's objective for one tick  |

pub mod context;
pub mod phase;
pub mod planner;


pub use context::{AgentContext, ContextStore};
pub use phase::Phase;
pub use planner::{Objective, plan};

//! `fetch-core` — foundational types for the `rust_fetch` decision core.
//!
//! This crate is a dependency of every other `fetch-*` crate.  It
//! intentionally has no `fetch-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `AgentId`, `TaskId` — totally ordered string ids  |
//! | [`vec2`]   | `Vec2`, squared/Euclidean distance                |
//! | [`tick`]   | `Tick` — discrete decision-cycle counter          |
//! | [`motion`] | `MovementKind`, `ActionKind` wire enums           |
//! | [`config`] | `DecisionConfig`, `ClaimPolicy`, `TravelGait`     |
//! | [`error`]  | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |
//!           | Required by `fetch-percept` and `fetch-decide`.     |

pub mod config;
pub mod error;
pub mod ids;
pub mod motion;
pub mod tick;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ClaimPolicy, DecisionConfig, TravelGait};
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, TaskId};
pub use motion::{ActionKind, MovementKind};
pub use tick::Tick;
pub use vec2::Vec2;

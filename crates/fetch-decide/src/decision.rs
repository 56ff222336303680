//! The per-agent decision record consumed by the host.

use fetch_core::{ActionKind, MovementKind, TaskId, Vec2};
use fetch_percept::wire;
use serde::{Deserialize, Serialize};

/// Movement directive: a gait and a ground-plane target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    #[serde(rename = "type")]
    pub kind: MovementKind,
    pub target_x: f32,
    pub target_z: f32,
}

/// Manipulator directive.  `target_id` doubles as the claim broadcast:
/// the host persists it into every peer's next snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    #[serde(rename = "target_id", with = "wire::target_lock")]
    pub target: Option<TaskId>,
}

/// One agent's complete output for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub movement: Movement,
    pub action: Action,
}

impl Decision {
    pub fn new(
        movement: MovementKind,
        target:   Vec2,
        action:   ActionKind,
        task:     Option<TaskId>,
    ) -> Self {
        Self {
            movement: Movement { kind: movement, target_x: target.x, target_z: target.z },
            action:   Action { kind: action, target: task },
        }
    }

    /// The safe substitute emitted when an agent's evaluation fails:
    /// stop where you are (the host ignores the target while stopped),
    /// do nothing, publish no claim.
    pub fn halt() -> Self {
        Self::new(MovementKind::Stop, Vec2::ZERO, ActionKind::None, None)
    }
}

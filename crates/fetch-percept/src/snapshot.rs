//! Per-tick perception payload and per-entity sighting types.
//!
//! Every input field carries `#[serde(default)]`: a field the host omits
//! decodes to a documented default instead of failing the whole agent.

use std::collections::BTreeMap;

use fetch_core::{AgentId, TaskId, Vec2};
use serde::{Deserialize, Serialize};

use crate::wire;

// ── Sightings ─────────────────────────────────────────────────────────────────

/// A visible, claimable item on the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSighting {
    pub id: TaskId,
    #[serde(default)]
    pub position: Vec2,
}

/// A delivery zone.  Global, static for the run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeliveryZone {
    #[serde(default)]
    pub position: Vec2,
}

/// A static obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Obstacle {
    #[serde(default)]
    pub position: Vec2,
}

/// Another agent's public state as committed at the end of the previous
/// tick.  A stale, eventually-consistent read — never a live view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeerSighting {
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub carrying: bool,
    /// The task this peer publicly holds, if any.
    #[serde(default, with = "wire::target_lock")]
    pub current_target_id: Option<TaskId>,
}

// ── Perception ────────────────────────────────────────────────────────────────

/// The complete per-agent, per-tick input to the decision core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Perception {
    /// This agent's own id.
    pub id: AgentId,
    /// This agent's position on the ground plane.
    pub position: Vec2,
    /// Where the agent was spawned — the fallback destination when there
    /// is nothing to do.
    pub spawn: Vec2,
    /// Whether the agent currently carries an item.
    pub carrying: bool,
    /// Items within sensing range this tick.
    pub tasks: Vec<TaskSighting>,
    /// All delivery zones.
    pub delivery_zones: Vec<DeliveryZone>,
    /// Static obstacles within sensing range.
    pub obstacles: Vec<Obstacle>,
    /// Every other agent's committed public state, keyed by id.
    pub peers: BTreeMap<AgentId, PeerSighting>,
    /// The target this agent itself committed last tick (echoed back by
    /// the host so a restarted decision process can resynchronize).
    #[serde(with = "wire::target_lock")]
    pub current_target_id: Option<TaskId>,
}

impl Default for Perception {
    fn default() -> Self {
        Self {
            id:                AgentId::new(""),
            position:          Vec2::ZERO,
            spawn:             Vec2::ZERO,
            carrying:          false,
            tasks:             Vec::new(),
            delivery_zones:    Vec::new(),
            obstacles:         Vec::new(),
            peers:             BTreeMap::new(),
            current_target_id: None,
        }
    }
}

impl Perception {
    /// Look up a visible task by id.
    pub fn task(&self, id: &TaskId) -> Option<&TaskSighting> {
        self.tasks.iter().find(|t| &t.id == id)
    }
}

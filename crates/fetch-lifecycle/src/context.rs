//! Per-agent persisted context.
//!
//! The decision core is stateless across ticks except for this map: one
//! small record per agent, created on first contact, replaced every tick.
//! Peers never read each other's context — commitments travel only
//! through the host snapshot.

use fetch_core::{AgentId, TaskId, Tick, Vec2};
use rustc_hash::FxHashMap;

use crate::phase::Phase;

// ── AgentContext ──────────────────────────────────────────────────────────────

/// What one agent remembers between ticks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentContext {
    /// The task locked by the last resolution pass, if any.
    pub locked_target: Option<TaskId>,
    /// The last delivery destination actually chosen — retained so a
    /// carrying agent keeps heading somewhere sensible even if every
    /// zone momentarily drops out of its snapshot.
    pub last_destination: Option<Vec2>,
    /// Lifecycle phase as of the last decision (observability only).
    pub phase: Phase,
    /// The tick this context was last written.
    pub last_seen: Tick,
}

impl AgentContext {
    /// Fresh context for an agent seen for the first time at `now`.
    pub fn new(now: Tick) -> Self {
        Self {
            locked_target:    None,
            last_destination: None,
            phase:            Phase::Seeking,
            last_seen:        now,
        }
    }
}

// ── ContextStore ──────────────────────────────────────────────────────────────

/// The context map, keyed by agent id.
///
/// In-memory only: there is no persistence format and no recovery
/// procedure.  Restarting the process forgets every lock, which is safe
/// — the claim protocol re-converges from the host snapshot alone.
#[derive(Debug, Default)]
pub struct ContextStore {
    inner: FxHashMap<AgentId, AgentContext>,
}

impl ContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an agent's context, if it has one.
    pub fn get(&self, agent: &AgentId) -> Option<&AgentContext> {
        self.inner.get(agent)
    }

    /// The context an evaluation should start from: the stored one, or a
    /// fresh record for an agent seen for the first time.  Read-only —
    /// the evaluation phase must not mutate shared state.
    pub fn snapshot(&self, agent: &AgentId, now: Tick) -> AgentContext {
        self.inner
            .get(agent)
            .cloned()
            .unwrap_or_else(|| AgentContext::new(now))
    }

    /// Write back an agent's context after its decision committed.
    pub fn commit(&mut self, agent: AgentId, context: AgentContext) {
        self.inner.insert(agent, context);
    }

    /// Drop contexts not written for more than `max_idle` ticks.
    /// Returns how many were removed.  Optional — without sweeping the
    /// map grows with the set of agents ever seen, which is usually fine.
    pub fn sweep_stale(&mut self, now: Tick, max_idle: u64) -> usize {
        let before = self.inner.len();
        self.inner.retain(|_, ctx| now.since(ctx.last_seen) <= max_idle);
        before - self.inner.len()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

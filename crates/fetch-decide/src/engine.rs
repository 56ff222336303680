//! The `DecisionEngine` and its evaluate/commit batch loop.

use std::collections::BTreeMap;

use fetch_avoid::{AvoidanceConfig, AvoidanceField};
use fetch_claim::ClaimResolver;
use fetch_core::{AgentId, DecisionConfig, Tick};
use fetch_lifecycle::{AgentContext, ContextStore, plan};
use fetch_percept::Perception;

use crate::decision::Decision;
use crate::error::{DecideError, DecideResult};

// ── EngineConfig ──────────────────────────────────────────────────────────────

/// Everything configurable about the decision core, in one place.
/// Deserializable so the application can load it straight from its
/// config file; omitted sections fall back to the defaults.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub decision:  DecisionConfig,
    pub avoidance: AvoidanceConfig,
}

impl EngineConfig {
    fn validate(&self) -> DecideResult<()> {
        self.decision.validate()?;
        self.avoidance.validate()?;
        Ok(())
    }
}

// ── DecisionEngine ────────────────────────────────────────────────────────────

/// The long-lived decision core: configuration plus the per-agent context
/// map.  One instance serves the whole fleet; the host calls it once per
/// tick with every agent's perception.
pub struct DecisionEngine {
    config:   EngineConfig,
    contexts: ContextStore,
}

impl DecisionEngine {
    /// Build an engine, rejecting configurations the algorithms cannot
    /// run on (negative radii, out-of-range tolerance).
    pub fn new(config: EngineConfig) -> DecideResult<Self> {
        config.validate()?;
        Ok(Self { config, contexts: ContextStore::new() })
    }

    /// An engine with the default configuration.  Infallible: the
    /// defaults always validate.
    pub fn with_defaults() -> Self {
        Self { config: EngineConfig::default(), contexts: ContextStore::new() }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read an agent's persisted context (host introspection and tests).
    pub fn context(&self, agent: &AgentId) -> Option<&AgentContext> {
        self.contexts.get(agent)
    }

    /// Drop contexts for agents not seen for more than `max_idle` ticks.
    pub fn sweep_stale(&mut self, now: Tick, max_idle: u64) -> usize {
        self.contexts.sweep_stale(now, max_idle)
    }

    // ── Single agent ──────────────────────────────────────────────────────

    /// Decide for one agent and commit its context.
    ///
    /// # Errors
    ///
    /// [`DecideError::NonFinitePosition`] if the host reported a NaN or
    /// infinite position.  Callers that must never fail per-agent should
    /// use [`decide_batch`][Self::decide_batch], which substitutes the
    /// safe halt decision instead.
    pub fn decide(&mut self, now: Tick, percept: &Perception) -> DecideResult<Decision> {
        let (decision, context) = self.evaluate(now, percept)?;
        self.contexts.commit(percept.id.clone(), context);
        Ok(decision)
    }

    // ── Batch ─────────────────────────────────────────────────────────────

    /// Decide for every agent in the batch: one output per input id,
    /// always.  A per-agent failure becomes the safe halt decision for
    /// that agent only — it never aborts the batch.
    ///
    /// Evaluation reads only the shared snapshot and each agent's own
    /// context, so the result is independent of evaluation order; with
    /// the `parallel` feature the evaluate phase runs on Rayon's pool.
    pub fn decide_batch(
        &mut self,
        now: Tick,
        perceptions: &BTreeMap<AgentId, Perception>,
    ) -> BTreeMap<AgentId, Decision> {
        let evaluated = self.evaluate_all(now, perceptions);

        // Commit phase: sequential, ascending AgentId (BTreeMap order).
        let mut decisions = BTreeMap::new();
        for (agent, outcome) in evaluated {
            let decision = match outcome {
                Ok((decision, context)) => {
                    self.contexts.commit(agent.clone(), context);
                    decision
                }
                Err(error) => {
                    tracing::warn!(agent = %agent, %error, "substituting halt decision");
                    Decision::halt()
                }
            };
            decisions.insert(agent, decision);
        }
        decisions
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_all(
        &self,
        now: Tick,
        perceptions: &BTreeMap<AgentId, Perception>,
    ) -> Vec<(AgentId, DecideResult<(Decision, AgentContext)>)> {
        perceptions
            .iter()
            .map(|(agent, percept)| (agent.clone(), self.evaluate(now, percept)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_all(
        &self,
        now: Tick,
        perceptions: &BTreeMap<AgentId, Perception>,
    ) -> Vec<(AgentId, DecideResult<(Decision, AgentContext)>)> {
        use rayon::prelude::*;

        let entries: Vec<(&AgentId, &Perception)> = perceptions.iter().collect();
        entries
            .into_par_iter()
            .map(|(agent, percept)| (agent.clone(), self.evaluate(now, percept)))
            .collect()
    }

    // ── Evaluation (read-only) ────────────────────────────────────────────

    /// One agent's full pipeline: claim → lifecycle → avoidance.
    /// Reads the snapshot and the agent's stored context; returns the
    /// updated context instead of writing it, so evaluations can run in
    /// any order (or in parallel) without touching shared state.
    fn evaluate(
        &self,
        now: Tick,
        percept: &Perception,
    ) -> DecideResult<(Decision, AgentContext)> {
        if !percept.position.is_finite() {
            return Err(DecideError::NonFinitePosition { agent: percept.id.clone() });
        }

        let context = self.contexts.snapshot(&percept.id, now);

        // The stored lock is authoritative; the host echo only matters
        // when the process restarted and the store is empty.
        let locked = context
            .locked_target
            .as_ref()
            .or(percept.current_target_id.as_ref());

        let claim =
            ClaimResolver::new(percept, locked, &self.config.decision).resolve();

        let (objective, context) = plan(percept, claim.as_ref(), &context, &self.config.decision, now);

        // Repulsion steers the travel target, but never inside the hold
        // radius — close to the goal, precision beats separation.
        let mut target = objective.destination;
        let goal_dist = percept.position.dist(objective.destination);
        if goal_dist > self.config.avoidance.hold_radius {
            let offset = AvoidanceField::new(&self.config.avoidance).repulsion(
                percept.position,
                percept.obstacles.iter().map(|o| o.position),
                percept.peers.values().map(|p| p.position),
            );
            target = target + offset;
        }

        let decision =
            Decision::new(objective.movement, target, objective.action, objective.action_target);
        Ok((decision, context))
    }
}

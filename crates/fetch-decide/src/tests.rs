//! Integration tests for the decision engine and batch boundary.

use std::collections::BTreeMap;

use fetch_core::{
    ActionKind, AgentId, DecisionConfig, MovementKind, TaskId, Tick, Vec2,
};
use fetch_percept::{DeliveryZone, Obstacle, Perception, PeerSighting, TaskSighting};

use crate::{Decision, DecisionEngine, EngineConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn percept(id: &str, x: f32, z: f32) -> Perception {
    Perception {
        id:       AgentId::new(id),
        position: Vec2::new(x, z),
        spawn:    Vec2::new(0.0, 0.0),
        ..Default::default()
    }
}

fn with_task(mut p: Perception, id: &str, x: f32, z: f32) -> Perception {
    p.tasks.push(TaskSighting { id: TaskId::new(id), position: Vec2::new(x, z) });
    p
}

fn with_peer(mut p: Perception, id: &str, x: f32, z: f32) -> Perception {
    p.peers.insert(
        AgentId::new(id),
        PeerSighting { position: Vec2::new(x, z), ..Default::default() },
    );
    p
}

/// Build the same consistent two-agent, one-task snapshot from each
/// agent's point of view.
fn two_agent_snapshot() -> BTreeMap<AgentId, Perception> {
    let task = ("10", 2.0, 0.0);
    let a = with_peer(
        with_task(percept("1", 0.0, 0.0), task.0, task.1, task.2),
        "2", 5.0, 0.0,
    );
    let b = with_peer(
        with_task(percept("2", 5.0, 0.0), task.0, task.1, task.2),
        "1", 0.0, 0.0,
    );
    BTreeMap::from([(a.id.clone(), a), (b.id.clone(), b)])
}

// ── Wire format ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod wire_tests {
    use super::*;

    #[test]
    fn decision_serializes_to_the_host_shape() {
        let d = Decision::new(
            MovementKind::Walk,
            Vec2::new(1.5, -2.0),
            ActionKind::PickUp,
            Some(TaskId::new("3")),
        );
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "movement": { "type": "walk", "target_x": 1.5, "target_z": -2.0 },
                "action":   { "type": "pick_up", "target_id": "3" }
            })
        );
    }

    #[test]
    fn halt_is_stop_none_with_the_sentinel_target() {
        let json = serde_json::to_value(Decision::halt()).unwrap();
        assert_eq!(json["movement"]["type"], "stop");
        assert_eq!(json["action"]["type"], "none");
        assert_eq!(json["action"]["target_id"], "0");
    }

    #[test]
    fn decision_round_trips() {
        let d = Decision::new(
            MovementKind::Run,
            Vec2::new(0.25, 4.0),
            ActionKind::None,
            Some(TaskId::new("9")),
        );
        let json = serde_json::to_string(&d).unwrap();
        let back: Decision = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}

// ── Engine construction ───────────────────────────────────────────────────────

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        assert!(DecisionEngine::new(EngineConfig::default()).is_ok());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = EngineConfig {
            decision: DecisionConfig { pickup_radius: -0.5, ..Default::default() },
            ..Default::default()
        };
        assert!(DecisionEngine::new(config).is_err());
    }
}

// ── Single-agent pipeline ─────────────────────────────────────────────────────

#[cfg(test)]
mod decide_tests {
    use super::*;

    #[test]
    fn free_agent_walks_to_its_claimed_task() {
        let mut engine = DecisionEngine::with_defaults();
        let p = with_task(percept("1", 0.0, 0.0), "10", 4.0, 0.0);

        let d = engine.decide(Tick(1), &p).unwrap();
        assert_eq!(d.movement.kind, MovementKind::Walk);
        assert_eq!(d.movement.target_x, 4.0);
        assert_eq!(d.action.kind, ActionKind::None);
        assert_eq!(d.action.target, Some(TaskId::new("10")), "claim is published en route");

        let ctx = engine.context(&AgentId::new("1")).unwrap();
        assert_eq!(ctx.locked_target, Some(TaskId::new("10")));
    }

    #[test]
    fn agent_in_pickup_range_stops_and_picks_up() {
        let mut engine = DecisionEngine::with_defaults();
        let p = with_task(percept("1", 0.0, 0.0), "10", 0.5, 0.0);

        let d = engine.decide(Tick(1), &p).unwrap();
        assert_eq!(d.movement.kind, MovementKind::Stop);
        assert_eq!(d.action.kind, ActionKind::PickUp);
        assert_eq!(d.action.target, Some(TaskId::new("10")));
    }

    #[test]
    fn carrying_agent_heads_to_the_nearest_zone() {
        let mut engine = DecisionEngine::with_defaults();
        let mut p = percept("1", 0.0, 0.0);
        p.carrying = true;
        p.delivery_zones = vec![
            DeliveryZone { position: Vec2::new(10.0, 0.0) },
            DeliveryZone { position: Vec2::new(-2.0, 0.0) },
        ];

        let d = engine.decide(Tick(1), &p).unwrap();
        assert_eq!(d.movement.target_x, -2.0);
        assert_eq!(d.action.target, None, "carrying publishes no claim");
    }

    #[test]
    fn idle_agent_returns_to_spawn() {
        let mut engine = DecisionEngine::with_defaults();
        let p = percept("1", 7.0, 7.0);

        let d = engine.decide(Tick(1), &p).unwrap();
        assert_eq!((d.movement.target_x, d.movement.target_z), (0.0, 0.0));
        assert_eq!(d.movement.kind, MovementKind::Walk);
    }

    #[test]
    fn non_finite_position_is_an_error() {
        let mut engine = DecisionEngine::with_defaults();
        let p = percept("1", f32::NAN, 0.0);
        assert!(engine.decide(Tick(1), &p).is_err());
    }

    #[test]
    fn host_echo_restores_the_lock_after_a_restart() {
        // A fresh engine (empty context store) must pick the lock back
        // up from the perception echo instead of re-tournamenting.
        let mut engine = DecisionEngine::with_defaults();
        let mut p = with_task(
            with_task(percept("1", 0.0, 0.0), "near", 1.0, 0.0),
            "far", 6.0, 0.0,
        );
        p.current_target_id = Some(TaskId::new("far"));

        let d = engine.decide(Tick(1), &p).unwrap();
        assert_eq!(d.action.target, Some(TaskId::new("far")), "sticky lock survives restart");
    }
}

// ── Avoidance layering ────────────────────────────────────────────────────────

#[cfg(test)]
mod avoidance_tests {
    use super::*;

    #[test]
    fn repulsion_offsets_the_travel_target() {
        let mut engine = DecisionEngine::with_defaults();
        let mut p = with_task(percept("1", 0.0, 0.0), "10", 8.0, 0.0);
        p.obstacles = vec![Obstacle { position: Vec2::new(1.0, 0.5) }];

        let d = engine.decide(Tick(1), &p).unwrap();
        // Obstacle ahead-right pushes the target back and left.
        assert!(d.movement.target_x < 8.0);
        assert!(d.movement.target_z < 0.0);
    }

    #[test]
    fn repulsion_is_suppressed_near_the_goal() {
        let mut engine = DecisionEngine::with_defaults();
        // Goal 1.0 away — inside the default hold radius of 1.2.
        let mut p = with_task(percept("1", 0.0, 0.0), "10", 1.0, 0.0);
        p.obstacles = vec![Obstacle { position: Vec2::new(0.5, 0.0) }];

        let d = engine.decide(Tick(1), &p).unwrap();
        assert_eq!((d.movement.target_x, d.movement.target_z), (1.0, 0.0));
    }
}

// ── Batch boundary ────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use super::*;

    #[test]
    fn one_output_per_input_id() {
        let mut engine = DecisionEngine::with_defaults();
        let batch = two_agent_snapshot();
        let decisions = engine.decide_batch(Tick(1), &batch);
        let inputs: Vec<_> = batch.keys().collect();
        let outputs: Vec<_> = decisions.keys().collect();
        assert_eq!(inputs, outputs);
    }

    #[test]
    fn only_one_agent_claims_a_contested_task() {
        let mut engine = DecisionEngine::with_defaults();
        let decisions = engine.decide_batch(Tick(1), &two_agent_snapshot());

        let claimed: Vec<_> = decisions
            .values()
            .filter_map(|d| d.action.target.clone())
            .collect();
        assert_eq!(claimed, vec![TaskId::new("10")], "exactly one claimant");

        // The closer agent won; the loser heads back to spawn.
        assert_eq!(
            decisions[&AgentId::new("1")].action.target,
            Some(TaskId::new("10"))
        );
        assert_eq!(decisions[&AgentId::new("2")].action.target, None);
    }

    #[test]
    fn a_failed_agent_gets_the_halt_decision_and_the_rest_proceed() {
        let mut engine = DecisionEngine::with_defaults();
        let mut batch = two_agent_snapshot();
        batch.insert(
            AgentId::new("3"),
            percept("3", f32::INFINITY, 0.0),
        );

        let decisions = engine.decide_batch(Tick(1), &batch);
        assert_eq!(decisions.len(), 3);
        assert_eq!(decisions[&AgentId::new("3")], Decision::halt());
        assert_eq!(
            decisions[&AgentId::new("1")].action.target,
            Some(TaskId::new("10")),
            "healthy agents are unaffected"
        );
    }

    #[test]
    fn batch_matches_isolated_per_agent_decisions() {
        // Evaluation must not depend on the order agents are processed
        // in — deciding each agent on its own engine gives the same
        // answers as the batch.
        let batch = two_agent_snapshot();

        let mut batch_engine = DecisionEngine::with_defaults();
        let batched = batch_engine.decide_batch(Tick(1), &batch);

        for (agent, percept) in &batch {
            let mut solo = DecisionEngine::with_defaults();
            let alone = solo.decide(Tick(1), percept).unwrap();
            assert_eq!(&batched[agent], &alone, "agent {agent} diverged");
        }
    }

    #[test]
    fn repeated_batches_converge_to_stable_claims() {
        let mut engine = DecisionEngine::with_defaults();
        let batch = two_agent_snapshot();
        let first = engine.decide_batch(Tick(1), &batch);
        let second = engine.decide_batch(Tick(2), &batch);
        assert_eq!(first, second, "same snapshot, same decisions");
    }

    #[test]
    fn sweep_drops_agents_that_left_the_fleet() {
        let mut engine = DecisionEngine::with_defaults();
        engine.decide(Tick(0), &percept("1", 0.0, 0.0)).unwrap();
        engine.decide(Tick(80), &percept("2", 1.0, 0.0)).unwrap();

        let removed = engine.sweep_stale(Tick(100), 50);
        assert_eq!(removed, 1);
        assert!(engine.context(&AgentId::new("1")).is_none());
        assert!(engine.context(&AgentId::new("2")).is_some());
    }
}

//! One agent's objective for one tick.

use fetch_claim::Claim;
use fetch_core::{ActionKind, DecisionConfig, MovementKind, TaskId, Tick, TravelGait, Vec2};
use fetch_percept::Perception;

use crate::context::AgentContext;
use crate::phase::Phase;

// ── Objective ─────────────────────────────────────────────────────────────────

/// Where to go and what to do, before avoidance is layered on.
#[derive(Debug, Clone, PartialEq)]
pub struct Objective {
    /// The raw movement goal (task, zone, or spawn).
    pub destination: Vec2,
    pub movement: MovementKind,
    pub action: ActionKind,
    /// The task id published with the decision.  This is the claim's
    /// broadcast channel: the host persists it into every peer's next
    /// snapshot, so it is set whenever a lock is held — even on ticks
    /// where the action itself is `none`.
    pub action_target: Option<TaskId>,
    pub phase: Phase,
}

// ── plan ──────────────────────────────────────────────────────────────────────

/// Derive the tick's objective from the carrying flag, the claim outcome,
/// and distance.  Pure: the updated context is returned, not written.
pub fn plan(
    percept: &Perception,
    claim:   Option<&Claim>,
    ctx:     &AgentContext,
    config:  &DecisionConfig,
    now:     Tick,
) -> (Objective, AgentContext) {
    let mut next = ctx.clone();
    next.last_seen = now;

    let objective = if percept.carrying {
        deliver(percept, &mut next, config)
    } else {
        match claim {
            Some(claim) => pursue(percept, claim, &mut next, config),
            None        => seek(percept, &mut next, config),
        }
    };
    next.phase = objective.phase;
    (objective, next)
}

/// Carrying: head for the nearest delivery zone and drop when close.
fn deliver(percept: &Perception, next: &mut AgentContext, config: &DecisionConfig) -> Objective {
    // A carried item is not a claimable task.
    next.locked_target = None;

    // O(n) scan; strict `<` keeps the first-encountered zone on ties.
    let mut nearest: Option<Vec2> = None;
    for zone in &percept.delivery_zones {
        let closer = match nearest {
            Some(best) => {
                percept.position.dist_sq(zone.position) < percept.position.dist_sq(best)
            }
            None => true,
        };
        if closer {
            nearest = Some(zone.position);
        }
    }

    // Zones are static per run, but a snapshot hiccup may hide them for
    // a tick: fall back to wherever we were last headed.
    let Some(destination) = nearest.or(next.last_destination) else {
        return Objective {
            destination:   percept.position,
            movement:      MovementKind::Stop,
            action:        ActionKind::None,
            action_target: None,
            phase:         Phase::Delivering,
        };
    };
    next.last_destination = Some(destination);

    let dist = percept.position.dist(destination);
    if dist < config.drop_radius {
        Objective {
            destination,
            movement:      MovementKind::Stop,
            action:        ActionKind::DropOff,
            action_target: None,
            phase:         Phase::Dropping,
        }
    } else {
        Objective {
            destination,
            movement:      travel_gait(dist, config.drop_radius, config),
            action:        ActionKind::None,
            action_target: None,
            phase:         Phase::Delivering,
        }
    }
}

/// A task is claimed: move in and pick up once inside the radius.
fn pursue(
    percept: &Perception,
    claim:   &Claim,
    next:    &mut AgentContext,
    config:  &DecisionConfig,
) -> Objective {
    next.locked_target = Some(claim.task.clone());

    let dist = percept.position.dist(claim.position);
    if dist < config.pickup_radius {
        Objective {
            destination:   claim.position,
            movement:      MovementKind::Stop,
            action:        ActionKind::PickUp,
            action_target: Some(claim.task.clone()),
            phase:         Phase::Arriving,
        }
    } else {
        Objective {
            destination:   claim.position,
            movement:      travel_gait(dist, config.pickup_radius, config),
            action:        ActionKind::None,
            action_target: Some(claim.task.clone()),
            phase:         Phase::Targeting,
        }
    }
}

/// Nothing to do: drift back to spawn and wait for work.
fn seek(percept: &Perception, next: &mut AgentContext, config: &DecisionConfig) -> Objective {
    next.locked_target = None;

    let dist = percept.position.dist(percept.spawn);
    Objective {
        destination:   percept.spawn,
        movement:      travel_gait(dist, config.pickup_radius, config),
        action:        ActionKind::None,
        action_target: None,
        phase:         Phase::Seeking,
    }
}

/// Distance-vs-threshold gait: stop inside the radius, otherwise the
/// configured travel gait, with runs dropping to a walk inside the
/// approach band so the final approach stays controlled.
fn travel_gait(dist: f32, stop_radius: f32, config: &DecisionConfig) -> MovementKind {
    if dist < stop_radius {
        return MovementKind::Stop;
    }
    match config.travel_gait {
        TravelGait::Walk => MovementKind::Walk,
        TravelGait::Run => {
            if dist < stop_radius + config.approach_band {
                MovementKind::Walk
            } else {
                MovementKind::Run
            }
        }
    }
}

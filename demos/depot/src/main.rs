//! depot — synthetic warehouse demo for the rust_fetch decision core.
//!
//! Stands in for the host: builds every agent's perception from the
//! committed world state, runs one decision batch per tick, then applies
//! movement and pickup/drop-off.  Because perceptions are built before
//! any decision is applied, each tick's snapshot reflects exactly the
//! previous tick's commitments — the same one-tick-stale view a real
//! host provides.
//!
//! Run with `RUST_LOG=fetch_claim=debug` to watch the tournament.

use std::collections::BTreeMap;

use anyhow::Result;

use fetch_core::{ActionKind, AgentId, MovementKind, TaskId, Tick, Vec2};
use fetch_decide::{DecisionEngine, EngineConfig};
use fetch_percept::{DeliveryZone, Obstacle, Perception, PeerSighting, TaskSighting};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT: usize = 6;
const TASK_COUNT:  usize = 12;
const MAX_TICKS:   u64   = 600;
const WALK_SPEED:  f32   = 0.25; // units per tick
const RUN_SPEED:   f32   = 0.50;

// ── Host-side world state ─────────────────────────────────────────────────────

struct Robot {
    id:        AgentId,
    position:  Vec2,
    spawn:     Vec2,
    carrying:  bool,
    /// The claim this robot published last tick — what peers see.
    committed: Option<TaskId>,
    delivered: usize,
}

struct World {
    robots:    Vec<Robot>,
    floor:     Vec<TaskSighting>,
    zones:     Vec<DeliveryZone>,
    obstacles: Vec<Obstacle>,
    delivered: usize,
}

impl World {
    fn build() -> Self {
        let robots = (0..AGENT_COUNT)
            .map(|i| {
                let spawn = Vec2::new(-10.0, i as f32 * 2.0 - 5.0);
                Robot {
                    id:        AgentId::new(format!("{i}")),
                    position:  spawn,
                    spawn,
                    carrying:  false,
                    committed: None,
                    delivered: 0,
                }
            })
            .collect();

        // Items on a 4×3 grid in the middle of the floor.
        let floor = (0..TASK_COUNT)
            .map(|i| TaskSighting {
                id:       TaskId::new(format!("{}", 100 + i)),
                position: Vec2::new((i % 4) as f32 * 3.0 - 4.5, (i / 4) as f32 * 3.0 - 3.0),
            })
            .collect();

        World {
            robots,
            floor,
            zones: vec![
                DeliveryZone { position: Vec2::new(8.0, -4.0) },
                DeliveryZone { position: Vec2::new(8.0, 4.0) },
            ],
            obstacles: vec![
                Obstacle { position: Vec2::new(0.0, 0.0) },
                Obstacle { position: Vec2::new(3.0, -2.0) },
                Obstacle { position: Vec2::new(-3.0, 2.0) },
            ],
            delivered: 0,
        }
    }

    /// Build every robot's perception from the committed state.
    fn perceptions(&self) -> BTreeMap<AgentId, Perception> {
        self.robots
            .iter()
            .map(|me| {
                let peers = self
                    .robots
                    .iter()
                    .filter(|other| other.id != me.id)
                    .map(|other| {
                        (
                            other.id.clone(),
                            PeerSighting {
                                position:          other.position,
                                carrying:          other.carrying,
                                current_target_id: other.committed.clone(),
                            },
                        )
                    })
                    .collect();

                let percept = Perception {
                    id:                me.id.clone(),
                    position:          me.position,
                    spawn:             me.spawn,
                    carrying:          me.carrying,
                    tasks:             self.floor.clone(),
                    delivery_zones:    self.zones.clone(),
                    obstacles:         self.obstacles.clone(),
                    peers,
                    current_target_id: me.committed.clone(),
                };
                (me.id.clone(), percept)
            })
            .collect()
    }

    /// Apply one robot's decision: move, then pick up or drop off.
    fn apply(&mut self, index: usize, decision: &fetch_decide::Decision, pickup_radius: f32) {
        let target = Vec2::new(decision.movement.target_x, decision.movement.target_z);
        let speed = match decision.movement.kind {
            MovementKind::Walk => WALK_SPEED,
            MovementKind::Run  => RUN_SPEED,
            MovementKind::Stop | MovementKind::None => 0.0,
        };
        if speed > 0.0 {
            let robot = &mut self.robots[index];
            let dist = robot.position.dist(target);
            if dist > 1e-6 {
                let step = speed.min(dist) / dist;
                robot.position = robot.position + (target - robot.position).scaled(step);
            }
        }

        match decision.action.kind {
            ActionKind::PickUp => {
                if let Some(task_id) = &decision.action.target {
                    let here = self.robots[index].position;
                    let in_range = self
                        .floor
                        .iter()
                        .position(|t| &t.id == task_id && here.dist(t.position) < pickup_radius + 0.1);
                    if let Some(slot) = in_range {
                        self.floor.remove(slot);
                        self.robots[index].carrying = true;
                    }
                }
            }
            ActionKind::DropOff => {
                let robot = &mut self.robots[index];
                if robot.carrying {
                    robot.carrying = false;
                    robot.delivered += 1;
                    self.delivered += 1;
                }
            }
            ActionKind::None => {}
        }

        // Persist the claim broadcast for next tick's snapshots.
        self.robots[index].committed = decision.action.target.clone();
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== depot — rust_fetch decision core ===");
    println!("Robots: {AGENT_COUNT}  |  Items: {TASK_COUNT}");
    println!();

    // 1. Build the floor and the engine.
    let mut world = World::build();
    let config = EngineConfig::default();
    let pickup_radius = config.decision.pickup_radius;
    let mut engine = DecisionEngine::new(config)?;

    // 2. Tick until everything is delivered (or the tick limit runs out).
    let mut ticks_used = MAX_TICKS;
    let mut max_contention = 0usize;
    for t in 0..MAX_TICKS {
        let now = Tick(t);
        let perceptions = world.perceptions();
        let decisions = engine.decide_batch(now, &perceptions);

        // Same-tick double claims are allowed by design; track how many
        // actually happen so the demo shows them dying out.
        let mut claims: Vec<&TaskId> =
            decisions.values().filter_map(|d| d.action.target.as_ref()).collect();
        let total = claims.len();
        claims.sort();
        claims.dedup();
        max_contention = max_contention.max(total - claims.len());

        for index in 0..world.robots.len() {
            let id = world.robots[index].id.clone();
            if let Some(decision) = decisions.get(&id) {
                world.apply(index, decision, pickup_radius);
            }
        }

        if world.delivered == TASK_COUNT {
            ticks_used = t + 1;
            break;
        }
    }

    // 3. Summary.
    println!("Delivered {}/{TASK_COUNT} items in {ticks_used} ticks", world.delivered);
    println!("Peak same-tick duplicate claims: {max_contention}");
    println!();
    println!("{:<8} {:<12} {:<10}", "Robot", "Delivered", "Position");
    println!("{}", "-".repeat(32));
    for robot in &world.robots {
        println!("{:<8} {:<12} {}", robot.id.to_string(), robot.delivered, robot.position);
    }

    Ok(())
}

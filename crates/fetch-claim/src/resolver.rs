//! `ClaimResolver` — which task, if any, should this agent pursue?

use fetch_core::{ClaimPolicy, DecisionConfig, TaskId, Vec2};
use fetch_percept::{Perception, TaskSighting};
use rustc_hash::FxHashSet;

use crate::rank::beats;

/// A won tournament: the task this agent now pursues.
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    pub task:     TaskId,
    pub position: Vec2,
}

/// One agent's view of one resolution pass.
///
/// Borrows the snapshot for the duration of the pass; holds no state of
/// its own, so resolving twice against the same snapshot yields the same
/// answer.
pub struct ClaimResolver<'a> {
    percept: &'a Perception,
    /// The target locked on a previous tick, if any.  The caller decides
    /// whether this comes from its own context or from the host echo.
    locked:  Option<&'a TaskId>,
    config:  &'a DecisionConfig,
}

impl<'a> ClaimResolver<'a> {
    pub fn new(
        percept: &'a Perception,
        locked:  Option<&'a TaskId>,
        config:  &'a DecisionConfig,
    ) -> Self {
        Self { percept, locked, config }
    }

    /// Run one resolution pass.  `None` means no task is worth pursuing;
    /// the caller falls back to the spawn position.
    pub fn resolve(&self) -> Option<Claim> {
        // A carried item is not a claimable task, and a carrying agent
        // holds no lock.
        if self.percept.carrying {
            return None;
        }

        let reserved = self.reservations();

        if self.config.claim_policy == ClaimPolicy::Sticky {
            if let Some(claim) = self.sticky_hold(&reserved) {
                tracing::trace!(agent = %self.percept.id, task = %claim.task, "holding locked target");
                return Some(claim);
            }
        }

        let winner = self.tournament(&reserved);
        if let Some(claim) = &winner {
            tracing::debug!(agent = %self.percept.id, task = %claim.task, "won claim tournament");
        }
        winner
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Tasks publicly held by peers, as committed last tick.  Entries for
    /// ourselves (a host quirk) are skipped so our own stale lock never
    /// blocks our re-evaluation.
    fn reservations(&self) -> FxHashSet<&'a TaskId> {
        self.percept
            .peers
            .iter()
            .filter(|(id, _)| **id != self.percept.id)
            .filter_map(|(_, peer)| peer.current_target_id.as_ref())
            .collect()
    }

    /// Under the sticky policy: keep the previous target unconditionally
    /// while it is still a candidate — visible, unreserved, and (when a
    /// lock radius is configured) in range.
    fn sticky_hold(&self, reserved: &FxHashSet<&TaskId>) -> Option<Claim> {
        let lock = self.locked?;
        if reserved.contains(lock) {
            return None;
        }
        let task = self.percept.task(lock)?;
        if let Some(radius) = self.config.lock_radius {
            if self.percept.position.dist_sq(task.position) > radius * radius {
                return None;
            }
        }
        Some(Claim { task: task.id.clone(), position: task.position })
    }

    /// The decentralized tournament: greedy nearest-first over unreserved
    /// tasks, where every free peer that would rank better under the
    /// shared comparator knocks us out of that candidate.
    fn tournament(&self, reserved: &FxHashSet<&TaskId>) -> Option<Claim> {
        let here = self.percept.position;

        let mut candidates: Vec<&TaskSighting> = self
            .percept
            .tasks
            .iter()
            .filter(|t| !reserved.contains(&t.id))
            .collect();
        // (distance, id) ascending: the id key makes the scan order — and
        // therefore the winner — independent of the host's task ordering.
        candidates.sort_by(|a, b| {
            here.dist_sq(a.position)
                .total_cmp(&here.dist_sq(b.position))
                .then_with(|| a.id.cmp(&b.id))
        });

        for task in candidates {
            let our_sq = here.dist_sq(task.position);

            let beaten = self.percept.peers.iter().any(|(peer_id, peer)| {
                // Only free peers compete: carriers and reservation
                // holders are already committed elsewhere.
                *peer_id != self.percept.id
                    && !peer.carrying
                    && peer.current_target_id.is_none()
                    && beats(
                        peer.position.dist_sq(task.position),
                        peer_id,
                        our_sq,
                        &self.percept.id,
                        self.config.distance_tolerance,
                    )
            });

            if !beaten {
                return Some(Claim { task: task.id.clone(), position: task.position });
            }
        }
        None
    }
}

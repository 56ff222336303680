//! The tournament comparator.
//!
//! Every agent in the fleet must rank `(squared distance, id)` pairs with
//! this exact function.  Any divergence — a different tolerance, a
//! different id order — and two agents can each conclude the task is
//! theirs on every tick, forever.  Keep it a single shared pure function.

use fetch_core::AgentId;

/// Does a challenger beat us for a task?
///
/// `their_sq` / `our_sq` are squared distances from the challenger and
/// from us to the same task.  Distances within `tolerance` (relative to
/// the larger of the two) count as a tie, and ties go to the smaller id
/// under the fleet-wide total order.
#[inline]
pub fn beats(
    their_sq: f32,
    their_id: &AgentId,
    our_sq:   f32,
    our_id:   &AgentId,
    tolerance: f32,
) -> bool {
    let scale = their_sq.max(our_sq);
    if (their_sq - our_sq).abs() <= tolerance * scale {
        // Tied (including the exact-equality case where scale is zero):
        // the smaller id wins.
        return their_id < our_id;
    }
    their_sq < our_sq
}

//! Decision-core configuration.
//!
//! Every threshold the algorithms compare against lives here — nothing is
//! baked into the code paths.  Plain data, typically deserialized from
//! the application's config file and passed to the decision engine once
//! at startup.

use crate::error::{CoreError, CoreResult};

// ── ClaimPolicy ───────────────────────────────────────────────────────────────

/// How an agent treats the target it locked on a previous tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ClaimPolicy {
    /// Keep the locked target for as long as it stays visible, unreserved,
    /// and (when `lock_radius` is set) in range.  Damps the oscillation
    /// that fresh recomputation can produce when distances are noisy.
    #[default]
    Sticky,
    /// Recompute the best target from scratch every tick.
    Reevaluate,
}

// ── TravelGait ────────────────────────────────────────────────────────────────

/// Gait used while en route to a destination.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TravelGait {
    /// Walk the whole way.
    #[default]
    Walk,
    /// Run en route, dropping to a walk inside the approach band so the
    /// final approach stays controlled.
    Run,
}

// ── DecisionConfig ────────────────────────────────────────────────────────────

/// Thresholds and policies for claiming and the pickup/delivery cycle.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DecisionConfig {
    /// Within this distance of the locked task the agent stops and emits
    /// `pick_up`.  Also the generic "arrived" radius while seeking.
    pub pickup_radius: f32,

    /// Within this distance of the chosen delivery zone a carrying agent
    /// stops and emits `drop_off`.
    pub drop_radius: f32,

    /// Under the sticky policy, a locked target further away than this is
    /// released.  `None` keeps locks at any range.
    pub lock_radius: Option<f32>,

    /// Sticky vs. fresh-every-tick target locking.
    pub claim_policy: ClaimPolicy,

    /// Relative tolerance under which two squared distances to a task
    /// count as a tie (resolved by id order).  Must be identical across
    /// the fleet or the tournament stops converging.
    pub distance_tolerance: f32,

    /// Gait used while en route.
    pub travel_gait: TravelGait,

    /// Width of the run→walk transition band beyond the stop radius.
    /// Only consulted when `travel_gait` is [`TravelGait::Run`].
    pub approach_band: f32,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            pickup_radius:      0.6,
            drop_radius:        0.7,
            lock_radius:        None,
            claim_policy:       ClaimPolicy::Sticky,
            distance_tolerance: 0.01,
            travel_gait:        TravelGait::Walk,
            approach_band:      2.0,
        }
    }
}

impl DecisionConfig {
    /// Reject configurations the algorithms cannot run on.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("pickup_radius", self.pickup_radius),
            ("drop_radius", self.drop_radius),
            ("approach_band", self.approach_band),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if let Some(r) = self.lock_radius {
            if !r.is_finite() || r < 0.0 {
                return Err(CoreError::Config(format!(
                    "lock_radius must be finite and non-negative, got {r}"
                )));
            }
        }
        if !self.distance_tolerance.is_finite()
            || !(0.0..1.0).contains(&self.distance_tolerance)
        {
            return Err(CoreError::Config(format!(
                "distance_tolerance must be in [0, 1), got {}",
                self.distance_tolerance
            )));
        }
        Ok(())
    }
}

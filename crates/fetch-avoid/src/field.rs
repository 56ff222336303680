//! Linear-falloff repulsion accumulator.

use fetch_core::{CoreError, CoreResult, Vec2};

/// Below this separation the push direction is undefined; a fixed +x
/// direction is substituted so the offset stays finite and bounded.
pub const MIN_SEPARATION: f32 = 1e-4;

// ── AvoidanceConfig ───────────────────────────────────────────────────────────

/// Per-category cutoff radii and strengths.
///
/// Obstacles weigh heavier than peers by default: scraping a rack is
/// worse than briefly crowding another agent.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct AvoidanceConfig {
    /// Obstacles further than this exert no push.
    pub obstacle_radius: f32,
    /// Push magnitude of an obstacle at zero distance.
    pub obstacle_strength: f32,
    /// Peers further than this exert no push.
    pub peer_radius: f32,
    /// Push magnitude of a peer at zero distance.
    pub peer_strength: f32,
    /// Inside this distance of the movement goal the field is not
    /// applied at all, so it can never shove an agent off its pickup or
    /// drop point.
    pub hold_radius: f32,
}

impl Default for AvoidanceConfig {
    fn default() -> Self {
        Self {
            obstacle_radius:   2.5,
            obstacle_strength: 3.0,
            peer_radius:       1.3,
            peer_strength:     1.5,
            hold_radius:       1.2,
        }
    }
}

impl AvoidanceConfig {
    /// Reject configurations the field math cannot run on.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("obstacle_radius", self.obstacle_radius),
            ("obstacle_strength", self.obstacle_strength),
            ("peer_radius", self.peer_radius),
            ("peer_strength", self.peer_strength),
            ("hold_radius", self.hold_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

// ── AvoidanceField ────────────────────────────────────────────────────────────

/// One tick's repulsion evaluation.  Stateless: borrows the config, sums
/// whatever the caller feeds it.
pub struct AvoidanceField<'a> {
    config: &'a AvoidanceConfig,
}

impl<'a> AvoidanceField<'a> {
    pub fn new(config: &'a AvoidanceConfig) -> Self {
        Self { config }
    }

    /// Total repulsion offset at `origin` from all sensed obstacles and
    /// peers.  Entities outside their category radius contribute nothing.
    pub fn repulsion(
        &self,
        origin:    Vec2,
        obstacles: impl IntoIterator<Item = Vec2>,
        peers:     impl IntoIterator<Item = Vec2>,
    ) -> Vec2 {
        let mut total = Vec2::ZERO;
        for obstacle in obstacles {
            total = total
                + push_from(origin, obstacle, self.config.obstacle_radius, self.config.obstacle_strength);
        }
        for peer in peers {
            total =
                total + push_from(origin, peer, self.config.peer_radius, self.config.peer_strength);
        }
        total
    }
}

/// One entity's push: `normalize(origin − other) · strength · (R − d)/R`.
/// Maximal at contact, zero at the cutoff radius.
fn push_from(origin: Vec2, other: Vec2, radius: f32, strength: f32) -> Vec2 {
    let d = origin.dist(other);
    if d >= radius || radius <= 0.0 {
        return Vec2::ZERO;
    }
    let falloff = (radius - d) / radius;
    let direction = if d < MIN_SEPARATION {
        // Coincident positions: undefined direction, bounded magnitude.
        Vec2::new(1.0, 0.0)
    } else {
        (origin - other).scaled(1.0 / d)
    };
    direction.scaled(strength * falloff)
}

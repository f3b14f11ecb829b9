//! Non-overlapping spawn position allocator.
//!
//! Rejection-samples positions on a ring around the center and keeps a
//! history of accepted positions shared by every particle, so fresh spawns
//! land away from earlier ones. The history is cleared wholesale once it
//! grows past capacity, which bounds the cost of the separation scan at the
//! price of briefly weakening the guarantee. Exhausting all attempts falls
//! back to an unconstrained position; that degrades the look, never the run.

use std::f32::consts::PI;

use glam::{vec2, Vec2};
use log::debug;
use rand::Rng;

use crate::config::SpawnConfig;

/// Angle span for candidate sampling. Deliberately covers three full turns;
/// equivalent to one turn but part of the tuned random-stream consumption.
const ANGLE_SPAN: f32 = 6.0 * PI;

/// Result of one allocation.
pub struct SpawnOutcome {
    pub position: Vec2,
    /// True when all attempts were rejected and the position carries no
    /// separation guarantee.
    pub degraded: bool,
}

/// Shared history of accepted spawn positions.
pub struct SpawnRegistry {
    positions: Vec<Vec2>,
    capacity: usize,
}

impl SpawnRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            positions: Vec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Seeds the history directly. Test hook; production positions enter
    /// through `allocate`.
    pub fn record(&mut self, position: Vec2) {
        self.positions.push(position);
    }

    /// Draws a position on the configured ring that keeps its distance from
    /// every recorded position, falling back to an unconstrained rectangle
    /// around the center when the attempt budget runs out.
    pub fn allocate(
        &mut self,
        rng: &mut impl Rng,
        center: Vec2,
        config: &SpawnConfig,
    ) -> SpawnOutcome {
        for _ in 0..config.max_attempts {
            let angle = rng.random_range(0.0..ANGLE_SPAN);
            let distance = rng.random_range(config.min_radius..=config.max_radius);
            let candidate = center + vec2(angle.cos(), angle.sin()) * distance;

            if self
                .positions
                .iter()
                .all(|p| candidate.distance(*p) > config.min_separation)
            {
                self.positions.push(candidate);
                return SpawnOutcome {
                    position: candidate,
                    degraded: false,
                };
            }

            if self.positions.len() > self.capacity {
                self.positions.clear();
            }
        }

        debug!(
            "spawn allocation exhausted {} attempts, taking unconstrained fallback",
            config.max_attempts
        );
        let fallback = center
            + vec2(
                rng.random_range(config.fallback_x.0..=config.fallback_x.1),
                rng.random_range(config.fallback_y.0..=config.fallback_y.1),
            );
        SpawnOutcome {
            position: fallback,
            degraded: true,
        }
    }
}

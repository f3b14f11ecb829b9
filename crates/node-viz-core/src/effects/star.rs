//! Spinning star decorations spawned on loud frames.
//!
//! Stars appear on a wide ring around the center, drift slowly inward while
//! rotating, and fade out over a fixed lifetime. Spawning is probabilistic
//! and capped, so even a sustained loud passage only keeps a handful alive.

use std::f32::consts::PI;

use glam::{vec2, Vec2};
use rand::Rng;

use super::FadingLifetime;
use crate::config::StarConfig;

/// Angle span for ring placement. Several full turns, matching the tuned
/// random-stream consumption; the distribution is the same as one turn.
const RING_ANGLE_SPAN: f32 = 15.0 * PI;

pub struct Star {
    pub position: Vec2,
    velocity: Vec2,
    lifetime: u32,
    max_lifetime: u32,
    /// Polygon rotation in degrees
    pub angle: f32,
    /// Degrees per frame, may be negative
    rotation_speed: f32,
}

impl Star {
    fn spawn(rng: &mut impl Rng, center: Vec2, config: &StarConfig) -> Self {
        let ring_angle = rng.random_range(0.0..RING_ANGLE_SPAN);
        let ring_radius = rng.random_range(0.0..=config.ring_radius);
        let position = center + vec2(ring_angle.cos(), ring_angle.sin()) * ring_radius;

        Self {
            position,
            velocity: (center - position).normalize_or_zero() * config.drift_speed,
            lifetime: config.lifetime,
            max_lifetime: config.lifetime,
            angle: rng.random_range(0.0..360.0),
            rotation_speed: rng
                .random_range(-config.rotation_speed_range..=config.rotation_speed_range),
        }
    }

    fn update(&mut self) {
        self.lifetime = self.lifetime.saturating_sub(1);
        self.angle += self.rotation_speed;
        self.position += self.velocity;
    }

    /// Vertices of the star polygon: spikes alternate between the outer
    /// radius and half of it, rotated by the instance angle.
    pub fn vertices(&self, config: &StarConfig) -> Vec<Vec2> {
        let angle_step = 360.0 / (config.spike_count * 2) as f32;
        (0..config.spike_count * 2)
            .map(|i| {
                let radians = (self.angle + angle_step * i as f32).to_radians();
                let r = if i % 2 == 0 {
                    config.radius
                } else {
                    config.radius / 2.0
                };
                self.position + vec2(radians.cos(), radians.sin()) * r
            })
            .collect()
    }
}

impl FadingLifetime for Star {
    fn lifetime_remaining(&self) -> u32 {
        self.lifetime
    }

    fn max_lifetime(&self) -> u32 {
        self.max_lifetime
    }
}

/// Active star population with its spawn gate.
pub struct StarField {
    stars: Vec<Star>,
    config: StarConfig,
}

impl StarField {
    pub fn new(config: StarConfig) -> Self {
        Self {
            stars: Vec::new(),
            config,
        }
    }

    /// Spawn gate, run once per frame against this frame's amplitude. The
    /// probability draw happens before the population check so the random
    /// stream advances the same way whether or not the field is full.
    pub fn maybe_spawn(&mut self, rng: &mut impl Rng, amplitude: f32, center: Vec2) {
        if amplitude > self.config.threshold && rng.random::<f32>() < self.config.spawn_chance {
            if self.stars.len() < self.config.max_stars {
                self.stars.push(Star::spawn(rng, center, &self.config));
            }
        }
    }

    pub fn update(&mut self) {
        for star in &mut self.stars {
            star.update();
        }
    }

    pub fn prune(&mut self) {
        self.stars.retain(|s| s.is_alive());
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn config(&self) -> &StarConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CENTER: Vec2 = Vec2::new(300.0, 300.0);

    fn field_with_certain_spawn() -> StarField {
        StarField::new(StarConfig {
            spawn_chance: 1.0,
            ..StarConfig::default()
        })
    }

    #[test]
    fn test_no_spawn_below_threshold() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut field = field_with_certain_spawn();
        for _ in 0..50 {
            field.maybe_spawn(&mut rng, 0.74, CENTER);
        }
        assert!(field.stars().is_empty());
    }

    #[test]
    fn test_spawns_above_threshold() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut field = field_with_certain_spawn();
        field.maybe_spawn(&mut rng, 0.9, CENTER);
        assert_eq!(field.stars().len(), 1);
    }

    #[test]
    fn test_population_cap_holds() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut field = field_with_certain_spawn();
        for _ in 0..20 {
            field.maybe_spawn(&mut rng, 0.9, CENTER);
        }
        assert_eq!(field.stars().len(), field.config.max_stars);
    }

    #[test]
    fn test_alpha_fades_monotonically_to_zero() {
        let mut rng = StdRng::seed_from_u64(24);
        let mut field = field_with_certain_spawn();
        field.maybe_spawn(&mut rng, 0.9, CENTER);

        let lifetime = field.config.lifetime;
        let mut last_alpha = 1.0_f32;
        for _ in 0..lifetime {
            field.update();
            let alpha = field.stars()[0].alpha();
            assert!(alpha <= last_alpha);
            assert!(alpha >= 0.0);
            last_alpha = alpha;
        }
        assert_eq!(last_alpha, 0.0);

        // Dead the frame after alpha reaches zero.
        field.prune();
        assert!(field.stars().is_empty());
    }

    #[test]
    fn test_stars_drift_toward_center() {
        let mut rng = StdRng::seed_from_u64(25);
        let mut field = field_with_certain_spawn();
        for _ in 0..4 {
            field.maybe_spawn(&mut rng, 0.9, CENTER);
        }

        let before: Vec<f32> = field
            .stars()
            .iter()
            .map(|s| s.position.distance(CENTER))
            .collect();
        field.update();
        for (star, before) in field.stars().iter().zip(&before) {
            // Unit-speed inward drift; a star spawned right on the center
            // has zero velocity and stays put.
            if *before > 1.0 {
                assert!(star.position.distance(CENTER) < *before);
            }
        }
    }

    #[test]
    fn test_star_polygon_alternates_radii() {
        let mut rng = StdRng::seed_from_u64(26);
        let mut field = field_with_certain_spawn();
        field.maybe_spawn(&mut rng, 0.9, CENTER);

        let star = &field.stars()[0];
        let config = field.config();
        let vertices = star.vertices(config);
        assert_eq!(vertices.len(), config.spike_count * 2);
        for (i, v) in vertices.iter().enumerate() {
            let r = v.distance(star.position);
            let expected = if i % 2 == 0 {
                config.radius
            } else {
                config.radius / 2.0
            };
            assert!((r - expected).abs() < 1e-3);
        }
    }
}

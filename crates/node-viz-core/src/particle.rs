//! A single physically simulated point particle.
//!
//! Motion runs through two independent channels: the amplitude-scaled center
//! pull is applied straight to the position every frame, while high-amplitude
//! impulses kick the velocity, which then decays exponentially. Particles
//! that drift inside the absorption radius are respawned through the shared
//! spawn registry rather than destroyed, so the population never changes.

use glam::{vec2, Vec2};
use rand::Rng;

use crate::color::Color;
use crate::config::{ParticleConfig, SpawnConfig};
use crate::spawn::SpawnRegistry;

/// Color a particle settles back to once its pulse cooldown runs out.
const BASE_COLOR: Color = Color::grey(200.0 / 255.0);

pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Frames left before radius/color revert to baseline
    pulse_timer: u32,
}

impl Particle {
    /// Creates a particle at a fresh registry-allocated position.
    pub fn spawn(
        rng: &mut impl Rng,
        registry: &mut SpawnRegistry,
        center: Vec2,
        spawn: &SpawnConfig,
        config: &ParticleConfig,
    ) -> Self {
        Self {
            position: registry.allocate(rng, center, spawn).position,
            velocity: Vec2::ZERO,
            radius: config.radius,
            color: Color::WHITE,
            pulse_timer: 0,
        }
    }

    /// Advances the particle one frame under the current amplitude.
    pub fn update(
        &mut self,
        rng: &mut impl Rng,
        amplitude: f32,
        center: Vec2,
        registry: &mut SpawnRegistry,
        spawn: &SpawnConfig,
        config: &ParticleConfig,
    ) {
        // Offset measured before integration; the respawn check and the pull
        // direction both use this pre-update view of the particle.
        let to_center = center - self.position;
        let distance = to_center.length();

        self.position += self.velocity;
        self.velocity *= config.damping;

        if distance < config.absorption_radius {
            // Absorbed by the center: re-drawn through the allocator, not
            // integrated out of the old state.
            self.position = registry.allocate(rng, center, spawn).position;
        }

        let force_direction = to_center.normalize_or_zero();
        let gravity_strength = config.base_gravity + amplitude * config.gravity_gain;
        self.position += force_direction * gravity_strength;
        self.position += vec2(
            rng.random_range(-config.jitter..=config.jitter),
            rng.random_range(-config.jitter..=config.jitter),
        );

        if amplitude > config.impulse_threshold {
            let noise = vec2(
                rng.random_range(-config.impulse_noise..=config.impulse_noise),
                rng.random_range(-config.impulse_noise..=config.impulse_noise),
            );
            let outward = (self.position - center).normalize_or_zero();
            let direction = (outward + noise * config.noise_blend).normalize_or_zero();

            let intensity =
                ((amplitude - config.impulse_floor) * config.impulse_gain).min(config.impulse_max);
            self.velocity += direction * intensity;

            // Cooldown keeps a sustained loud passage from re-kicking the
            // particle every single frame.
            self.pulse_timer = config.pulse_cooldown;
        }

        if self.pulse_timer > 0 {
            self.pulse_timer -= 1;
        } else {
            self.radius = config.radius;
            self.color = BASE_COLOR;
        }
    }

    pub fn pulse_timer(&self) -> u32 {
        self.pulse_timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CENTER: Vec2 = Vec2::new(300.0, 300.0);

    struct Fixture {
        rng: StdRng,
        registry: SpawnRegistry,
        spawn: SpawnConfig,
        config: ParticleConfig,
    }

    impl Fixture {
        fn new(seed: u64) -> Self {
            Self {
                rng: StdRng::seed_from_u64(seed),
                registry: SpawnRegistry::new(500),
                spawn: SpawnConfig::default(),
                config: ParticleConfig::default(),
            }
        }

        fn particle(&mut self) -> Particle {
            Particle::spawn(
                &mut self.rng,
                &mut self.registry,
                CENTER,
                &self.spawn,
                &self.config,
            )
        }

        fn update(&mut self, particle: &mut Particle, amplitude: f32) {
            particle.update(
                &mut self.rng,
                amplitude,
                CENTER,
                &mut self.registry,
                &self.spawn,
                &self.config,
            );
        }
    }

    #[test]
    fn test_absorbed_particle_gets_fresh_allocation() {
        let mut fx = Fixture::new(11);
        let mut particle = fx.particle();

        // Park the particle 10 px from the center with a known velocity; the
        // naive integrated position would stay near the center.
        particle.position = CENTER + vec2(10.0, 0.0);
        particle.velocity = vec2(2.0, 0.0);
        let history_before = fx.registry.len();

        fx.update(&mut particle, 0.1);

        // A fresh allocation was recorded and the particle sits on it (plus
        // this frame's pull and jitter), far outside the absorption radius.
        assert_eq!(fx.registry.len(), history_before + 1);
        let drifted = CENTER + vec2(12.0, 0.0);
        assert!(particle.position.distance(drifted) > 20.0);
        assert!(particle.position.distance(CENTER) > fx.config.absorption_radius);
    }

    #[test]
    fn test_quiet_frame_pulls_toward_center() {
        let mut fx = Fixture::new(12);
        let mut particle = fx.particle();
        particle.position = CENTER + vec2(200.0, 0.0);
        particle.velocity = Vec2::ZERO;

        let before = particle.position.distance(CENTER);
        fx.update(&mut particle, 0.0);
        let after = particle.position.distance(CENTER);

        // base_gravity 3.6 inward, at most sqrt(2) of jitter outward.
        assert!(after < before);
    }

    #[test]
    fn test_velocity_decays_each_frame() {
        let mut fx = Fixture::new(13);
        let mut particle = fx.particle();
        particle.position = CENTER + vec2(200.0, 0.0);
        particle.velocity = vec2(8.0, 0.0);

        fx.update(&mut particle, 0.1);
        assert!((particle.velocity.x - 8.0 * 0.95).abs() < 1e-5);
    }

    #[test]
    fn test_impulse_fires_above_threshold_and_sets_cooldown() {
        let mut fx = Fixture::new(14);
        let mut particle = fx.particle();
        particle.position = CENTER + vec2(200.0, 0.0);
        particle.velocity = Vec2::ZERO;

        fx.update(&mut particle, 0.9);

        assert!(particle.velocity.length() > 0.0);
        // Cooldown was set to 3 and decremented once within the same frame.
        assert_eq!(particle.pulse_timer(), 2);
    }

    #[test]
    fn test_no_impulse_below_threshold() {
        let mut fx = Fixture::new(15);
        let mut particle = fx.particle();
        particle.position = CENTER + vec2(200.0, 0.0);
        particle.velocity = Vec2::ZERO;

        fx.update(&mut particle, 0.84);

        assert_eq!(particle.velocity, Vec2::ZERO);
        assert_eq!(particle.pulse_timer(), 0);
    }

    #[test]
    fn test_impulse_intensity_is_clamped() {
        let config = ParticleConfig::default();
        // Even an out-of-range amplitude sample cannot exceed the ceiling.
        let intensity = ((3.0 - config.impulse_floor) * config.impulse_gain).min(config.impulse_max);
        assert_eq!(intensity, config.impulse_max);
    }

    #[test]
    fn test_color_reverts_to_baseline_after_cooldown() {
        let mut fx = Fixture::new(16);
        let mut particle = fx.particle();
        particle.position = CENTER + vec2(200.0, 0.0);

        fx.update(&mut particle, 0.9);
        // Run quiet frames until the cooldown expires.
        for _ in 0..3 {
            fx.update(&mut particle, 0.1);
        }
        assert_eq!(particle.color, BASE_COLOR);
        assert_eq!(particle.radius, fx.config.radius);
        assert_eq!(particle.pulse_timer(), 0);
    }

    #[test]
    fn test_position_stays_finite_under_sustained_impulses() {
        let mut fx = Fixture::new(17);
        let mut particle = fx.particle();
        for i in 0..500 {
            let amplitude = if i % 3 == 0 { 1.2 } else { 0.2 };
            fx.update(&mut particle, amplitude);
            assert!(particle.position.is_finite());
            assert!(particle.velocity.is_finite());
        }
    }
}

//! Expanding flash circles spawned on the loudest frames.
//!
//! Each flash is a white circle at a random screen position that grows every
//! frame while fading out. The spawn count is a signed draw; a non-positive
//! draw simply spawns nothing, so loud frames sometimes pass without a
//! flash. That looseness is deliberate tuning, not an error path.

use glam::{vec2, Vec2};
use rand::Rng;

use super::FadingLifetime;
use crate::config::FlashConfig;

pub struct FlashCircle {
    pub position: Vec2,
    pub radius: f32,
    /// Radius gained per frame
    growth: f32,
    lifetime: u32,
    max_lifetime: u32,
}

impl FlashCircle {
    fn spawn(rng: &mut impl Rng, width: f32, height: f32, config: &FlashConfig) -> Self {
        let lifetime = rng.random_range(config.lifetime_min..=config.lifetime_max);
        Self {
            position: vec2(
                rng.random_range(0.0..=width),
                rng.random_range(0.0..=height),
            ),
            radius: rng.random_range(config.radius_min..=config.radius_max),
            growth: rng.random_range(config.growth_min..=config.growth_max),
            lifetime,
            max_lifetime: lifetime,
        }
    }

    fn update(&mut self) {
        self.lifetime = self.lifetime.saturating_sub(1);
        self.radius += self.growth;
    }
}

impl FadingLifetime for FlashCircle {
    fn lifetime_remaining(&self) -> u32 {
        self.lifetime
    }

    fn max_lifetime(&self) -> u32 {
        self.max_lifetime
    }
}

/// Active flash population with its spawn gate.
pub struct FlashField {
    flashes: Vec<FlashCircle>,
    config: FlashConfig,
}

impl FlashField {
    pub fn new(config: FlashConfig) -> Self {
        Self {
            flashes: Vec::new(),
            config,
        }
    }

    /// Spawn gate, run once per frame against this frame's amplitude.
    pub fn maybe_spawn(&mut self, rng: &mut impl Rng, amplitude: f32, width: f32, height: f32) {
        if amplitude > self.config.threshold {
            let count = rng.random_range(self.config.count_min..=self.config.count_max);
            for _ in 0..count.max(0) {
                self.flashes
                    .push(FlashCircle::spawn(rng, width, height, &self.config));
            }
        }
    }

    pub fn update(&mut self) {
        for flash in &mut self.flashes {
            flash.update();
        }
    }

    pub fn prune(&mut self) {
        self.flashes.retain(|f| f.is_alive());
    }

    pub fn flashes(&self) -> &[FlashCircle] {
        &self.flashes
    }
}

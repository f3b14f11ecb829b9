//! Frame driver: one fixed-order simulation step per display tick.
//!
//! Owns every piece of mutable simulation state plus the injected random
//! generator, so a step is a plain single-threaded pass with no shared
//! state. The shell calls `step` with elapsed playback time, then reads the
//! drawable state back through the accessors; nothing flows from the
//! renderer into the simulation.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SimConfig;
use crate::connections::{connect, Connection};
use crate::effects::{FlashField, StarField};
use crate::error::ConfigError;
use crate::particle::Particle;
use crate::spawn::SpawnRegistry;
use crate::timeline::AmplitudeTimeline;

/// Outcome of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Running,
    /// The amplitude data ran out; the run is over.
    Finished,
}

pub struct Simulation {
    config: SimConfig,
    timeline: AmplitudeTimeline,
    registry: SpawnRegistry,
    particles: Vec<Particle>,
    connections: Vec<Connection>,
    stars: StarField,
    flashes: FlashField,
    amplitude: f32,
    rng: StdRng,
}

impl Simulation {
    /// Builds a simulation seeded from OS entropy, the production default.
    pub fn new(config: SimConfig, samples: Vec<f32>) -> Result<Self, ConfigError> {
        Self::with_rng(config, samples, StdRng::from_os_rng())
    }

    /// Builds a simulation around a caller-supplied generator, which makes
    /// the whole random sequence reproducible.
    pub fn with_rng(
        config: SimConfig,
        samples: Vec<f32>,
        mut rng: StdRng,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let timeline = AmplitudeTimeline::new(samples, &config.timeline);
        let mut registry = SpawnRegistry::new(config.spawn.capacity);
        let center = config.center();
        let particles = (0..config.num_particles)
            .map(|_| {
                Particle::spawn(&mut rng, &mut registry, center, &config.spawn, &config.particle)
            })
            .collect();

        Ok(Self {
            timeline,
            registry,
            particles,
            connections: Vec::new(),
            stars: StarField::new(config.star),
            flashes: FlashField::new(config.flash),
            amplitude: 0.0,
            rng,
            config,
        })
    }

    /// Advances the whole simulation by one frame.
    ///
    /// The order is fixed: resolve this frame's amplitude, update particles,
    /// rebuild the connection set, run both effect spawn gates against the
    /// same amplitude, update effects, prune. Newly spawned effects are
    /// updated within their spawn frame.
    pub fn step(&mut self, elapsed_ms: u64) -> StepResult {
        let Some(amplitude) = self.timeline.sample_at(elapsed_ms) else {
            return StepResult::Finished;
        };
        self.amplitude = amplitude;
        let center = self.config.center();

        for particle in &mut self.particles {
            particle.update(
                &mut self.rng,
                amplitude,
                center,
                &mut self.registry,
                &self.config.spawn,
                &self.config.particle,
            );
        }

        self.connections = connect(&self.particles, amplitude, &self.config.connection);

        self.stars.maybe_spawn(&mut self.rng, amplitude, center);
        self.flashes
            .maybe_spawn(&mut self.rng, amplitude, self.config.width, self.config.height);

        self.stars.update();
        self.flashes.update();

        self.flashes.prune();
        self.stars.prune();

        StepResult::Running
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Amplitude resolved for the most recent frame.
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn flashes(&self) -> &FlashField {
        &self.flashes
    }

    pub fn center(&self) -> Vec2 {
        self.config.center()
    }
}

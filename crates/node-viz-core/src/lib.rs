//! Simulation core for the amplitude node visualizer.
//!
//! Everything here is pure state-stepping: a fixed population of particles
//! orbiting a center, an amplitude-gated connection graph between them, and
//! two families of short-lived effects (stars and flash circles) triggered by
//! loud moments. The crate knows nothing about windows or drawing; the
//! application shell feeds it elapsed time and reads back drawable state
//! after each step.

pub mod color;
pub mod config;
pub mod connections;
pub mod effects;
pub mod error;
pub mod particle;
pub mod sim;
pub mod spawn;
pub mod timeline;

pub use color::Color;
pub use config::{
    ConnectionConfig, FlashConfig, ParticleConfig, SimConfig, SpawnConfig, StarConfig,
    TimelineConfig,
};
pub use connections::{Connection, ConnectionTier};
pub use effects::{FadingLifetime, FlashCircle, FlashField, Star, StarField};
pub use error::ConfigError;
pub use particle::Particle;
pub use sim::{Simulation, StepResult};
pub use spawn::{SpawnOutcome, SpawnRegistry};
pub use timeline::AmplitudeTimeline;

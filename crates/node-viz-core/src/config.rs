//! Per-subsystem configuration with defaults tuned for a 600x600 window.
//!
//! Each subsystem owns a small config struct whose `Default` impl carries the
//! stock tuning. `SimConfig::validate` runs once at startup; the simulation
//! never starts from an inconsistent configuration.

use glam::{vec2, Vec2};

use crate::error::ConfigError;

/// Cadence of the precomputed amplitude data (not the display frame rate).
#[derive(Debug, Clone, Copy)]
pub struct TimelineConfig {
    /// Audio sample rate the amplitude data was extracted at (Hz)
    pub sample_rate: f32,
    /// Samples per amplitude frame
    pub hop_length: u32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 22050.0,
            hop_length: 512,
        }
    }
}

impl TimelineConfig {
    /// Amplitude frames per second of playback (~43.07 at the defaults)
    pub fn data_fps(&self) -> f32 {
        self.sample_rate / self.hop_length as f32
    }
}

/// Rejection-sampling allocator for non-overlapping spawn positions.
#[derive(Debug, Clone, Copy)]
pub struct SpawnConfig {
    /// Inner edge of the spawn ring around the center
    pub min_radius: f32,
    /// Outer edge of the spawn ring
    pub max_radius: f32,
    /// Candidates closer than this to any recorded position are rejected
    pub min_separation: f32,
    /// Attempts before giving up and taking an unconstrained fallback
    pub max_attempts: u32,
    /// Recorded positions beyond this count are cleared wholesale
    pub capacity: usize,
    /// Fallback rectangle relative to the center (x range)
    pub fallback_x: (f32, f32),
    /// Fallback rectangle relative to the center (y range)
    pub fallback_y: (f32, f32),
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            min_radius: 50.0,
            max_radius: 550.0,
            min_separation: 180.0,
            max_attempts: 100,
            capacity: 500,
            fallback_x: (-600.0, 300.0),
            fallback_y: (-450.0, 250.0),
        }
    }
}

/// Particle physics tuning.
#[derive(Debug, Clone, Copy)]
pub struct ParticleConfig {
    /// Baseline dot radius
    pub radius: f32,
    /// Velocity retained per frame (< 1.0)
    pub damping: f32,
    /// Distance to center under which a particle is absorbed and respawned
    pub absorption_radius: f32,
    /// Center pull applied every frame regardless of amplitude
    pub base_gravity: f32,
    /// Extra pull per unit of amplitude
    pub gravity_gain: f32,
    /// Per-axis positional jitter added every frame
    pub jitter: f32,
    /// Amplitude above which an outward impulse fires
    pub impulse_threshold: f32,
    /// Amplitude the impulse strength is measured from
    pub impulse_floor: f32,
    /// Impulse strength per unit of amplitude above the floor
    pub impulse_gain: f32,
    /// Impulse strength ceiling
    pub impulse_max: f32,
    /// Per-axis noise mixed into the impulse direction
    pub impulse_noise: f32,
    /// Weight of that noise against the outward direction
    pub noise_blend: f32,
    /// Frames before a pulsed particle reverts to baseline
    pub pulse_cooldown: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            damping: 0.95,
            absorption_radius: 25.0,
            base_gravity: 3.6,
            gravity_gain: 0.3,
            jitter: 1.0,
            impulse_threshold: 0.85,
            impulse_floor: 0.75,
            impulse_gain: 10.0,
            impulse_max: 15.0,
            impulse_noise: 3.0,
            noise_blend: 0.2,
            pulse_cooldown: 3,
        }
    }
}

/// Amplitude-gated connection graph tuning.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionConfig {
    /// Connection distance at zero amplitude
    pub base_distance: f32,
    /// Extra connection distance per unit of amplitude
    pub amplitude_multiplier: f32,
    /// Fraction of the threshold under which a connection is drawn strong
    pub strong_fraction: f32,
    /// Hard cap on connections per frame (rendering cost bound)
    pub max_connections: usize,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_distance: 75.0,
            amplitude_multiplier: 180.0,
            strong_fraction: 0.4,
            max_connections: 45,
        }
    }
}

/// Star effect tuning.
#[derive(Debug, Clone, Copy)]
pub struct StarConfig {
    /// Amplitude above which stars may spawn
    pub threshold: f32,
    /// Per-frame spawn probability once over the threshold
    pub spawn_chance: f32,
    /// Star lifetime in frames
    pub lifetime: u32,
    /// Outer radius of the star polygon
    pub radius: f32,
    /// Maximum simultaneous stars
    pub max_stars: usize,
    /// Outer edge of the spawn ring around the center
    pub ring_radius: f32,
    /// Spikes on the star polygon
    pub spike_count: usize,
    /// Rotation speed is drawn uniformly from +/- this (degrees per frame)
    pub rotation_speed_range: f32,
    /// Inward drift speed toward the center
    pub drift_speed: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            threshold: 0.75,
            spawn_chance: 0.4,
            lifetime: 20,
            radius: 30.0,
            max_stars: 4,
            ring_radius: 360.0,
            spike_count: 5,
            rotation_speed_range: 5.0,
            drift_speed: 1.0,
        }
    }
}

/// Flash circle effect tuning.
#[derive(Debug, Clone, Copy)]
pub struct FlashConfig {
    /// Amplitude above which flashes spawn
    pub threshold: f32,
    /// Signed spawn-count draw, lower bound (non-positive draws spawn nothing)
    pub count_min: i32,
    /// Signed spawn-count draw, upper bound
    pub count_max: i32,
    /// Initial radius range
    pub radius_min: f32,
    pub radius_max: f32,
    /// Radius growth per frame range
    pub growth_min: f32,
    pub growth_max: f32,
    /// Lifetime range in frames
    pub lifetime_min: u32,
    pub lifetime_max: u32,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            threshold: 0.85,
            count_min: -1,
            count_max: 1,
            radius_min: 5.0,
            radius_max: 15.0,
            growth_min: 1.5,
            growth_max: 3.5,
            lifetime_min: 15,
            lifetime_max: 35,
        }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Simulation space width in pixels
    pub width: f32,
    /// Simulation space height in pixels
    pub height: f32,
    /// Fixed particle population
    pub num_particles: usize,
    pub timeline: TimelineConfig,
    pub spawn: SpawnConfig,
    pub particle: ParticleConfig,
    pub connection: ConnectionConfig,
    pub star: StarConfig,
    pub flash: FlashConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            num_particles: 27,
            timeline: TimelineConfig::default(),
            spawn: SpawnConfig::default(),
            particle: ParticleConfig::default(),
            connection: ConnectionConfig::default(),
            star: StarConfig::default(),
            flash: FlashConfig::default(),
        }
    }
}

impl SimConfig {
    /// Center of the simulation space.
    pub fn center(&self) -> Vec2 {
        vec2(self.width / 2.0, self.height / 2.0)
    }

    /// Rejects configurations the simulation cannot run from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 {
            return Err(ConfigError::non_positive("width", self.width));
        }
        if self.height <= 0.0 {
            return Err(ConfigError::non_positive("height", self.height));
        }
        if self.num_particles == 0 {
            return Err(ConfigError::non_positive("num_particles", 0.0));
        }
        if self.timeline.sample_rate <= 0.0 {
            return Err(ConfigError::non_positive(
                "timeline.sample_rate",
                self.timeline.sample_rate,
            ));
        }
        if self.timeline.hop_length == 0 {
            return Err(ConfigError::non_positive("timeline.hop_length", 0.0));
        }
        if self.spawn.max_attempts == 0 {
            return Err(ConfigError::non_positive("spawn.max_attempts", 0.0));
        }
        if self.spawn.min_radius < 0.0 || self.spawn.min_radius > self.spawn.max_radius {
            return Err(ConfigError::inverted(
                "spawn radius range",
                self.spawn.min_radius,
                self.spawn.max_radius,
            ));
        }
        if self.spawn.min_separation < 0.0 {
            return Err(ConfigError::non_positive(
                "spawn.min_separation",
                self.spawn.min_separation,
            ));
        }
        if self.spawn.fallback_x.0 > self.spawn.fallback_x.1 {
            return Err(ConfigError::inverted(
                "spawn.fallback_x",
                self.spawn.fallback_x.0,
                self.spawn.fallback_x.1,
            ));
        }
        if self.spawn.fallback_y.0 > self.spawn.fallback_y.1 {
            return Err(ConfigError::inverted(
                "spawn.fallback_y",
                self.spawn.fallback_y.0,
                self.spawn.fallback_y.1,
            ));
        }
        if self.particle.damping <= 0.0 || self.particle.damping >= 1.0 {
            return Err(ConfigError::inverted(
                "particle.damping",
                self.particle.damping,
                1.0,
            ));
        }
        if self.connection.max_connections == 0 {
            return Err(ConfigError::non_positive("connection.max_connections", 0.0));
        }
        if self.star.spike_count < 2 {
            return Err(ConfigError::non_positive(
                "star.spike_count",
                self.star.spike_count as f64,
            ));
        }
        if self.star.lifetime == 0 {
            return Err(ConfigError::non_positive("star.lifetime", 0.0));
        }
        if self.flash.count_min > self.flash.count_max {
            return Err(ConfigError::inverted(
                "flash count range",
                self.flash.count_min,
                self.flash.count_max,
            ));
        }
        if self.flash.radius_min > self.flash.radius_max {
            return Err(ConfigError::inverted(
                "flash radius range",
                self.flash.radius_min,
                self.flash.radius_max,
            ));
        }
        if self.flash.growth_min > self.flash.growth_max {
            return Err(ConfigError::inverted(
                "flash growth range",
                self.flash.growth_min,
                self.flash.growth_max,
            ));
        }
        if self.flash.lifetime_min == 0 || self.flash.lifetime_min > self.flash.lifetime_max {
            return Err(ConfigError::inverted(
                "flash lifetime range",
                self.flash.lifetime_min,
                self.flash.lifetime_max,
            ));
        }
        Ok(())
    }
}

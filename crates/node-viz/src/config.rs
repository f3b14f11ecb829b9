//! Configuration file management.
//!
//! Handles loading user preferences from `~/.node-viz.toml`. Every field is
//! optional; anything unset falls back to the stock tuning in the core
//! config defaults. A commented template is written on first run.

use std::fs;
use std::path::PathBuf;

use log::info;
use node_viz_core::SimConfig;
use serde::{Deserialize, Serialize};

const CONFIG_TEMPLATE: &str = r#"# node-viz configuration file

# Path to the precomputed amplitude data (one float per line)
# amplitude_path = "Audio/Output/amplitude.txt"

# Window / simulation space size
# width = 600
# height = 600

# Particle population
# num_particles = 27

# =============================================================================
# Amplitude data cadence
# =============================================================================
# sample_rate = 22050.0   # Hz the amplitude data was extracted at
# hop_length = 512        # samples per amplitude frame (~43 data fps)

# =============================================================================
# Reactivity tuning
# =============================================================================
# base_connection_distance = 75.0       # connection threshold at silence
# connection_amplitude_multiplier = 180.0
# max_connections = 45                  # per-frame draw cap

# star_threshold = 0.75                 # amplitude gate for stars
# star_spawn_chance = 0.4
# max_stars = 4

# flash_threshold = 0.85                # amplitude gate for flashes
"#;

const DEFAULT_AMPLITUDE_PATH: &str = "Audio/Output/amplitude.txt";

#[derive(Serialize, Deserialize, Default)]
pub struct Config {
    pub amplitude_path: Option<String>,

    pub width: Option<f32>,
    pub height: Option<f32>,
    pub num_particles: Option<usize>,

    pub sample_rate: Option<f32>,
    pub hop_length: Option<u32>,

    pub base_connection_distance: Option<f32>,
    pub connection_amplitude_multiplier: Option<f32>,
    pub max_connections: Option<usize>,

    pub star_threshold: Option<f32>,
    pub star_spawn_chance: Option<f32>,
    pub max_stars: Option<usize>,

    pub flash_threshold: Option<f32>,
}

impl Config {
    fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".node-viz.toml"))
    }

    pub fn load() -> Self {
        let path = match Self::path() {
            Some(p) => p,
            None => return Self::default(),
        };

        // Create template file if it doesn't exist
        if !path.exists() {
            let _ = fs::write(&path, CONFIG_TEMPLATE);
            info!("created config template at {:?}", path);
        }

        fs::read_to_string(&path)
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    pub fn amplitude_path(&self) -> &str {
        self.amplitude_path
            .as_deref()
            .unwrap_or(DEFAULT_AMPLITUDE_PATH)
    }

    /// Folds the overrides into the core defaults. Validation happens when
    /// the simulation is built, before the run loop starts.
    pub fn sim_config(&self) -> SimConfig {
        let mut config = SimConfig::default();

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(num_particles) = self.num_particles {
            config.num_particles = num_particles;
        }
        if let Some(sample_rate) = self.sample_rate {
            config.timeline.sample_rate = sample_rate;
        }
        if let Some(hop_length) = self.hop_length {
            config.timeline.hop_length = hop_length;
        }
        if let Some(base) = self.base_connection_distance {
            config.connection.base_distance = base;
        }
        if let Some(mult) = self.connection_amplitude_multiplier {
            config.connection.amplitude_multiplier = mult;
        }
        if let Some(cap) = self.max_connections {
            config.connection.max_connections = cap;
        }
        if let Some(threshold) = self.star_threshold {
            config.star.threshold = threshold;
        }
        if let Some(chance) = self.star_spawn_chance {
            config.star.spawn_chance = chance;
        }
        if let Some(max_stars) = self.max_stars {
            config.star.max_stars = max_stars;
        }
        if let Some(threshold) = self.flash_threshold {
            config.flash.threshold = threshold;
        }

        config
    }
}

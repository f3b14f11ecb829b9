//! Amplitude-gated connection graph between particles.
//!
//! Louder frames widen the connection threshold, so the web between the
//! nodes thickens on beats. Enumeration runs over unique index pairs in a
//! fixed order and stops at the per-frame cap; pairs past the cap are
//! silently dropped, bounding draw cost for dense frames.

use crate::config::ConnectionConfig;
use crate::particle::Particle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionTier {
    /// Close pair, drawn bright and thick
    Strong,
    /// Ordinary pair, drawn dim
    Normal,
}

/// A renderable link between two particles, by index into the particle set.
#[derive(Debug, Clone, Copy)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub tier: ConnectionTier,
}

/// Computes the connection set for one frame.
pub fn connect(particles: &[Particle], amplitude: f32, config: &ConnectionConfig) -> Vec<Connection> {
    let threshold = config.base_distance + amplitude * config.amplitude_multiplier;
    let mut connections = Vec::new();

    'pairs: for a in 0..particles.len() {
        for b in (a + 1)..particles.len() {
            if connections.len() >= config.max_connections {
                break 'pairs;
            }
            let distance = particles[a].position.distance(particles[b].position);
            if distance < threshold {
                let tier = if distance < threshold * config.strong_fraction {
                    ConnectionTier::Strong
                } else {
                    ConnectionTier::Normal
                };
                connections.push(Connection { a, b, tier });
            }
        }
    }

    connections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ParticleConfig, SpawnConfig};
    use crate::spawn::SpawnRegistry;
    use glam::{vec2, Vec2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle_at(position: Vec2) -> Particle {
        let mut rng = StdRng::seed_from_u64(0);
        let mut registry = SpawnRegistry::new(500);
        let mut p = Particle::spawn(
            &mut rng,
            &mut registry,
            Vec2::new(300.0, 300.0),
            &SpawnConfig::default(),
            &ParticleConfig::default(),
        );
        p.position = position;
        p
    }

    #[test]
    fn test_pairs_within_threshold_connect() {
        let particles = vec![
            particle_at(vec2(0.0, 0.0)),
            particle_at(vec2(70.0, 0.0)),
            particle_at(vec2(500.0, 500.0)),
        ];
        let connections = connect(&particles, 0.0, &ConnectionConfig::default());
        // Threshold 75 at zero amplitude: only the first two connect.
        assert_eq!(connections.len(), 1);
        assert_eq!((connections[0].a, connections[0].b), (0, 1));
        assert_eq!(connections[0].tier, ConnectionTier::Normal);
    }

    #[test]
    fn test_threshold_grows_with_amplitude() {
        let particles = vec![particle_at(vec2(0.0, 0.0)), particle_at(vec2(150.0, 0.0))];
        let config = ConnectionConfig::default();
        assert!(connect(&particles, 0.0, &config).is_empty());
        // 75 + 0.5 * 180 = 165 > 150
        assert_eq!(connect(&particles, 0.5, &config).len(), 1);
    }

    #[test]
    fn test_close_pairs_are_strong_tier() {
        let particles = vec![particle_at(vec2(0.0, 0.0)), particle_at(vec2(20.0, 0.0))];
        let connections = connect(&particles, 0.0, &ConnectionConfig::default());
        // 20 < 0.4 * 75
        assert_eq!(connections[0].tier, ConnectionTier::Strong);
    }

    #[test]
    fn test_connection_cap_holds_on_dense_frames() {
        // 27 coincident particles yield 351 candidate pairs.
        let particles: Vec<Particle> = (0..27).map(|_| particle_at(vec2(10.0, 10.0))).collect();
        let config = ConnectionConfig::default();
        let connections = connect(&particles, 1.0, &config);
        assert_eq!(connections.len(), config.max_connections);
    }

    #[test]
    fn test_first_enumerated_pairs_win_under_the_cap() {
        let particles: Vec<Particle> = (0..27).map(|_| particle_at(vec2(10.0, 10.0))).collect();
        let connections = connect(&particles, 1.0, &ConnectionConfig::default());
        // Index order: all pairs anchored at particle 0 come first.
        assert_eq!((connections[0].a, connections[0].b), (0, 1));
        assert_eq!((connections[25].a, connections[25].b), (0, 26));
        assert_eq!((connections[26].a, connections[26].b), (1, 2));
    }
}

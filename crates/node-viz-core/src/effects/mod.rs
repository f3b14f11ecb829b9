//! Short-lived decorative effects spawned on loud frames.

pub mod flash;
pub mod star;

pub use flash::{FlashCircle, FlashField};
pub use star::{Star, StarField};

/// Shared fade-out lifecycle for ephemeral effects.
///
/// Visibility is a linear function of remaining lifetime; once it hits zero
/// the owning field prunes the instance on the same frame's prune pass.
pub trait FadingLifetime {
    /// Frames left to live.
    fn lifetime_remaining(&self) -> u32;

    /// Lifetime the instance started with.
    fn max_lifetime(&self) -> u32;

    /// Remaining lifetime as a fraction in [0, 1].
    fn remaining_fraction(&self) -> f32 {
        if self.max_lifetime() == 0 {
            return 0.0;
        }
        (self.lifetime_remaining() as f32 / self.max_lifetime() as f32).clamp(0.0, 1.0)
    }

    /// Per-instance draw alpha in [0, 1].
    fn alpha(&self) -> f32 {
        self.remaining_fraction()
    }

    fn is_alive(&self) -> bool {
        self.lifetime_remaining() > 0
    }
}

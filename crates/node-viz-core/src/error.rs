use thiserror::Error;

/// Configuration problems detected before the run loop starts.
///
/// The simulation refuses to start from an inconsistent configuration;
/// everything else (allocator fallback, data exhaustion) is handled inline
/// and is never an error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name}: lower bound {min} exceeds upper bound {max}")]
    InvertedRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
}

impl ConfigError {
    pub(crate) fn non_positive(name: &'static str, value: impl Into<f64>) -> Self {
        Self::NonPositive {
            name,
            value: value.into(),
        }
    }

    pub(crate) fn inverted(name: &'static str, min: impl Into<f64>, max: impl Into<f64>) -> Self {
        Self::InvertedRange {
            name,
            min: min.into(),
            max: max.into(),
        }
    }
}

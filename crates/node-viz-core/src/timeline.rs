//! Maps elapsed playback time to precomputed amplitude samples.
//!
//! The amplitude data is extracted offline at a fixed hop length, so its
//! frame rate (~43 fps at the defaults) differs from the display rate. Each
//! display tick resolves the nearest past amplitude frame; there is no
//! interpolation. Running past the end of the data is the normal way a run
//! terminates.

use crate::config::TimelineConfig;

pub struct AmplitudeTimeline {
    samples: Vec<f32>,
    data_fps: f32,
}

impl AmplitudeTimeline {
    pub fn new(samples: Vec<f32>, config: &TimelineConfig) -> Self {
        Self {
            samples,
            data_fps: config.data_fps(),
        }
    }

    /// Amplitude frame index for a point in elapsed playback time.
    pub fn frame_index(&self, elapsed_ms: u64) -> usize {
        ((elapsed_ms as f32 / 1000.0) * self.data_fps) as usize
    }

    /// Amplitude at a point in elapsed playback time, `None` once the data
    /// is exhausted.
    pub fn sample_at(&self, elapsed_ms: u64) -> Option<f32> {
        self.samples.get(self.frame_index(elapsed_ms)).copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

//! Loads the precomputed amplitude time series.
//!
//! The file format is one float per line, as produced by the offline
//! extraction step. The whole series is read up front; the simulation never
//! touches the filesystem after startup.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub fn load(path: &Path) -> Result<Vec<f32>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading amplitude data from {}", path.display()))?;

    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.trim()
                .parse::<f32>()
                .with_context(|| format!("{}:{}: not a float: {:?}", path.display(), i + 1, line))
        })
        .collect()
}

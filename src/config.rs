use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Tunables for zoom and picking. Values mirror the scene these scripts were
/// written for; override via a JSON file when the host differs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Raw scroll units per wheel detent (120 on Windows-style mice).
    pub scroll_tick: f32,
    /// Degrees of field-of-view change per normalized scroll step.
    pub fov_gain: f32,
    pub ortho_size_min: f32,
    pub ortho_size_max: f32,
    pub fov_min_deg: f32,
    pub fov_max_deg: f32,
    /// Height of the picking plane above the ground entity, so markers sit
    /// on top of the floor instead of inside it.
    pub ground_lift: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll_tick: 120.0,
            fov_gain: 5.0,
            ortho_size_min: 1.0,
            ortho_size_max: 12.0,
            fov_min_deg: 20.0,
            fov_max_deg: 100.0,
            ground_lift: 1.0,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }
}

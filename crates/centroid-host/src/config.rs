//! Host configuration, loaded from an optional JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use centroid_core::GameConfig;
use centroid_core::Viewport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HostConfig {
    pub width: f64,
    pub height: f64,
    /// Frames to run before exiting.
    pub frames: u64,
    /// Simulated users on the floor.
    pub ghosts: usize,
    /// Largest random step a ghost takes per frame, in pixels.
    pub ghost_speed: f64,
    /// Share of the remaining centroid-to-target gap closed per frame.
    pub ghost_pull: f64,
    /// JSON-lines file receiving every frame's draw calls.
    pub draw_log: Option<PathBuf>,
    pub game: GameConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            width: 576.0,
            height: 576.0,
            frames: 2_000,
            ghosts: 6,
            ghost_speed: 3.0,
            ghost_pull: 0.05,
            draw_log: None,
            game: GameConfig::default(),
        }
    }
}

impl HostConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

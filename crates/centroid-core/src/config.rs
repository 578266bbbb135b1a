//! Startup configuration for a game.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Viewport;
use crate::target::{DEBUG_BOUNDS_FACTOR, DEFAULT_BOUNDS_FACTOR};
use crate::theme::Theme;

/// Theme preset shipped on the floor.
pub const DEFAULT_THEME: usize = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Index into [`Theme::presets`].
    pub theme: usize,
    /// Seed for target placement.
    pub seed: u64,
    /// Keeps targets in the central third for quick manual testing.
    pub debug: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME,
            seed: 12345,
            debug: false,
        }
    }
}

impl GameConfig {
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Theme::preset(self.theme)
    }

    pub fn bounds_factor(&self) -> f64 {
        if self.debug {
            DEBUG_BOUNDS_FACTOR
        } else {
            DEFAULT_BOUNDS_FACTOR
        }
    }
}

/// Rejects viewports with no drawable area.
pub fn validate_viewport(viewport: Viewport) -> Result<Viewport, ConfigError> {
    if viewport.width > 0.0 && viewport.height > 0.0 {
        Ok(viewport)
    } else {
        Err(ConfigError::Viewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}

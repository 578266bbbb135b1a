//! Configuration errors.

/// Rejected game configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown theme preset {index} (expected 0..{count})")]
    UnknownTheme { index: usize, count: usize },

    #[error("Target bounds factor must be within (0, 1], got {0}")]
    BoundsFactor(f64),

    #[error("Viewport must have positive size, got {width}x{height}")]
    Viewport { width: f64, height: f64 },
}

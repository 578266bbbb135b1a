//! Deterministic target placement.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use crate::error::ConfigError;
use crate::geometry::{Point, Viewport};

/// Share of each viewport dimension a target may land in.
pub const DEFAULT_BOUNDS_FACTOR: f64 = 2.0 / 3.0;

/// Narrower bounds used in debug mode, keeping targets near the center.
pub const DEBUG_BOUNDS_FACTOR: f64 = 1.0 / 3.0;

/// Re-draws allowed when a placement repeats the previous target.
const MAX_DISTINCT_ATTEMPTS: u32 = 16;

/// Axis-aligned rectangle a target can be placed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Centered sub-rectangle covering `factor` of each viewport dimension.
    pub fn centered(viewport: Viewport, factor: f64) -> Self {
        let offset = (1.0 - factor) / 2.0;
        Self {
            x: viewport.width * offset,
            y: viewport.height * offset,
            width: viewport.width * factor,
            height: viewport.height * factor,
        }
    }

    /// Inclusive containment check.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

/// Places targets uniformly at random inside the centered bounds.
#[derive(Debug, Clone)]
pub struct TargetPlacer {
    bounds_factor: f64,
    rng: ChaCha8Rng,
}

impl TargetPlacer {
    /// Creates a placer with the given RNG seed.
    pub fn new(bounds_factor: f64, seed: u64) -> Result<Self, ConfigError> {
        if !(bounds_factor > 0.0 && bounds_factor <= 1.0) {
            return Err(ConfigError::BoundsFactor(bounds_factor));
        }
        Ok(Self {
            bounds_factor,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    pub fn bounds_factor(&self) -> f64 {
        self.bounds_factor
    }

    pub fn bounds(&self, viewport: Viewport) -> Bounds {
        Bounds::centered(viewport, self.bounds_factor)
    }

    /// Picks an integer-valued point inside the bounds, uniformly.
    pub fn place(&mut self, viewport: Viewport) -> Point {
        let bounds = self.bounds(viewport);
        let x = sample_axis(&mut self.rng, bounds.x, bounds.width);
        let y = sample_axis(&mut self.rng, bounds.y, bounds.height);
        Point::new(x, y)
    }

    /// Like [`place`](Self::place), but re-draws while the result equals
    /// `previous`. Bounds too small to hold a second integer point give up
    /// after a few attempts and return the repeat with a warning.
    pub fn place_distinct(&mut self, viewport: Viewport, previous: Point) -> Point {
        let mut target = self.place(viewport);
        for _ in 0..MAX_DISTINCT_ATTEMPTS {
            if target != previous {
                return target;
            }
            target = self.place(viewport);
        }
        if target == previous {
            warn!(
                ?previous,
                attempts = MAX_DISTINCT_ATTEMPTS,
                "Bounds too small for a new target, repeating the previous one"
            );
        }
        target
    }
}

/// Uniform integer in `[start, start + len]`. A span holding no integer
/// yields its midpoint.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn sample_axis(rng: &mut ChaCha8Rng, start: f64, len: f64) -> f64 {
    let lo = start.ceil();
    let hi = (start + len).floor();
    if hi < lo {
        return start + len / 2.0;
    }
    rng.random_range(lo as i64..=hi as i64) as f64
}

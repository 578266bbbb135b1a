//! Victory spin of the winning polygon.

use std::f64::consts::PI;

use crate::geometry::{Point, Rotation};

/// Angle added per celebration frame.
pub const ROTATION_STEP: f64 = PI / 24.0;

/// Frames in a full celebration: 72 steps of π/24 make 3π.
pub const CELEBRATION_FRAMES: u32 = 72;

/// Total rotation after which the celebration ends.
pub const CELEBRATION_ANGLE: f64 = 3.0 * PI;

/// Frame-counted rotation about a fixed pivot.
///
/// The angle is derived from an integer step count, so completion lands on
/// exactly [`CELEBRATION_FRAMES`] steps regardless of float accumulation.
#[derive(Debug, Clone, PartialEq)]
pub struct CelebrationAnimator {
    pivot: Point,
    steps: u32,
}

impl CelebrationAnimator {
    /// Starts a celebration at angle zero.
    pub fn new(pivot: Point) -> Self {
        Self { pivot, steps: 0 }
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Accumulated rotation in radians.
    pub fn angle(&self) -> f64 {
        f64::from(self.steps) * ROTATION_STEP
    }

    /// Rotation for the current frame.
    pub fn transform(&self) -> Rotation {
        Rotation::about(self.pivot, self.angle())
    }

    pub fn advance(&mut self) {
        self.steps = self.steps.saturating_add(1);
    }

    pub fn is_complete(&self) -> bool {
        self.steps >= CELEBRATION_FRAMES
    }
}

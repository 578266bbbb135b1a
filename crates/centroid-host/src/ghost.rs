//! Simulated floor users.
//!
//! Ghosts wander inside the centered two-thirds of the floor and collectively
//! drift toward the target, so an unattended floor still completes rounds.

use centroid_core::target::DEFAULT_BOUNDS_FACTOR;
use centroid_core::{Bounds, Point, Viewport, centroid};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
pub struct GhostCrowd {
    ghosts: Vec<Point>,
    bounds: Bounds,
    speed: f64,
    pull: f64,
    rng: ChaCha8Rng,
}

impl GhostCrowd {
    /// Scatters `count` ghosts uniformly inside the ghost bounds.
    pub fn new(count: usize, viewport: Viewport, speed: f64, pull: f64, seed: u64) -> Self {
        let bounds = Bounds::centered(viewport, DEFAULT_BOUNDS_FACTOR);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ghosts = (0..count)
            .map(|_| {
                Point::new(
                    bounds.x + rng.random::<f64>() * bounds.width,
                    bounds.y + rng.random::<f64>() * bounds.height,
                )
            })
            .collect();

        Self {
            ghosts,
            bounds,
            speed,
            pull,
            rng,
        }
    }

    pub fn positions(&self) -> &[Point] {
        &self.ghosts
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Moves every ghost one frame and returns the new positions.
    ///
    /// The shared pull shifts all ghosts by the same amount, which moves the
    /// centroid toward `target` by `pull` of the gap.
    pub fn step(&mut self, target: Point) -> &[Point] {
        let pull = centroid(&self.ghosts).map_or((0.0, 0.0), |c| {
            ((target.x - c.x) * self.pull, (target.y - c.y) * self.pull)
        });

        for ghost in &mut self.ghosts {
            let (jitter_x, jitter_y) = if self.speed > 0.0 {
                (
                    self.rng.random_range(-self.speed..=self.speed),
                    self.rng.random_range(-self.speed..=self.speed),
                )
            } else {
                (0.0, 0.0)
            };
            ghost.x = (ghost.x + jitter_x + pull.0)
                .clamp(self.bounds.x, self.bounds.x + self.bounds.width);
            ghost.y = (ghost.y + jitter_y + pull.1)
                .clamp(self.bounds.y, self.bounds.y + self.bounds.height);
        }

        &self.ghosts
    }
}

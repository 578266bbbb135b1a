//! Centroid-Live Core Library
//!
//! Geometry and round logic for the center-of-mass floor game: people on a
//! tracked floor form a polygon and steer its centroid onto a target. On a
//! hit the shape spins, then a new target is placed.
//!
//! The library is frame driven and owns no window. Hosts feed tracked
//! positions into [`CentroidGame::frame`] and receive draw calls on a
//! [`Surface`].

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod celebration;
pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod shade;
pub mod surface;
pub mod target;
pub mod theme;

pub use celebration::{CELEBRATION_FRAMES, CelebrationAnimator};
pub use color::{Color, Hsb};
pub use config::GameConfig;
pub use error::ConfigError;
pub use game::{CentroidGame, FinalState, FrameOutcome, GamePhase, WIN_DISTANCE};
pub use geometry::{Point, Rotation, Viewport, centroid, order_points};
pub use shade::{CornerRelativeHue, DirectRgbBlend, ShadeInput, ShadeModel, ShadeStyle};
pub use surface::{DrawCommand, RecordingSurface, ShapeStyle, Stroke, Surface};
pub use target::{Bounds, TargetPlacer};
pub use theme::Theme;

//! Round state machine: playing until the centroid reaches the target, then
//! celebrating with a spin of the winning shape.

use serde::Serialize;
use tracing::{debug, info};

use crate::celebration::CelebrationAnimator;
use crate::config::{GameConfig, validate_viewport};
use crate::error::ConfigError;
use crate::geometry::{Point, Viewport, centroid, order_points};
use crate::shade::{ShadeInput, ShadeModel};
use crate::surface::{DEFAULT_STROKE, ShapeStyle, Stroke, Surface};
use crate::target::TargetPlacer;
use crate::theme::Theme;

/// Centroid-to-target distance, in pixels, that wins the round.
pub const WIN_DISTANCE: f64 = 10.0;

pub const CENTROID_RADIUS: f64 = 10.0;
pub const TARGET_RADIUS: f64 = 10.0;

pub const CONNECTOR_WEIGHT: f64 = 4.0;
pub const TARGET_STROKE_WEIGHT: f64 = 2.0;
pub const WIN_CENTROID_STROKE_WEIGHT: f64 = 3.0;

/// Shape and centroid captured on the winning frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalState {
    pub boundary: Vec<Point>,
    pub centroid: Point,
}

/// Game phase representing the current state of the round.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GamePhase {
    /// Users are steering the centroid toward the target.
    #[default]
    Playing,
    /// The winning shape is spinning.
    Celebrating {
        final_state: FinalState,
        animator: CelebrationAnimator,
    },
}

/// What happened during one call to [`CentroidGame::frame`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrameOutcome {
    /// Nobody on the floor; only the target was drawn.
    Idle,
    /// Centroid drawn, target not reached.
    Played { distance: f64 },
    /// Target reached this frame; the celebration starts next frame.
    Won { centroid: Point, distance: f64 },
    /// One celebration frame drawn at `angle`.
    Celebrated { angle: f64 },
    /// Last celebration frame drawn and a new target placed.
    RoundComplete { target: Point },
}

/// The whole game: theme, target, phase and the placer that moves the target.
#[derive(Debug, Clone)]
pub struct CentroidGame {
    theme: Theme,
    placer: TargetPlacer,
    target: Point,
    phase: GamePhase,
    rounds_won: u64,
}

impl CentroidGame {
    /// Selects the theme, enters `Playing` and places the first target.
    pub fn new(config: &GameConfig, viewport: Viewport) -> Result<Self, ConfigError> {
        let theme = config.theme()?;
        let viewport = validate_viewport(viewport)?;
        let mut placer = TargetPlacer::new(config.bounds_factor(), config.seed)?;
        let target = placer.place(viewport);
        info!(theme = config.theme, ?target, "Game ready");

        Ok(Self {
            theme,
            placer,
            target,
            phase: GamePhase::Playing,
            rounds_won: 0,
        })
    }

    /// Advances the game by one frame, drawing it on `surface`.
    ///
    /// `users` are the tracked positions for this frame. They are ignored
    /// while celebrating, which replays the captured shape instead.
    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        users: &[Point],
        viewport: Viewport,
        surface: &mut S,
    ) -> FrameOutcome {
        match self.phase {
            GamePhase::Playing => self.play(users, viewport, surface),
            GamePhase::Celebrating { .. } => self.celebrate(viewport, surface),
        }
    }

    fn play<S: Surface + ?Sized>(
        &mut self,
        users: &[Point],
        viewport: Viewport,
        surface: &mut S,
    ) -> FrameOutcome {
        let Some(center) = centroid(users) else {
            debug!("No users tracked, skipping shape");
            self.draw_target(surface);
            return FrameOutcome::Idle;
        };

        let boundary = order_points(users);
        let distance = center.distance(self.target);
        let fill = self.theme.shade_style.shade(&ShadeInput {
            distance,
            target: self.target,
            viewport,
            near: self.theme.near,
            far: self.theme.far,
        });

        // a polygon needs three corners; fewer users draw connectors only
        if boundary.len() >= 3 {
            surface.polygon(&boundary, fill);
        }
        let connector = Stroke::new(self.theme.connectors, CONNECTOR_WEIGHT);
        for &user in users {
            surface.line(user, center, connector);
        }
        surface.circle(
            center,
            CENTROID_RADIUS,
            ShapeStyle::filled(self.theme.centroid).with_stroke(DEFAULT_STROKE),
        );
        self.draw_target(surface);
        for &user in users {
            surface.user_glyph(user);
        }

        debug!(users = users.len(), distance, "Frame played");

        if distance < WIN_DISTANCE {
            info!(?center, target = ?self.target, distance, "Centroid reached target");
            self.phase = GamePhase::Celebrating {
                final_state: FinalState {
                    boundary,
                    centroid: center,
                },
                animator: CelebrationAnimator::new(center),
            };
            return FrameOutcome::Won {
                centroid: center,
                distance,
            };
        }

        FrameOutcome::Played { distance }
    }

    fn celebrate<S: Surface + ?Sized>(&mut self, viewport: Viewport, surface: &mut S) -> FrameOutcome {
        let GamePhase::Celebrating {
            final_state,
            animator,
        } = &mut self.phase
        else {
            return FrameOutcome::Idle;
        };

        let rotation = animator.transform();
        if final_state.boundary.len() >= 3 {
            surface.polygon(&rotation.apply_all(&final_state.boundary), self.theme.win_shape);
        }
        surface.circle(
            rotation.pivot(),
            CENTROID_RADIUS,
            ShapeStyle::filled(self.theme.win_centroid).with_stroke(Stroke::new(
                self.theme.win_centroid_stroke,
                WIN_CENTROID_STROKE_WEIGHT,
            )),
        );

        let angle = animator.angle();
        animator.advance();
        if !animator.is_complete() {
            return FrameOutcome::Celebrated { angle };
        }

        self.phase = GamePhase::Playing;
        self.rounds_won += 1;
        self.target = self.placer.place_distinct(viewport, self.target);
        info!(target = ?self.target, rounds = self.rounds_won, "Celebration finished, new target placed");
        FrameOutcome::RoundComplete {
            target: self.target,
        }
    }

    fn draw_target<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.circle(
            self.target,
            TARGET_RADIUS,
            ShapeStyle {
                fill: self.theme.target_fill,
                stroke: Some(Stroke::new(self.theme.target_stroke, TARGET_STROKE_WEIGHT)),
            },
        );
    }

    /// Returns the current game phase.
    pub fn current_phase(&self) -> &GamePhase {
        &self.phase
    }

    pub fn is_celebrating(&self) -> bool {
        matches!(self.phase, GamePhase::Celebrating { .. })
    }

    pub fn target(&self) -> Point {
        self.target
    }

    /// The captured winning shape, present only while celebrating.
    pub fn final_state(&self) -> Option<&FinalState> {
        match &self.phase {
            GamePhase::Celebrating { final_state, .. } => Some(final_state),
            GamePhase::Playing => None,
        }
    }

    /// Accumulated celebration rotation; zero while playing.
    pub fn rotation_angle(&self) -> f64 {
        match &self.phase {
            GamePhase::Celebrating { animator, .. } => animator.angle(),
            GamePhase::Playing => 0.0,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn placer(&self) -> &TargetPlacer {
        &self.placer
    }

    pub fn rounds_won(&self) -> u64 {
        self.rounds_won
    }
}

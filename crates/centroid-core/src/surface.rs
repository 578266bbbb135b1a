//! Drawing surface abstraction.
//!
//! The game never owns a canvas. Each frame it issues primitive calls on a
//! [`Surface`] in final viewport coordinates; there is no transform stack.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::Point;

/// Outline color and width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub weight: f64,
}

impl Stroke {
    pub const fn new(color: Color, weight: f64) -> Self {
        Self { color, weight }
    }
}

/// Default outline: one pixel of black.
pub const DEFAULT_STROKE: Stroke = Stroke::new(Color::BLACK, 1.0);

/// Fill and outline for a closed shape. `None` leaves that part undrawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShapeStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl ShapeStyle {
    pub const fn filled(fill: Color) -> Self {
        Self {
            fill: Some(fill),
            stroke: None,
        }
    }

    pub const fn with_stroke(self, stroke: Stroke) -> Self {
        Self {
            stroke: Some(stroke),
            ..self
        }
    }
}

/// Rendering collaborator.
pub trait Surface {
    /// Filled polygon, closed last-to-first, without outline.
    fn polygon(&mut self, points: &[Point], fill: Color);

    fn circle(&mut self, center: Point, radius: f64, style: ShapeStyle);

    fn line(&mut self, from: Point, to: Point, stroke: Stroke);

    /// Delegated avatar draw for one tracked user.
    fn user_glyph(&mut self, position: Point);
}

/// A single recorded draw call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Polygon {
        points: Vec<Point>,
        fill: Color,
    },
    Circle {
        center: Point,
        radius: f64,
        style: ShapeStyle,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    UserGlyph {
        position: Point,
    },
}

/// Surface that stores draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Returns the recorded calls and starts a fresh recording.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn polygons(&self) -> impl Iterator<Item = &[Point]> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polygon { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f64, &ShapeStyle)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                style,
            } => Some((*center, *radius, style)),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    pub fn glyph_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::UserGlyph { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn polygon(&mut self, points: &[Point], fill: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            fill,
        });
    }

    fn circle(&mut self, center: Point, radius: f64, style: ShapeStyle) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            style,
        });
    }

    fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn user_glyph(&mut self, position: Point) {
        self.commands.push(DrawCommand::UserGlyph { position });
    }
}

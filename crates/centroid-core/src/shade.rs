//! Proximity shading: maps the centroid-to-target distance to a fill color.
//!
//! Two models exist. [`CornerRelativeHue`] flips between the near and far
//! hues around a fixed midpoint and fades saturation toward it;
//! [`DirectRgbBlend`] blends the endpoint channels by root mean square.
//! A theme picks one through [`ShadeStyle`].

use serde::{Deserialize, Serialize};

use crate::color::{Color, Hsb};
use crate::geometry::{Point, Viewport};

/// Distance ratio at which the corner-relative model switches hue.
pub const MIDPOINT: f64 = 0.3;

/// Inputs for one shading query.
#[derive(Debug, Clone, Copy)]
pub struct ShadeInput {
    pub distance: f64,
    pub target: Point,
    pub viewport: Viewport,
    pub near: Color,
    pub far: Color,
}

/// A color interpolation model.
pub trait ShadeModel {
    /// Fill color for the given distance. Ratios beyond the model's range
    /// extrapolate rather than clamp.
    fn shade(&self, input: &ShadeInput) -> Color;
}

/// Hue of the nearer endpoint, saturation proportional to the distance
/// from [`MIDPOINT`], relative to the farthest viewport corner.
#[derive(Debug, Clone, Copy, Default)]
pub struct CornerRelativeHue;

impl CornerRelativeHue {
    /// Largest distance from the target to any viewport corner.
    pub fn max_distance(target: Point, viewport: Viewport) -> f64 {
        viewport
            .corners()
            .iter()
            .map(|corner| corner.distance(target))
            .fold(0.0, f64::max)
    }

    pub fn hsb(&self, input: &ShadeInput) -> Hsb {
        let ratio = input.distance / Self::max_distance(input.target, input.viewport);
        let endpoint = if ratio > MIDPOINT { input.far } else { input.near };
        // whole percent, as the floor installation rendered it
        let saturation = ((ratio - MIDPOINT).abs() * 100.0 / MIDPOINT).trunc();
        Hsb::new(endpoint.hue(), saturation, 100.0)
    }
}

impl ShadeModel for CornerRelativeHue {
    fn shade(&self, input: &ShadeInput) -> Color {
        self.hsb(input).to_color()
    }
}

/// Per-channel root-mean-square blend between near and far colors, over half
/// the viewport diagonal of a square screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectRgbBlend;

impl DirectRgbBlend {
    pub fn max_distance(viewport: Viewport) -> f64 {
        std::f64::consts::FRAC_1_SQRT_2 * viewport.width
    }
}

impl ShadeModel for DirectRgbBlend {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn shade(&self, input: &ShadeInput) -> Color {
        let ratio = input.distance / Self::max_distance(input.viewport);
        let blend = |far: u8, near: u8| {
            let far = f64::from(far);
            let near = f64::from(near);
            // extrapolated ratios can push the radicand below zero
            let mean_square = (far * far * ratio + near * near * (1.0 - ratio)).max(0.0);
            mean_square.sqrt().round().clamp(0.0, 255.0) as u8
        };
        Color::rgb(
            blend(input.far.r, input.near.r),
            blend(input.far.g, input.near.g),
            blend(input.far.b, input.near.b),
        )
    }
}

/// The shading model selected by a theme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShadeStyle {
    CornerRelativeHue,
    DirectRgbBlend,
}

impl ShadeModel for ShadeStyle {
    fn shade(&self, input: &ShadeInput) -> Color {
        match self {
            Self::CornerRelativeHue => CornerRelativeHue.shade(input),
            Self::DirectRgbBlend => DirectRgbBlend.shade(input),
        }
    }
}

//! Color themes, fixed at startup.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;
use crate::shade::ShadeStyle;

/// Colors and shading model for one installation look.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    /// Lines from each user to the centroid.
    pub connectors: Color,
    pub centroid: Color,
    /// Target fill; `None` draws the target as an outline only.
    pub target_fill: Option<Color>,
    pub target_stroke: Color,
    /// Gradient endpoint when the centroid sits on the target.
    pub near: Color,
    /// Gradient endpoint when the centroid is far from the target.
    pub far: Color,
    pub win_centroid: Color,
    pub win_centroid_stroke: Color,
    pub win_shape: Color,
    pub shade_style: ShadeStyle,
}

impl Theme {
    /// Purple connectors on a red-to-blue hue scale.
    pub const fn magenta() -> Self {
        Self {
            connectors: Color::PURPLE,
            centroid: Color::PURPLE,
            target_fill: None,
            target_stroke: Color::GREEN,
            near: Color::RED,
            far: Color::BLUE,
            win_centroid: Color::PURPLE,
            win_centroid_stroke: Color::RED,
            win_shape: Color::RED,
            shade_style: ShadeStyle::CornerRelativeHue,
        }
    }

    /// Teal connectors on a green-to-blue channel blend.
    pub const fn teal() -> Self {
        Self {
            connectors: Color::TEAL,
            centroid: Color::TEAL,
            target_fill: None,
            target_stroke: Color::PURPLE,
            near: Color::GREEN,
            far: Color::BLUE,
            win_centroid: Color::TEAL,
            win_centroid_stroke: Color::PURPLE,
            win_shape: Color::GREEN,
            shade_style: ShadeStyle::DirectRgbBlend,
        }
    }

    /// All presets, indexed by the `theme` config value.
    pub fn presets() -> [Theme; 2] {
        [Self::magenta(), Self::teal()]
    }

    pub fn preset(index: usize) -> Result<Theme, ConfigError> {
        let presets = Self::presets();
        let count = presets.len();
        presets
            .into_iter()
            .nth(index)
            .ok_or(ConfigError::UnknownTheme { index, count })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::teal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        assert_eq!(Theme::preset(0).unwrap(), Theme::magenta());
        assert_eq!(Theme::preset(1).unwrap(), Theme::teal());
        assert_eq!(Theme::default(), Theme::teal());
    }

    #[test]
    fn test_unknown_preset_rejected() {
        let err = Theme::preset(7).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTheme { index: 7, count: 2 }));
    }

    #[test]
    fn test_presets_carry_their_shade_style() {
        assert_eq!(Theme::magenta().shade_style, ShadeStyle::CornerRelativeHue);
        assert_eq!(Theme::teal().shade_style, ShadeStyle::DirectRgbBlend);
        assert!(Theme::presets().iter().all(|t| t.target_fill.is_none()));
    }
}

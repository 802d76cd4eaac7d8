//! Color representation for drawing entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity color
///
/// Colors follow the CAD convention: an indexed palette (ACI, 1-255),
/// true RGB, or deferred resolution through the entity's layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Color {
    /// Color resolved from the entity's layer (index 256)
    #[default]
    ByLayer,
    /// Color index (1-255)
    Index(u8),
    /// True color with RGB values
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Common color constants
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);
    pub const GRAY: Color = Color::Index(8);

    /// Create a color from a palette index
    pub fn from_index(index: i16) -> Self {
        match index {
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            _ => Color::WHITE,
        }
    }

    /// Create a true color from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Get RGB values (if applicable)
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            Color::Rgb { r, g, b } => Some((*r, *g, *b)),
            _ => None,
        }
    }

    /// Approximate to the nearest palette index, for DXF export
    pub fn approximate_index(&self) -> i16 {
        match self {
            Color::ByLayer => 256,
            Color::Index(i) => *i as i16,
            Color::Rgb { r, g, b } => {
                let brightness = ((*r as u16) + (*g as u16) + (*b as u16)) / 3;
                if brightness > 224 {
                    7
                } else if *r > *g && *r > *b {
                    1
                } else if *g > *r && *g > *b {
                    3
                } else if *b > *r && *b > *g {
                    5
                } else {
                    8
                }
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::Index(i) => write!(f, "Index({})", i),
            Color::Rgb { r, g, b } => write!(f, "RGB({}, {}, {})", r, g, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_by_layer() {
        assert_eq!(Color::default(), Color::ByLayer);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Color::from_index(1), Color::RED);
        assert_eq!(Color::from_index(256), Color::ByLayer);
        assert_eq!(Color::from_index(-3), Color::WHITE);
    }

    #[test]
    fn test_approximate_index() {
        assert_eq!(Color::from_rgb(200, 10, 10).approximate_index(), 1);
        assert_eq!(Color::from_rgb(255, 255, 255).approximate_index(), 7);
        assert_eq!(Color::ByLayer.approximate_index(), 256);
    }
}

//! Line weight type

use serde::{Deserialize, Serialize};

/// Line weight in hundredths of a millimeter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineWeight {
    /// Resolved from the entity's layer
    #[default]
    ByLayer,
    /// Device default
    Standard,
    /// Explicit weight in 1/100 mm
    Value(i16),
}

impl LineWeight {
    pub const W0_13: LineWeight = LineWeight::Value(13);
    pub const W0_18: LineWeight = LineWeight::Value(18);
    pub const W0_25: LineWeight = LineWeight::Value(25);
    pub const W0_35: LineWeight = LineWeight::Value(35);
    pub const W0_50: LineWeight = LineWeight::Value(50);
    pub const W0_70: LineWeight = LineWeight::Value(70);

    /// Explicit weight in millimeters (if applicable)
    pub fn millimeters(&self) -> Option<f64> {
        match self {
            LineWeight::Value(v) => Some(*v as f64 / 100.0),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeters() {
        assert_eq!(LineWeight::W0_35.millimeters(), Some(0.35));
        assert_eq!(LineWeight::ByLayer.millimeters(), None);
    }
}

//! Rectangular-column check input

use crate::error::{DraftError, Result};
use serde::{Deserialize, Serialize};

/// Inputs for a rectangular reinforced-concrete column check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInput {
    /// Effective height, m
    pub height: f64,
    /// Section size along X, mm
    pub width: f64,
    /// Section size along Y, mm
    pub depth: f64,
    /// Factored axial load, kN
    pub axial_load: f64,
    /// Factored moment about X, kNm
    #[serde(default)]
    pub moment_x: f64,
    /// Factored moment about Y, kNm
    #[serde(default)]
    pub moment_y: f64,
    /// Concrete cylinder strength, MPa
    pub concrete_strength: f64,
    /// Reinforcement yield strength, MPa
    pub steel_strength: f64,
    /// Longitudinal reinforcement ratio, as a fraction of gross area
    #[serde(default = "default_steel_ratio")]
    pub steel_ratio: f64,
}

fn default_steel_ratio() -> f64 {
    0.01
}

impl ColumnInput {
    /// Reject inputs the service is certain to refuse
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("height", self.height),
            ("width", self.width),
            ("depth", self.depth),
            ("axial_load", self.axial_load),
            ("concrete_strength", self.concrete_strength),
            ("steel_strength", self.steel_strength),
        ] {
            if value <= 0.0 {
                return Err(DraftError::invalid_geometry(field, "must be positive"));
            }
        }
        // Code limits for longitudinal steel in columns
        if !(0.005..=0.08).contains(&self.steel_ratio) {
            return Err(DraftError::invalid_geometry(
                "steel_ratio",
                "must be between 0.005 and 0.08",
            ));
        }
        Ok(())
    }
}

impl Default for ColumnInput {
    fn default() -> Self {
        ColumnInput {
            height: 3.0,
            width: 400.0,
            depth: 400.0,
            axial_load: 1200.0,
            moment_x: 0.0,
            moment_y: 0.0,
            concrete_strength: 30.0,
            steel_strength: 500.0,
            steel_ratio: default_steel_ratio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_valid() {
        assert!(ColumnInput::default().validate().is_ok());
    }

    #[test]
    fn test_steel_ratio_limits() {
        let lean = ColumnInput {
            steel_ratio: 0.001,
            ..ColumnInput::default()
        };
        assert!(lean.validate().is_err());
        let congested = ColumnInput {
            steel_ratio: 0.1,
            ..ColumnInput::default()
        };
        assert!(congested.validate().is_err());
    }
}

//! Isolated-foundation check input

use crate::error::{DraftError, Result};
use serde::{Deserialize, Serialize};

/// Inputs for an isolated pad foundation check
///
/// Loads are unfactored service loads at the top of the footing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationInput {
    /// Footing length, m
    pub length: f64,
    /// Footing width, m
    pub width: f64,
    /// Footing depth, m
    pub depth: f64,
    /// Axial load, kN
    pub axial_load: f64,
    /// Moment about the width axis, kNm
    #[serde(default)]
    pub moment_x: f64,
    /// Moment about the length axis, kNm
    #[serde(default)]
    pub moment_y: f64,
    /// Allowable soil bearing pressure, kPa
    pub bearing_capacity: f64,
    /// Concrete cylinder strength, MPa
    pub concrete_strength: f64,
    /// Reinforcement yield strength, MPa
    pub steel_strength: f64,
}

impl FoundationInput {
    /// Reject inputs the service is certain to refuse
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("length", self.length),
            ("width", self.width),
            ("depth", self.depth),
            ("bearing_capacity", self.bearing_capacity),
            ("concrete_strength", self.concrete_strength),
            ("steel_strength", self.steel_strength),
        ] {
            if value <= 0.0 {
                return Err(DraftError::invalid_geometry(field, "must be positive"));
            }
        }
        if self.axial_load < 0.0 {
            return Err(DraftError::invalid_geometry(
                "axial_load",
                "uplift is not supported, must not be negative",
            ));
        }
        Ok(())
    }
}

impl Default for FoundationInput {
    fn default() -> Self {
        FoundationInput {
            length: 2.0,
            width: 2.0,
            depth: 0.5,
            axial_load: 500.0,
            moment_x: 0.0,
            moment_y: 0.0,
            bearing_capacity: 150.0,
            concrete_strength: 25.0,
            steel_strength: 500.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_valid() {
        assert!(FoundationInput::default().validate().is_ok());
    }

    #[test]
    fn test_uplift_rejected() {
        let input = FoundationInput {
            axial_load: -10.0,
            ..FoundationInput::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_moments_default_to_zero() {
        let input: FoundationInput = serde_json::from_str(
            r#"{"length":2.0,"width":2.0,"depth":0.5,"axial_load":500.0,
                "bearing_capacity":150.0,"concrete_strength":25.0,"steel_strength":500.0}"#,
        )
        .unwrap();
        assert_eq!(input.moment_x, 0.0);
        assert_eq!(input.moment_y, 0.0);
    }
}

//! Rectangular-beam check input

use crate::error::{DraftError, Result};
use serde::{Deserialize, Serialize};

/// Inputs for a rectangular reinforced-concrete beam check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// Clear span, m
    pub span: f64,
    /// Section width, mm
    pub width: f64,
    /// Section overall depth, mm
    pub depth: f64,
    /// Factored design moment, kNm
    pub moment: f64,
    /// Factored design shear, kN
    pub shear: f64,
    /// Concrete cylinder strength, MPa
    pub concrete_strength: f64,
    /// Reinforcement yield strength, MPa
    pub steel_strength: f64,
    /// Clear cover, mm
    #[serde(default = "default_cover")]
    pub cover: f64,
}

fn default_cover() -> f64 {
    25.0
}

impl BeamInput {
    /// Reject inputs the service is certain to refuse
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("span", self.span),
            ("width", self.width),
            ("depth", self.depth),
            ("concrete_strength", self.concrete_strength),
            ("steel_strength", self.steel_strength),
        ] {
            if value <= 0.0 {
                return Err(DraftError::invalid_geometry(field, "must be positive"));
            }
        }
        if self.cover < 0.0 || self.cover >= self.depth / 2.0 {
            return Err(DraftError::invalid_geometry(
                "cover",
                "must be non-negative and less than half the depth",
            ));
        }
        Ok(())
    }
}

impl Default for BeamInput {
    fn default() -> Self {
        BeamInput {
            span: 6.0,
            width: 300.0,
            depth: 500.0,
            moment: 120.0,
            shear: 90.0,
            concrete_strength: 25.0,
            steel_strength: 500.0,
            cover: default_cover(),
        }
    }
}

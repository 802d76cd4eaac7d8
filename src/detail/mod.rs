//! Parametric reinforcement-detail builders
//!
//! Pure formula-to-geometry functions: a parameter struct validates itself
//! and produces a preview mesh plus bar-schedule quantities. No state, no
//! document coupling.

use once_cell::sync::Lazy;
use std::f64::consts::PI;

pub mod footing;
pub mod mesh;
pub mod slab;

pub use footing::FootingDetail;
pub use mesh::TriMesh;
pub use slab::SlabDetail;

/// Density of reinforcement steel, kg/m³
pub const STEEL_DENSITY: f64 = 7850.0;

/// Standard metric bar diameters, mm
pub static STANDARD_BAR_DIAMETERS: Lazy<Vec<u32>> =
    Lazy::new(|| vec![8, 10, 12, 16, 20, 25, 32, 40]);

/// Nearest standard bar diameter not smaller than the requested one
pub fn nearest_standard_diameter(diameter_mm: f64) -> u32 {
    STANDARD_BAR_DIAMETERS
        .iter()
        .copied()
        .find(|d| f64::from(*d) >= diameter_mm)
        .unwrap_or(*STANDARD_BAR_DIAMETERS.last().expect("table not empty"))
}

/// Cross-section area of a bar in mm²
pub fn bar_area_mm2(diameter_mm: f64) -> f64 {
    PI * diameter_mm * diameter_mm / 4.0
}

/// Mass per meter of a bar in kg/m
pub fn bar_unit_mass(diameter_mm: f64) -> f64 {
    bar_area_mm2(diameter_mm) * 1e-6 * STEEL_DENSITY
}

/// Number of bars covering a clear span at the given spacing
///
/// One bar at each end of the span plus intermediates: `floor(span/spacing) + 1`.
pub fn bar_count(clear_span: f64, spacing: f64) -> u32 {
    if clear_span <= 0.0 || spacing <= 0.0 {
        return 0;
    }
    (clear_span / spacing).floor() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_count() {
        assert_eq!(bar_count(1000.0, 200.0), 6);
        assert_eq!(bar_count(999.0, 200.0), 5);
        assert_eq!(bar_count(0.0, 200.0), 0);
        assert_eq!(bar_count(100.0, 0.0), 0);
    }

    #[test]
    fn test_bar_unit_mass() {
        // T16 is about 1.58 kg/m
        let mass = bar_unit_mass(16.0);
        assert!((mass - 1.578).abs() < 0.01, "got {}", mass);
    }

    #[test]
    fn test_nearest_standard_diameter() {
        assert_eq!(nearest_standard_diameter(11.0), 12);
        assert_eq!(nearest_standard_diameter(12.0), 12);
        assert_eq!(nearest_standard_diameter(99.0), 40);
    }
}

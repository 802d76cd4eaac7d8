//! Parametric isolated-footing reinforcement detail

use super::{bar_count, bar_unit_mass, TriMesh};
use crate::error::{DraftError, Result};
use crate::types::Vector3;
use serde::{Deserialize, Serialize};

/// Parameters for an isolated pad footing with a column stub
///
/// Dimensions in millimeters. The footing occupies `[0, length] x
/// [0, width]` in plan, base at z = 0, with the column stub centered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootingDetail {
    /// Footing plan length along X, mm
    pub length: f64,
    /// Footing plan width along Y, mm
    pub width: f64,
    /// Footing depth, mm
    pub depth: f64,
    /// Column stub size along X, mm
    pub column_width: f64,
    /// Column stub size along Y, mm
    pub column_depth: f64,
    /// Column stub height above the footing, mm
    pub stub_height: f64,
    /// Clear concrete cover, mm
    pub cover: f64,
    /// Bottom mat bar diameter, mm
    pub bar_diameter: f64,
    /// Bottom mat bar spacing (both directions), mm
    pub spacing: f64,
    /// Number of column dowels
    pub dowel_count: u32,
    /// Dowel diameter, mm
    pub dowel_diameter: f64,
}

impl FootingDetail {
    /// Validate the parameters
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("length", self.length),
            ("width", self.width),
            ("depth", self.depth),
            ("column_width", self.column_width),
            ("column_depth", self.column_depth),
            ("bar_diameter", self.bar_diameter),
            ("spacing", self.spacing),
            ("dowel_diameter", self.dowel_diameter),
        ] {
            if value <= 0.0 {
                return Err(DraftError::invalid_geometry(field, "must be positive"));
            }
        }
        if self.cover < 0.0 || self.stub_height < 0.0 {
            return Err(DraftError::invalid_geometry(
                "cover",
                "cover and stub height must not be negative",
            ));
        }
        if self.column_width >= self.length || self.column_depth >= self.width {
            return Err(DraftError::invalid_geometry(
                "column_width",
                "column stub must fit inside the footing plan",
            ));
        }
        if 2.0 * self.cover + 2.0 * self.bar_diameter >= self.depth {
            return Err(DraftError::invalid_geometry(
                "cover",
                "cover and bars do not fit within the footing depth",
            ));
        }
        if self.dowel_count < 4 {
            return Err(DraftError::invalid_geometry(
                "dowel_count",
                "at least 4 dowels are required",
            ));
        }
        Ok(())
    }

    /// Bars running along X in the bottom mat
    pub fn bars_along_x(&self) -> u32 {
        bar_count(self.width - 2.0 * self.cover, self.spacing)
    }

    /// Bars running along Y in the bottom mat
    pub fn bars_along_y(&self) -> u32 {
        bar_count(self.length - 2.0 * self.cover, self.spacing)
    }

    /// Total bottom-mat bar length in meters
    pub fn mat_bar_length_m(&self) -> f64 {
        let along_x = f64::from(self.bars_along_x()) * (self.length - 2.0 * self.cover);
        let along_y = f64::from(self.bars_along_y()) * (self.width - 2.0 * self.cover);
        (along_x + along_y) / 1000.0
    }

    /// Length of one dowel in meters: embedded to the mat level plus stub
    pub fn dowel_length_m(&self) -> f64 {
        (self.depth - self.cover + self.stub_height) / 1000.0
    }

    /// Total reinforcement mass including dowels, kg
    pub fn steel_mass_kg(&self) -> f64 {
        self.mat_bar_length_m() * bar_unit_mass(self.bar_diameter)
            + f64::from(self.dowel_count) * self.dowel_length_m() * bar_unit_mass(self.dowel_diameter)
    }

    /// Concrete volume including the stub, m³
    pub fn concrete_volume_m3(&self) -> f64 {
        (self.length * self.width * self.depth
            + self.column_width * self.column_depth * self.stub_height)
            * 1e-9
    }

    /// Side formwork area of footing and stub, m²
    pub fn formwork_area_m2(&self) -> f64 {
        (2.0 * (self.length + self.width) * self.depth
            + 2.0 * (self.column_width + self.column_depth) * self.stub_height)
            * 1e-6
    }

    /// Build the preview mesh: footing block, stub, bottom mat, dowels
    pub fn mesh(&self) -> Result<TriMesh> {
        self.validate()?;
        let mut mesh = TriMesh::new();
        mesh.push_box(
            Vector3::ZERO,
            Vector3::new(self.length, self.width, self.depth),
        );

        // Column stub centered on plan
        let cx0 = (self.length - self.column_width) / 2.0;
        let cy0 = (self.width - self.column_depth) / 2.0;
        if self.stub_height > 0.0 {
            mesh.push_box(
                Vector3::new(cx0, cy0, self.depth),
                Vector3::new(
                    cx0 + self.column_width,
                    cy0 + self.column_depth,
                    self.depth + self.stub_height,
                ),
            );
        }

        // Bottom mat
        let r = self.bar_diameter / 2.0;
        let z = self.cover + r;
        let x0 = self.cover;
        let x1 = self.length - self.cover;
        let y0 = self.cover;
        let y1 = self.width - self.cover;
        for i in 0..self.bars_along_x() {
            let y = (y0 + f64::from(i) * self.spacing).min(y1);
            mesh.push_cylinder(Vector3::new(x0, y, z), Vector3::new(x1, y, z), r, 8);
        }
        for i in 0..self.bars_along_y() {
            let x = (x0 + f64::from(i) * self.spacing).min(x1);
            mesh.push_cylinder(
                Vector3::new(x, y0, z + self.bar_diameter),
                Vector3::new(x, y1, z + self.bar_diameter),
                r,
                8,
            );
        }

        // Dowels spread around the stub perimeter
        let dr = self.dowel_diameter / 2.0;
        let inset = self.cover + dr;
        let z0 = self.cover;
        let z1 = self.depth + self.stub_height - self.cover;
        for point in perimeter_points(
            cx0 + inset,
            cy0 + inset,
            cx0 + self.column_width - inset,
            cy0 + self.column_depth - inset,
            self.dowel_count,
        ) {
            mesh.push_cylinder(
                Vector3::new(point.0, point.1, z0),
                Vector3::new(point.0, point.1, z1),
                dr,
                8,
            );
        }
        Ok(mesh)
    }
}

/// Evenly distribute `count` points along a rectangle outline
fn perimeter_points(x0: f64, y0: f64, x1: f64, y1: f64, count: u32) -> Vec<(f64, f64)> {
    let w = (x1 - x0).max(0.0);
    let h = (y1 - y0).max(0.0);
    let perimeter = 2.0 * (w + h);
    if perimeter == 0.0 || count == 0 {
        return vec![(x0, y0); count as usize];
    }
    (0..count)
        .map(|i| {
            let mut t = perimeter * f64::from(i) / f64::from(count);
            if t < w {
                return (x0 + t, y0);
            }
            t -= w;
            if t < h {
                return (x1, y0 + t);
            }
            t -= h;
            if t < w {
                return (x1 - t, y1);
            }
            t -= w;
            (x0, y1 - t)
        })
        .collect()
}

impl Default for FootingDetail {
    fn default() -> Self {
        FootingDetail {
            length: 2000.0,
            width: 2000.0,
            depth: 500.0,
            column_width: 400.0,
            column_depth: 400.0,
            stub_height: 600.0,
            cover: 50.0,
            bar_diameter: 16.0,
            spacing: 150.0,
            dowel_count: 8,
            dowel_diameter: 16.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(FootingDetail::default().validate().is_ok());
    }

    #[test]
    fn test_stub_must_fit() {
        let footing = FootingDetail {
            column_width: 2500.0,
            ..FootingDetail::default()
        };
        assert!(footing.validate().is_err());
    }

    #[test]
    fn test_minimum_dowels() {
        let footing = FootingDetail {
            dowel_count: 2,
            ..FootingDetail::default()
        };
        assert!(footing.validate().is_err());
    }

    #[test]
    fn test_quantities() {
        let footing = FootingDetail::default();
        // 2.0 * 2.0 * 0.5 + 0.4 * 0.4 * 0.6
        assert!((footing.concrete_volume_m3() - 2.096).abs() < 1e-9);
        assert!(footing.steel_mass_kg() > 0.0);
    }

    #[test]
    fn test_perimeter_points_spread() {
        let points = perimeter_points(0.0, 0.0, 10.0, 10.0, 4);
        assert_eq!(points.len(), 4);
        // Four points on a square land on the corners-ish, one per side start
        assert_eq!(points[0], (0.0, 0.0));
        assert_eq!(points[1], (10.0, 0.0));
        assert_eq!(points[2], (10.0, 10.0));
        assert_eq!(points[3], (0.0, 10.0));
    }

    #[test]
    fn test_mesh_height_includes_stub() {
        let footing = FootingDetail::default();
        let mesh = footing.mesh().unwrap();
        let bbox = mesh.bounding_box().unwrap();
        assert!((bbox.max.z - (footing.depth + footing.stub_height)).abs() < 1e-9);
    }
}

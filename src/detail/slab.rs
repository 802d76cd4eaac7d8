//! Parametric slab reinforcement detail

use super::{bar_count, bar_unit_mass, TriMesh};
use crate::error::{DraftError, Result};
use crate::types::Vector3;
use serde::{Deserialize, Serialize};

/// Parameters for a rectangular slab with one or two reinforcement mats
///
/// Dimensions in millimeters. The slab occupies `[0, length] x [0, width]`
/// in plan with its soffit at z = 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabDetail {
    /// Plan length along X, mm
    pub length: f64,
    /// Plan width along Y, mm
    pub width: f64,
    /// Slab thickness, mm
    pub thickness: f64,
    /// Clear concrete cover on all faces, mm
    pub cover: f64,
    /// Bar diameter, mm
    pub bar_diameter: f64,
    /// Spacing of bars running along X, measured in Y, mm
    pub spacing_x: f64,
    /// Spacing of bars running along Y, measured in X, mm
    pub spacing_y: f64,
    /// Whether a top mat is provided in addition to the bottom mat
    pub top_mat: bool,
}

impl SlabDetail {
    /// Validate the parameters
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("length", self.length),
            ("width", self.width),
            ("thickness", self.thickness),
            ("bar_diameter", self.bar_diameter),
            ("spacing_x", self.spacing_x),
            ("spacing_y", self.spacing_y),
        ] {
            if value <= 0.0 {
                return Err(DraftError::invalid_geometry(field, "must be positive"));
            }
        }
        if self.cover < 0.0 {
            return Err(DraftError::invalid_geometry("cover", "must not be negative"));
        }
        if 2.0 * self.cover + 2.0 * self.bar_diameter >= self.thickness {
            return Err(DraftError::invalid_geometry(
                "cover",
                "cover and bars do not fit within the slab thickness",
            ));
        }
        Ok(())
    }

    /// Number of bars running along X (spread across the width)
    pub fn bars_along_x(&self) -> u32 {
        bar_count(self.width - 2.0 * self.cover, self.spacing_x)
    }

    /// Number of bars running along Y (spread across the length)
    pub fn bars_along_y(&self) -> u32 {
        bar_count(self.length - 2.0 * self.cover, self.spacing_y)
    }

    /// Number of mats (1 or 2)
    pub fn mat_count(&self) -> u32 {
        if self.top_mat {
            2
        } else {
            1
        }
    }

    /// Total bar length over all mats, in meters
    pub fn total_bar_length_m(&self) -> f64 {
        let along_x = f64::from(self.bars_along_x()) * (self.length - 2.0 * self.cover);
        let along_y = f64::from(self.bars_along_y()) * (self.width - 2.0 * self.cover);
        f64::from(self.mat_count()) * (along_x + along_y) / 1000.0
    }

    /// Total reinforcement mass, kg
    pub fn steel_mass_kg(&self) -> f64 {
        self.total_bar_length_m() * bar_unit_mass(self.bar_diameter)
    }

    /// Concrete volume, m³
    pub fn concrete_volume_m3(&self) -> f64 {
        self.length * self.width * self.thickness * 1e-9
    }

    /// Edge formwork area, m²
    pub fn formwork_area_m2(&self) -> f64 {
        2.0 * (self.length + self.width) * self.thickness * 1e-6
    }

    /// Build the preview mesh: slab solid plus reinforcement mats
    pub fn mesh(&self) -> Result<TriMesh> {
        self.validate()?;
        let mut mesh = TriMesh::new();
        mesh.push_box(
            Vector3::ZERO,
            Vector3::new(self.length, self.width, self.thickness),
        );

        let r = self.bar_diameter / 2.0;
        let bottom_z = self.cover + r;
        self.push_mat(&mut mesh, bottom_z);
        if self.top_mat {
            let top_z = self.thickness - self.cover - r;
            self.push_mat(&mut mesh, top_z);
        }
        Ok(mesh)
    }

    /// One mat: bars along X stacked in Y, bars along Y stacked in X,
    /// the second direction resting on the first
    fn push_mat(&self, mesh: &mut TriMesh, z: f64) {
        let r = self.bar_diameter / 2.0;
        let x0 = self.cover;
        let x1 = self.length - self.cover;
        let y0 = self.cover;
        let y1 = self.width - self.cover;

        for i in 0..self.bars_along_x() {
            let y = y0 + f64::from(i) * self.spacing_x;
            mesh.push_cylinder(
                Vector3::new(x0, y.min(y1), z),
                Vector3::new(x1, y.min(y1), z),
                r,
                8,
            );
        }
        for i in 0..self.bars_along_y() {
            let x = x0 + f64::from(i) * self.spacing_y;
            mesh.push_cylinder(
                Vector3::new(x.min(x1), y0, z + self.bar_diameter),
                Vector3::new(x.min(x1), y1, z + self.bar_diameter),
                r,
                8,
            );
        }
    }
}

impl Default for SlabDetail {
    fn default() -> Self {
        SlabDetail {
            length: 4000.0,
            width: 3000.0,
            thickness: 200.0,
            cover: 25.0,
            bar_diameter: 12.0,
            spacing_x: 200.0,
            spacing_y: 200.0,
            top_mat: false,
        }
    }
}

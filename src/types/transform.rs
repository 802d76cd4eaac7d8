//! 2D transformation types
//!
//! Provides the homogeneous 2D transform used for entity editing
//! (move/rotate/scale of selections) as a 3x3 row-major matrix.

use super::Vector2;
use std::ops::Mul;

/// 3x3 matrix in row-major order for homogeneous 2D transforms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    /// Matrix elements stored in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Create identity matrix
    pub fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Create zero matrix
    pub fn zero() -> Self {
        Self { m: [[0.0; 3]; 3] }
    }

    /// Create a translation matrix
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            m: [[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]],
        }
    }

    /// Create a rotation matrix (counterclockwise, radians)
    pub fn rotation(angle: f64) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self {
            m: [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Create a scaling matrix
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            m: [[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Calculate determinant
    pub fn determinant(&self) -> f64 {
        self.m[0][0] * (self.m[1][1] * self.m[2][2] - self.m[1][2] * self.m[2][1])
            - self.m[0][1] * (self.m[1][0] * self.m[2][2] - self.m[1][2] * self.m[2][0])
            + self.m[0][2] * (self.m[1][0] * self.m[2][1] - self.m[1][1] * self.m[2][0])
    }

    /// Invert the matrix (returns None if singular)
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < 1e-12 {
            return None;
        }
        let inv_det = 1.0 / det;
        Some(Self {
            m: [
                [
                    (self.m[1][1] * self.m[2][2] - self.m[1][2] * self.m[2][1]) * inv_det,
                    (self.m[0][2] * self.m[2][1] - self.m[0][1] * self.m[2][2]) * inv_det,
                    (self.m[0][1] * self.m[1][2] - self.m[0][2] * self.m[1][1]) * inv_det,
                ],
                [
                    (self.m[1][2] * self.m[2][0] - self.m[1][0] * self.m[2][2]) * inv_det,
                    (self.m[0][0] * self.m[2][2] - self.m[0][2] * self.m[2][0]) * inv_det,
                    (self.m[0][2] * self.m[1][0] - self.m[0][0] * self.m[1][2]) * inv_det,
                ],
                [
                    (self.m[1][0] * self.m[2][1] - self.m[1][1] * self.m[2][0]) * inv_det,
                    (self.m[0][1] * self.m[2][0] - self.m[0][0] * self.m[2][1]) * inv_det,
                    (self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0]) * inv_det,
                ],
            ],
        })
    }

    /// Transform a point in homogeneous coordinates
    pub fn transform_point(&self, v: Vector2) -> Vector2 {
        Vector2::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2],
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2],
        )
    }

    /// Transform a direction vector (ignores translation)
    pub fn transform_vector(&self, v: Vector2) -> Vector2 {
        Vector2::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y,
            self.m[1][0] * v.x + self.m[1][1] * v.y,
        )
    }
}

impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut result = Self::zero();
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    result.m[i][j] += self.m[i][k] * rhs.m[k][j];
                }
            }
        }
        result
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

/// An affine 2D transform applied to entities during editing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix3,
}

impl Transform {
    /// Identity transform
    pub fn identity() -> Self {
        Transform {
            matrix: Matrix3::identity(),
        }
    }

    /// Translation by an offset
    pub fn translation(offset: Vector2) -> Self {
        Transform {
            matrix: Matrix3::translation(offset.x, offset.y),
        }
    }

    /// Rotation about the origin (counterclockwise, radians)
    pub fn rotation(angle: f64) -> Self {
        Transform {
            matrix: Matrix3::rotation(angle),
        }
    }

    /// Rotation about an arbitrary center point
    pub fn rotation_about(center: Vector2, angle: f64) -> Self {
        Transform {
            matrix: Matrix3::translation(center.x, center.y)
                * Matrix3::rotation(angle)
                * Matrix3::translation(-center.x, -center.y),
        }
    }

    /// Uniform scaling about the origin
    pub fn scaling(scale: f64) -> Self {
        Transform {
            matrix: Matrix3::scaling(scale, scale),
        }
    }

    /// Non-uniform scaling about the origin
    pub fn scaling_xy(sx: f64, sy: f64) -> Self {
        Transform {
            matrix: Matrix3::scaling(sx, sy),
        }
    }

    /// Uniform scaling about an arbitrary origin point
    pub fn scaling_about(origin: Vector2, scale: f64) -> Self {
        Transform {
            matrix: Matrix3::translation(origin.x, origin.y)
                * Matrix3::scaling(scale, scale)
                * Matrix3::translation(-origin.x, -origin.y),
        }
    }

    /// Build from a raw matrix
    pub fn from_matrix(matrix: Matrix3) -> Self {
        Transform { matrix }
    }

    /// Access the underlying matrix
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// Apply the transform to a point
    pub fn apply(&self, point: Vector2) -> Vector2 {
        self.matrix.transform_point(point)
    }

    /// Apply only the linear part to a direction vector
    pub fn apply_vector(&self, v: Vector2) -> Vector2 {
        self.matrix.transform_vector(v)
    }

    /// Compose: the resulting transform applies `self` first, then `next`
    pub fn then(&self, next: &Transform) -> Transform {
        Transform {
            matrix: next.matrix * self.matrix,
        }
    }

    /// Inverse transform (None if singular, e.g. zero scale)
    pub fn inverse(&self) -> Option<Transform> {
        self.matrix.inverse().map(|matrix| Transform { matrix })
    }

    /// The uniform scale factor carried by the linear part
    ///
    /// Meaningful for the rotation/uniform-scale transforms produced by the
    /// editing operations; non-uniform transforms report the X-axis scale.
    pub fn scale_factor(&self) -> f64 {
        self.apply_vector(Vector2::UNIT_X).length()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Transform {
    type Output = Transform;

    /// Standard composition: `(a * b).apply(p) == a.apply(b.apply(p))`
    fn mul(self, rhs: Transform) -> Transform {
        Transform {
            matrix: self.matrix * rhs.matrix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(a: Vector2, b: Vector2) {
        assert!((a - b).length() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_translation() {
        let t = Transform::translation(Vector2::new(3.0, -2.0));
        assert_close(t.apply(Vector2::new(1.0, 1.0)), Vector2::new(4.0, -1.0));
    }

    #[test]
    fn test_rotation_about_center() {
        let center = Vector2::new(5.0, 5.0);
        let t = Transform::rotation_about(center, FRAC_PI_2);
        // Center stays fixed
        assert_close(t.apply(center), center);
        assert_close(t.apply(Vector2::new(6.0, 5.0)), Vector2::new(5.0, 6.0));
    }

    #[test]
    fn test_scaling_about_origin_point() {
        let origin = Vector2::new(2.0, 2.0);
        let t = Transform::scaling_about(origin, 2.0);
        assert_close(t.apply(origin), origin);
        assert_close(t.apply(Vector2::new(3.0, 2.0)), Vector2::new(4.0, 2.0));
    }

    #[test]
    fn test_inverse_round_trip() {
        let t = Transform::rotation_about(Vector2::new(1.0, 2.0), 0.7)
            .then(&Transform::translation(Vector2::new(4.0, -3.0)));
        let inv = t.inverse().unwrap();
        let p = Vector2::new(-7.5, 3.25);
        assert_close(inv.apply(t.apply(p)), p);
    }

    #[test]
    fn test_zero_scale_not_invertible() {
        let t = Transform::scaling(0.0);
        assert!(t.inverse().is_none());
    }

    #[test]
    fn test_composition_order() {
        let rotate = Transform::rotation(FRAC_PI_2);
        let translate = Transform::translation(Vector2::new(10.0, 0.0));
        // then(): rotate first, translate second
        let combined = rotate.then(&translate);
        assert_close(
            combined.apply(Vector2::new(1.0, 0.0)),
            Vector2::new(10.0, 1.0),
        );
    }

    #[test]
    fn test_scale_factor() {
        let t = Transform::scaling_about(Vector2::new(3.0, 3.0), 2.5);
        assert!((t.scale_factor() - 2.5).abs() < 1e-12);
    }
}

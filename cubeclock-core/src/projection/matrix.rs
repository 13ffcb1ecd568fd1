//! Rotation and projection matrices
//!
//! Row-major storage; vectors are columns multiplied on the right.

use super::vector::{Vec2, Vec3};

/// 3x3 matrix (row-major)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub const fn new(m: [[f32; 3]; 3]) -> Self {
        Self { m }
    }

    /// Rotation about the X axis
    pub fn rotation_x(radians: f32) -> Self {
        let (s, c) = (libm::sinf(radians), libm::cosf(radians));
        Self::new([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    /// Rotation about the Y axis
    pub fn rotation_y(radians: f32) -> Self {
        let (s, c) = (libm::sinf(radians), libm::cosf(radians));
        Self::new([[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]])
    }

    /// Rotation about the Z axis
    pub fn rotation_z(radians: f32) -> Self {
        let (s, c) = (libm::sinf(radians), libm::cosf(radians));
        Self::new([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Matrix-vector product
    #[inline]
    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        let b = v.to_array();
        let mut out = [0.0f32; 3];
        for (i, row) in self.m.iter().enumerate() {
            for (k, a) in row.iter().enumerate() {
                out[i] += a * b[k];
            }
        }
        Vec3::new(out[0], out[1], out[2])
    }

    /// Matrix product `self * other` (applies `other` first)
    pub fn mul(&self, other: &Mat3) -> Mat3 {
        let mut out = [[0.0f32; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.m[i][k] * other.m[k][j];
                }
            }
        }
        Mat3::new(out)
    }
}

/// 2x3 projection matrix dropping depth
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection2 {
    pub m: [[f32; 3]; 2],
}

impl Projection2 {
    /// Projection scaling both screen axes by `scale` (`1/skew`)
    pub const fn skewed(scale: f32) -> Self {
        Self {
            m: [[scale, 0.0, 0.0], [0.0, scale, 0.0]],
        }
    }

    #[inline]
    pub fn mul_vec(&self, v: Vec3) -> Vec2 {
        let b = v.to_array();
        let mut out = [0.0f32; 2];
        for (i, row) in self.m.iter().enumerate() {
            for (k, a) in row.iter().enumerate() {
                out[i] += a * b[k];
            }
        }
        Vec2::new(out[0], out[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_identity() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(Mat3::IDENTITY.mul_vec(v), v);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let r = Mat3::rotation_z(core::f32::consts::FRAC_PI_2);
        let v = r.mul_vec(Vec3::new(1.0, 0.0, 0.0));
        assert!(approx(v.x, 0.0));
        assert!(approx(v.y, 1.0));
        assert!(approx(v.z, 0.0));
    }

    #[test]
    fn test_rotations_preserve_length() {
        let v = Vec3::new(1.55, -1.55, 1.55);
        for angle in [-2.0f32, -0.1, 0.3, 1.0, 4.5] {
            for r in [
                Mat3::rotation_x(angle),
                Mat3::rotation_y(angle),
                Mat3::rotation_z(angle),
            ] {
                assert!(approx(r.mul_vec(v).length(), v.length()));
            }
        }
    }

    #[test]
    fn test_product_matches_sequential() {
        let (rx, ry) = (Mat3::rotation_x(0.4), Mat3::rotation_y(-1.1));
        let v = Vec3::new(0.5, 2.0, -1.0);
        let sequential = ry.mul_vec(rx.mul_vec(v));
        let combined = ry.mul(&rx).mul_vec(v);
        assert!(approx(sequential.x, combined.x));
        assert!(approx(sequential.y, combined.y));
        assert!(approx(sequential.z, combined.z));
    }

    #[test]
    fn test_skewed_projection_drops_depth() {
        let p = Projection2::skewed(0.5).mul_vec(Vec3::new(2.0, -4.0, 9.0));
        assert_eq!(p, Vec2::new(1.0, -2.0));
    }
}

//! Cube geometry and the rotate/skew projection
//!
//! Each frame the eight vertices are rotated about X, then Y, then Z by the
//! animation angle plus a fixed per-axis offset. Every rotated vertex is then
//! scaled by `1 / skew`, where `skew = camera_distance - normalize(z)`. This
//! stands in for a perspective divide: vertices with larger rotated depth
//! get a smaller skew and are drawn larger.

use super::matrix::{Mat3, Projection2};
use super::vector::{Vec2, Vec3};
use crate::config::{ConfigError, ProjectionConfig};

/// Number of cube vertices
pub const VERTEX_COUNT: usize = 8;

/// Number of cube edges
pub const EDGE_COUNT: usize = 12;

/// Smallest skew factor a configuration may reach
pub const MIN_SKEW: f32 = 0.1;

/// Segment between two vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

/// Edge list in draw order
///
/// For `i` in `0..4`: front face `(i, (i+1)%4)`, back face
/// `(i+4, (i+1)%4+4)`, connector `(i, i+4)`.
pub const EDGES: [Edge; EDGE_COUNT] = build_edges();

const fn build_edges() -> [Edge; EDGE_COUNT] {
    let mut edges = [Edge { start: 0, end: 0 }; EDGE_COUNT];
    let mut i = 0;
    while i < 4 {
        let next = (i + 1) % 4;
        edges[i * 3] = Edge {
            start: i,
            end: next,
        };
        edges[i * 3 + 1] = Edge {
            start: i + 4,
            end: next + 4,
        };
        edges[i * 3 + 2] = Edge {
            start: i,
            end: i + 4,
        };
        i += 1;
    }
    edges
}

/// Map `value` from `[min, max]` onto `[0, 1]`
#[inline]
pub fn normalize(value: f32, min: f32, max: f32) -> f32 {
    (value - min) / (max - min)
}

/// Skew factor for a rotated depth
#[inline]
pub fn skew_factor(z: f32, config: &ProjectionConfig) -> f32 {
    if !config.use_skew {
        return 1.0;
    }
    config.camera_distance - normalize(z, config.depth_min, config.depth_max)
}

/// Range of skew factors reachable by a cube of the given half edge
///
/// Rotation keeps every vertex on the circumscribed sphere, so the rotated
/// depth stays within `±half_edge * sqrt(3)`. Returns `(min, max)`.
pub fn skew_range(config: &ProjectionConfig, half_edge: f32) -> (f32, f32) {
    let radius = half_edge * libm::sqrtf(3.0);
    let a = skew_factor(radius, config);
    let b = skew_factor(-radius, config);
    (a.min(b), a.max(b))
}

/// Check that no reachable skew gets close to zero
pub fn validate_projection(config: &ProjectionConfig, half_edge: f32) -> Result<(), ConfigError> {
    if !(half_edge.is_finite() && half_edge > 0.0) {
        return Err(ConfigError::InvalidCubeSize);
    }
    if !(config.depth_max > config.depth_min) {
        return Err(ConfigError::EmptyDepthRange);
    }
    let (min, _) = skew_range(config, half_edge);
    if !(min >= MIN_SKEW) {
        return Err(ConfigError::DegenerateSkew);
    }
    Ok(())
}

/// Combined X-then-Y-then-Z rotation for an animation angle
pub fn rotation(angle_deg: f32, offsets_deg: [f32; 3]) -> Mat3 {
    let rx = Mat3::rotation_x((angle_deg + offsets_deg[0]).to_radians());
    let ry = Mat3::rotation_y((angle_deg + offsets_deg[1]).to_radians());
    let rz = Mat3::rotation_z((angle_deg + offsets_deg[2]).to_radians());
    rz.mul(&ry).mul(&rx)
}

/// Project vertices to screen-space offsets from the cube center
///
/// Pure function of its arguments; `size` is the pixel scale.
pub fn project(
    vertices: &[Vec3; VERTEX_COUNT],
    angle_deg: f32,
    config: &ProjectionConfig,
    size: f32,
) -> [Vec2; VERTEX_COUNT] {
    let rot = rotation(angle_deg, config.axis_offsets_deg);
    vertices.map(|v| {
        let rotated = rot.mul_vec(v);
        let skew = skew_factor(rotated.z, config);
        Projection2::skewed(1.0 / skew).mul_vec(rotated) * size
    })
}

/// Vertices of an origin-centered cube
///
/// Indices 0-3 form the `z = -h` face, 4-7 the `z = +h` face, both wound
/// the same way so `i` and `i + 4` are opposite corners of a connector.
pub fn cube_vertices(half_edge: f32) -> [Vec3; VERTEX_COUNT] {
    let h = half_edge;
    [
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ]
}

/// A cube fixed at construction, projected once per frame
#[derive(Debug, Clone)]
pub struct CubeGeometry {
    vertices: [Vec3; VERTEX_COUNT],
    half_edge: f32,
    projection: ProjectionConfig,
}

impl CubeGeometry {
    /// Build a cube from a signed scale factor
    ///
    /// Fails if the projection could produce a skew near zero for this
    /// cube, so per-frame projection never has to check.
    pub fn new(scale_factor: f32, projection: ProjectionConfig) -> Result<Self, ConfigError> {
        let half_edge = libm::fabsf(scale_factor);
        validate_projection(&projection, half_edge)?;
        Ok(Self {
            vertices: cube_vertices(half_edge),
            half_edge,
            projection,
        })
    }

    pub fn vertices(&self) -> &[Vec3; VERTEX_COUNT] {
        &self.vertices
    }

    pub fn half_edge(&self) -> f32 {
        self.half_edge
    }

    pub fn projection(&self) -> &ProjectionConfig {
        &self.projection
    }

    pub fn edges(&self) -> &'static [Edge; EDGE_COUNT] {
        &EDGES
    }

    /// Screen positions for this frame
    pub fn project(&self, angle_deg: f32, size: f32) -> [Vec2; VERTEX_COUNT] {
        project(&self.vertices, angle_deg, &self.projection, size)
    }

    /// Largest distance from center any projected coordinate can reach
    pub fn screen_extent(&self, size: f32) -> f32 {
        let (min_skew, _) = skew_range(&self.projection, self.half_edge);
        self.half_edge * libm::sqrtf(3.0) / min_skew * size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference() -> CubeGeometry {
        CubeGeometry::new(1.55, ProjectionConfig::default()).unwrap()
    }

    #[test]
    fn test_edges_topology() {
        assert_eq!(EDGES.len(), 12);
        let mut degree = [0u8; VERTEX_COUNT];
        for (n, a) in EDGES.iter().enumerate() {
            assert_ne!(a.start, a.end);
            degree[a.start] += 1;
            degree[a.end] += 1;
            for b in &EDGES[n + 1..] {
                let same = (a.start, a.end) == (b.start, b.end)
                    || (a.start, a.end) == (b.end, b.start);
                assert!(!same, "duplicate edge {:?}", a);
            }
        }
        assert!(degree.iter().all(|&d| d == 3));
    }

    #[test]
    fn test_edge_draw_order() {
        assert_eq!(EDGES[0], Edge { start: 0, end: 1 });
        assert_eq!(EDGES[1], Edge { start: 4, end: 5 });
        assert_eq!(EDGES[2], Edge { start: 0, end: 4 });
        assert_eq!(EDGES[9], Edge { start: 3, end: 0 });
        assert_eq!(EDGES[10], Edge { start: 7, end: 4 });
        assert_eq!(EDGES[11], Edge { start: 3, end: 7 });
    }

    #[test]
    fn test_every_edge_has_cube_edge_length() {
        let cube = reference();
        for edge in cube.edges() {
            let d = cube.vertices()[edge.start] - cube.vertices()[edge.end];
            assert!((d.length() - 3.1).abs() < 1e-5);
        }
    }

    #[test]
    fn test_negative_scale_uses_magnitude() {
        let cube = CubeGeometry::new(-1.55, ProjectionConfig::default()).unwrap();
        assert_eq!(cube.half_edge(), 1.55);
        assert_eq!(cube.vertices(), reference().vertices());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(-2.8, -2.8, 2.8), 0.0);
        assert_eq!(normalize(2.8, -2.8, 2.8), 1.0);
        assert!((normalize(0.0, -2.8, 2.8) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_reference_skew_range() {
        let (min, max) = skew_range(&ProjectionConfig::default(), 1.55);
        // radius 1.55 * sqrt(3) = 2.6847 -> normalized 0.0205..0.9794
        assert!((min - 0.7206).abs() < 1e-3, "min skew {}", min);
        assert!((max - 1.6795).abs() < 1e-3, "max skew {}", max);
    }

    #[test]
    fn test_reference_projection_at_zero() {
        let cube = reference();
        let size = 100.0;
        let points = cube.project(0.0, size);
        let extent = cube.screen_extent(size);

        for (i, p) in points.iter().enumerate() {
            assert!(p.is_finite());
            assert!(p.x.abs() <= extent && p.y.abs() <= extent);
            for q in &points[i + 1..] {
                assert!(p.distance(*q) > 1.0, "points {:?} and {:?} coincide", p, q);
            }
        }
    }

    #[test]
    fn test_reference_vertices_at_zero() {
        let points = reference().project(0.0, 100.0);
        let close = |p: Vec2, x: f32, y: f32| (p.x - x).abs() < 0.01 && (p.y - y).abs() < 0.01;
        assert!(close(points[0], -102.9641, -86.3950), "{:?}", points[0]);
        assert!(close(points[6], 141.5633, 118.7827), "{:?}", points[6]);
    }

    #[test]
    fn test_unrotated_vertices_scale_by_depth() {
        let config = ProjectionConfig {
            axis_offsets_deg: [0.0; 3],
            ..ProjectionConfig::default()
        };
        let cube = CubeGeometry::new(1.55, config).unwrap();
        let points = cube.project(0.0, 100.0);
        // skew 1.7 - (-1.55 + 2.8) / 5.6 for the far face
        assert!((points[0].x + 87.2362).abs() < 0.01, "{:?}", points[0]);
        assert!((points[0].y + 87.2362).abs() < 0.01);
        assert!((points[6].x - 126.7153).abs() < 0.01, "{:?}", points[6]);
        assert!((points[6].y - 126.7153).abs() < 0.01);
    }

    #[test]
    fn test_flat_projection_stays_in_bounding_sphere() {
        let config = ProjectionConfig {
            use_skew: false,
            ..ProjectionConfig::default()
        };
        let cube = CubeGeometry::new(1.55, config).unwrap();
        let radius = 1.55 * 3f32.sqrt() * 100.0;
        for angle in [0.0f32, 45.0, 123.0, 300.0] {
            for p in cube.project(angle, 100.0) {
                assert!(p.x.abs() <= radius + 1e-3 && p.y.abs() <= radius + 1e-3);
            }
        }
    }

    #[test]
    fn test_flat_projection_without_rotation_overlays_faces() {
        let config = ProjectionConfig {
            use_skew: false,
            axis_offsets_deg: [0.0; 3],
            ..ProjectionConfig::default()
        };
        let cube = CubeGeometry::new(1.0, config).unwrap();
        let points = cube.project(0.0, 10.0);
        for i in 0..4 {
            assert!(points[i].distance(points[i + 4]) < 1e-5);
        }
        assert!((points[2].x - 10.0).abs() < 1e-5);
        assert!((points[2].y - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_near_face_drawn_larger() {
        let config = ProjectionConfig {
            axis_offsets_deg: [0.0; 3],
            ..ProjectionConfig::default()
        };
        let cube = CubeGeometry::new(1.0, config).unwrap();
        let points = cube.project(0.0, 1.0);
        // vertex 4 sits at z = +1, vertex 0 at z = -1
        assert!(points[4].x.abs() > points[0].x.abs());
    }

    #[test]
    fn test_degenerate_skew_rejected() {
        let config = ProjectionConfig {
            camera_distance: 1.0,
            ..ProjectionConfig::default()
        };
        assert_eq!(
            CubeGeometry::new(1.55, config).unwrap_err(),
            ConfigError::DegenerateSkew
        );
    }

    #[test]
    fn test_zero_cube_rejected() {
        assert_eq!(
            CubeGeometry::new(0.0, ProjectionConfig::default()).unwrap_err(),
            ConfigError::InvalidCubeSize
        );
    }

    #[test]
    fn test_empty_depth_range_rejected() {
        let config = ProjectionConfig {
            depth_min: 1.0,
            depth_max: 1.0,
            ..ProjectionConfig::default()
        };
        assert_eq!(
            validate_projection(&config, 1.0),
            Err(ConfigError::EmptyDepthRange)
        );
    }

    proptest! {
        #[test]
        fn prop_projection_finite_and_bounded(angle in -10_000.0f32..10_000.0) {
            let cube = reference();
            let extent = cube.screen_extent(100.0);
            for p in cube.project(angle, 100.0) {
                prop_assert!(p.is_finite());
                prop_assert!(p.x.abs() <= extent + 1e-2);
                prop_assert!(p.y.abs() <= extent + 1e-2);
            }
        }

        #[test]
        fn prop_skew_stays_positive(angle in -720.0f32..720.0) {
            let config = ProjectionConfig::default();
            let rot = rotation(angle, config.axis_offsets_deg);
            for v in cube_vertices(1.55) {
                prop_assert!(skew_factor(rot.mul_vec(v).z, &config) >= MIN_SKEW);
            }
        }
    }
}

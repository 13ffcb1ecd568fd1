//! Cube projection engine
//!
//! Turns a fixed cube and a per-frame animation angle into eight screen
//! offsets plus the twelve edges joining them. Stateless per frame.

pub mod cube;
pub mod matrix;
pub mod vector;

pub use cube::{
    cube_vertices, normalize, project, rotation, skew_factor, skew_range, validate_projection,
    CubeGeometry, Edge, EDGES, EDGE_COUNT, MIN_SKEW, VERTEX_COUNT,
};
pub use matrix::{Mat3, Projection2};
pub use vector::{Vec2, Vec3};

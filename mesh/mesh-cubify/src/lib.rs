//! Minimum-travel remapping of sphere-like meshes onto their bounding cube.
//!
//! Every vertex is moved onto a face of the mesh's axis-aligned bounding box:
//!
//! 1. **Bounds**: the min/max extent per axis, computed once and frozen
//! 2. **Classify**: the axis with the largest coordinate magnitude picks the
//!    face (ties go to X, then Y, then Z)
//! 3. **Snap**: that coordinate moves to the nearer bound
//! 4. **Solve**: the other two coordinates come from the closed-form inverse
//!    of the cube-to-sphere projection, keeping their signs
//!
//! Faces and smoothing metadata pass through untouched.
//!
//! # Quick Start
//!
//! ```
//! use mesh_cubify::{cubify_mesh, CubifyParams};
//! use mesh_types::octahedron_sphere;
//!
//! let mut mesh = octahedron_sphere(2.0, 3);
//! let report = cubify_mesh(&mut mesh, &CubifyParams::default()).unwrap();
//!
//! assert_eq!(report.vertex_count, mesh.vertices.len());
//! println!("{}", report.summary());
//! ```
//!
//! # Solve Frame
//!
//! The solve constants assume a unit sphere. [`SolveFrame::Normalized`] (the
//! default) divides each coordinate by its side of the bounds before solving
//! and scales the result back, so any origin-centred sphere lands exactly on
//! its cube. [`SolveFrame::Raw`] applies the formula to raw coordinates.
//!
//! # Negative Radicands
//!
//! Vertices far from the unit-sphere regime can make the solve's square roots
//! undefined. [`RadicandPolicy`] picks the response:
//!
//! | Policy | Effect |
//! |--------|--------|
//! | `Abort` | Run fails with [`CubifyError::NumericDomain`], nothing is written |
//! | `Skip` | The vertex keeps its original position |
//! | `Clamp` | The radicand is read as zero |
//!
//! # Corner Mode
//!
//! [`CubifyMode::Corner`] snaps every coordinate to the nearer bound of a cube
//! with the sphere's surface area. It is an alternate transformation for
//! inspection and never replaces the minimum-travel mapping implicitly.

mod classify;
mod cubify;
mod error;
mod params;
mod result;
mod solve;

pub use classify::{AXIS_TOLERANCE, approx_eq, classify, project_to_corner, snap_to_nearer};
pub use cubify::{
    FaceSolveError, PARALLEL_THRESHOLD, VertexMapping, compute_bounds, cubify_mesh,
    cubify_vertices, map_vertex,
};
pub use error::{CubifyError, CubifyResult};
pub use params::{CubifyMode, CubifyParams, RadicandPolicy, SolveFrame};
pub use result::CubifyReport;
pub use solve::{DomainError, FaceSolution, RADICAND_TOLERANCE, solve_face};

//! Core mesh types for the sphere-to-cube toolkit.
//!
//! This crate provides the foundational types shared by the loader, the
//! remapping core and the command-line driver:
//!
//! - [`Vertex`] - A point in 3D space
//! - [`IndexedMesh`] - A triangle mesh with 1-based face indices and one
//!   line of smoothing-group metadata
//! - [`SmoothingGroup`] - The opaque `s ...` metadata line
//! - [`Aabb`] - Axis-aligned bounding box (the six per-axis extents)
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Face Indexing
//!
//! Faces keep the **1-based** vertex indices of the file they were read from.
//! They are carried through every operation verbatim and are never re-based,
//! so writing a mesh back out reproduces its face lines exactly.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Vertex, IndexedMesh, Point3, MeshTopology};
//!
//! // Create a simple triangle mesh
//! let mut mesh = IndexedMesh::new();
//! mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(0.5, 1.0, 0.0)));
//! mesh.faces.push([1, 2, 3]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert_eq!(mesh.vertex_count(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod smoothing;
mod traits;
mod vertex;

// Re-export core types
pub use bounds::{Aabb, Axis};
pub use mesh::{IndexedMesh, octahedron_sphere};
pub use smoothing::SmoothingGroup;
pub use traits::MeshTopology;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

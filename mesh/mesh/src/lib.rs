//! Sphere-to-cube mesh toolkit.
//!
//! This umbrella crate re-exports the mesh-* crates behind one dependency:
//! load a triangulated sphere from OBJ, move every vertex onto its bounding
//! cube with the minimum-travel mapping, and write it back out with faces and
//! smoothing metadata unchanged.
//!
//! # Quick Start
//!
//! ```no_run
//! use mesh::prelude::*;
//!
//! // Load a mesh
//! let mut mesh = load_obj("Test.obj").unwrap();
//!
//! // Map it onto its bounding cube
//! let report = cubify_mesh(&mut mesh, &CubifyParams::default()).unwrap();
//! println!("{}", report.summary());
//!
//! // Save the result
//! save_obj(&mesh, "output.obj").unwrap();
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data structures: `IndexedMesh`, `Vertex`, `Aabb`, `Axis`
//! - [`io`] - OBJ loading and saving
//! - [`cubify`] - Bounds, classification, face solve and the mapping driver
//!
//! # Feature Flags
//!
//! - `serde` - Serialize/deserialize core types and remapping parameters

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![doc(html_root_url = "https://docs.rs/mesh/0.7.0")]

// =============================================================================
// Re-exports
// =============================================================================

/// Core data structures: `IndexedMesh`, `Vertex`, `Aabb`, `Axis`.
pub use mesh_types as types;

/// OBJ loading and saving.
pub use mesh_io as io;

/// Minimum-travel sphere-to-cube remapping.
pub use mesh_cubify as cubify;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for sphere-to-cube runs.
///
/// # Usage
///
/// ```
/// use mesh::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mesh_types::{Aabb, Axis, IndexedMesh, MeshTopology, SmoothingGroup, Vertex};

    // I/O
    pub use mesh_io::{IoError, load_obj, save_obj};

    // Remapping
    pub use mesh_cubify::{
        CubifyError, CubifyMode, CubifyParams, CubifyReport, RadicandPolicy, SolveFrame,
        cubify_mesh,
    };
}

// =============================================================================
// Tests
// =============================================================================

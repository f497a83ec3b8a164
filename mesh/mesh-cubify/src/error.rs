//! Error types for sphere-to-cube remapping.

use mesh_types::Axis;
use thiserror::Error;

/// Errors that can occur while remapping a mesh onto its bounding cube.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CubifyError {
    /// The mesh has no vertices, so there are no bounds to map onto.
    #[error("mesh has no vertices")]
    EmptyMesh,

    /// A square root in the face solve received a negative radicand.
    #[error(
        "vertex {index} has no real solution on the {axis} face (radicand {radicand:e})"
    )]
    NumericDomain {
        /// Index of the failing vertex (0-based position in the sequence).
        index: usize,
        /// Dominant axis the vertex was classified onto.
        axis: Axis,
        /// The offending radicand.
        radicand: f64,
    },
}

/// Result type for remapping operations.
pub type CubifyResult<T> = Result<T, CubifyError>;

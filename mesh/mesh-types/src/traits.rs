//! Traits for mesh types.

use crate::Vertex;
use nalgebra::Point3;

/// Trait for types that provide mesh topology information.
///
/// Face indices are 1-based, as they appear in OBJ files.
pub trait MeshTopology {
    /// Get the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Get the number of faces (triangles).
    fn face_count(&self) -> usize;

    /// Get a vertex by its 0-based position in the vertex sequence.
    ///
    /// Returns `None` if the index is out of bounds.
    fn vertex(&self, index: usize) -> Option<&Vertex>;

    /// Get a face by index.
    ///
    /// Returns `None` if the index is out of bounds.
    /// The returned array contains 1-based vertex indices.
    fn face(&self, index: usize) -> Option<[u32; 3]>;

    /// Resolve a face's corner positions.
    ///
    /// Returns `None` if the face index is out of bounds or any of its
    /// 1-based vertex indices does not resolve.
    fn face_positions(&self, face_index: usize) -> Option<[Point3<f64>; 3]> {
        let [a, b, c] = self.face(face_index)?;
        let resolve = |i: u32| {
            let index = usize::try_from(i).ok()?.checked_sub(1)?;
            self.vertex(index).map(|v| v.position)
        };
        Some([resolve(a)?, resolve(b)?, resolve(c)?])
    }
}

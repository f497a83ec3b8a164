//! Indexed triangle mesh.

use std::collections::HashMap;

use crate::{MeshTopology, SmoothingGroup, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// Stores vertices and faces separately, with faces referencing vertices by
/// **1-based** index, plus the one smoothing-group line of the source file.
/// Insertion order is output order for both sequences.
///
/// # Memory Layout
///
/// - `vertices`: `Vec<Vertex>` - Vertex positions
/// - `faces`: `Vec<[u32; 3]>` - Triangle faces as 1-based vertex indices
/// - `smoothing`: `SmoothingGroup` - Opaque metadata, defaults to `s 0`
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex, MeshTopology};
///
/// // Create a single triangle
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([1, 2, 3]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// assert_eq!(mesh.smoothing.to_string(), "s 0");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as 1-based indices into the vertex array.
    pub faces: Vec<[u32; 3]>,

    /// Smoothing-group metadata carried through unchanged.
    pub smoothing: SmoothingGroup,
}

impl IndexedMesh {
    /// Create a new empty mesh with smoothing off.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh from vertices and 1-based faces.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{IndexedMesh, Vertex, MeshTopology};
    ///
    /// let vertices = vec![
    ///     Vertex::from_coords(0.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 0.0, 0.0),
    ///     Vertex::from_coords(0.0, 1.0, 0.0),
    /// ];
    /// let faces = vec![[1, 2, 3]];
    ///
    /// let mesh = IndexedMesh::from_parts(vertices, faces);
    /// assert_eq!(mesh.face_count(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            faces,
            smoothing: SmoothingGroup::default(),
        }
    }

    /// Replace the smoothing-group metadata.
    #[must_use]
    pub fn with_smoothing(mut self, smoothing: SmoothingGroup) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Indices (0-based, into `faces`) of faces whose vertex references do
    /// not resolve to a vertex.
    ///
    /// Index 0 and indices past the vertex count are dangling.
    pub fn dangling_faces(&self) -> impl Iterator<Item = usize> + '_ {
        let count = self.vertices.len();
        self.faces.iter().enumerate().filter_map(move |(i, face)| {
            let ok = face
                .iter()
                .all(|&v| usize::try_from(v).is_ok_and(|v| v >= 1 && v <= count));
            (!ok).then_some(i)
        })
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn face(&self, index: usize) -> Option<[u32; 3]> {
        self.faces.get(index).copied()
    }
}

/// Build a sphere by repeatedly subdividing an octahedron.
///
/// Every vertex lies at distance `radius` from the origin. Level 0 is the
/// plain octahedron (6 vertices, 8 faces); each level splits every triangle
/// into four, giving `4^(n+1) + 2` vertices and `8 * 4^n` faces. Faces are
/// 1-based and wound counter-clockwise seen from outside.
///
/// # Example
///
/// ```
/// use mesh_types::{octahedron_sphere, MeshTopology};
///
/// let sphere = octahedron_sphere(1.0, 2);
/// assert_eq!(sphere.vertex_count(), 66);
/// assert_eq!(sphere.face_count(), 128);
/// ```
#[must_use]
pub fn octahedron_sphere(radius: f64, subdivisions: u32) -> IndexedMesh {
    let mut positions: Vec<nalgebra::Vector3<f64>> = vec![
        nalgebra::Vector3::x(),
        -nalgebra::Vector3::x(),
        nalgebra::Vector3::y(),
        -nalgebra::Vector3::y(),
        nalgebra::Vector3::z(),
        -nalgebra::Vector3::z(),
    ];
    let mut faces: Vec<[u32; 3]> = vec![
        [0, 2, 4],
        [2, 1, 4],
        [1, 3, 4],
        [3, 0, 4],
        [2, 0, 5],
        [1, 2, 5],
        [3, 1, 5],
        [0, 3, 5],
    ];

    for _ in 0..subdivisions {
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut next = Vec::with_capacity(faces.len() * 4);

        #[allow(clippy::cast_possible_truncation)]
        // Truncation: face indices are u32, meshes with >4B vertices are unsupported
        let mut midpoint = |a: u32, b: u32, positions: &mut Vec<nalgebra::Vector3<f64>>| {
            let key = (a.min(b), a.max(b));
            *midpoints.entry(key).or_insert_with(|| {
                let mid = (positions[a as usize] + positions[b as usize]).normalize();
                positions.push(mid);
                (positions.len() - 1) as u32
            })
        };

        for &[a, b, c] in &faces {
            let ab = midpoint(a, b, &mut positions);
            let bc = midpoint(b, c, &mut positions);
            let ca = midpoint(c, a, &mut positions);
            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        faces = next;
    }

    let vertices = positions
        .into_iter()
        .map(|p| Vertex::new((p * radius).into()))
        .collect();
    let faces = faces.into_iter().map(|f| f.map(|i| i + 1)).collect();
    IndexedMesh::from_parts(vertices, faces)
}

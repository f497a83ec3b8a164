//! Remapping report and travel metrics.
//!
//! This module provides the [`CubifyReport`] struct returned by the driver,
//! describing where every vertex went and how far it travelled.

use mesh_types::{Aabb, Axis};

/// Outcome of a remapping run.
///
/// # Examples
///
/// ```
/// use mesh_cubify::{cubify_vertices, CubifyParams};
/// use mesh_types::{Axis, Vertex};
///
/// let mut vertices = vec![
///     Vertex::from_coords(1.0, 0.0, 0.0),
///     Vertex::from_coords(-1.0, 0.0, 0.0),
///     Vertex::from_coords(0.0, 0.8, 0.6),
///     Vertex::from_coords(0.0, -1.0, 0.0),
///     Vertex::from_coords(0.0, 0.0, -1.0),
/// ];
///
/// let report = cubify_vertices(&mut vertices, &CubifyParams::default()).unwrap();
/// assert_eq!(report.vertex_count, 5);
/// assert_eq!(report.face_count(Axis::X), 2);
/// println!("{}", report.summary());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubifyReport {
    /// Bounds of the input, frozen before mapping.
    pub bounds: Aabb,
    /// Number of vertices processed.
    pub vertex_count: usize,
    /// Vertices placed on each face, indexed by [`Axis::index`].
    pub face_counts: [usize; 3],
    /// Vertices placed by corner projection (all of them in corner mode).
    pub corner_fallbacks: usize,
    /// Vertices left in place because the face solve had no real solution.
    pub skipped: usize,
    /// Vertices whose solve clamped a negative radicand.
    pub clamped: usize,
    /// Vertices that moved by more than `1e-10`.
    pub vertices_moved: usize,
    /// Largest distance travelled by a vertex.
    pub max_displacement: f64,
    /// Mean distance travelled by the vertices that moved.
    pub average_displacement: f64,
}

impl CubifyReport {
    /// Creates an empty report for a run over `vertex_count` vertices.
    #[must_use]
    pub const fn new(bounds: Aabb, vertex_count: usize) -> Self {
        Self {
            bounds,
            vertex_count,
            face_counts: [0; 3],
            corner_fallbacks: 0,
            skipped: 0,
            clamped: 0,
            vertices_moved: 0,
            max_displacement: 0.0,
            average_displacement: 0.0,
        }
    }

    /// Number of vertices placed on the face of `axis`.
    #[must_use]
    pub const fn face_count(&self, axis: Axis) -> usize {
        self.face_counts[axis.index()]
    }

    /// Whether every vertex was placed without skipping or clamping.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.skipped == 0 && self.clamped == 0
    }

    /// Returns a one-line summary of the run.
    ///
    /// # Examples
    ///
    /// ```
    /// use mesh_cubify::CubifyReport;
    /// use mesh_types::Aabb;
    ///
    /// let report = CubifyReport::new(Aabb::empty(), 0);
    /// assert!(report.summary().contains("0 vertices"));
    /// ```
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "CubifyReport: {} vertices (x {}, y {}, z {}, corner {}), {} skipped, {} clamped, \
             {} moved, max displacement: {:.6}, avg displacement: {:.6}",
            self.vertex_count,
            self.face_counts[0],
            self.face_counts[1],
            self.face_counts[2],
            self.corner_fallbacks,
            self.skipped,
            self.clamped,
            self.vertices_moved,
            self.max_displacement,
            self.average_displacement
        )
    }
}

//! Bounds computation, per-vertex mapping and the mapping driver.

use std::f64::consts::PI;

use mesh_types::{Aabb, Axis, IndexedMesh, Vertex};
use nalgebra::{Point3, Vector3};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::classify::{classify, project_to_corner, snap_to_nearer};
use crate::error::{CubifyError, CubifyResult};
use crate::params::{CubifyMode, CubifyParams, RadicandPolicy, SolveFrame};
use crate::result::CubifyReport;
use crate::solve::{DomainError, solve_face};

/// Vertex count above which mapping runs on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 1000;

/// Displacements at or below this are not counted as movement.
const MOVE_EPSILON: f64 = 1e-10;

/// Where a single vertex ends up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexMapping {
    /// The new position.
    pub position: Point3<f64>,
    /// The face the vertex was placed on, or `None` for a corner projection.
    pub face: Option<Axis>,
    /// Whether the solve clamped a negative radicand.
    pub clamped: bool,
}

/// A point whose face solve has no real solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceSolveError {
    /// The face the point was classified onto.
    pub axis: Axis,
    /// The offending radicand (negative or NaN).
    pub radicand: f64,
}

/// Computes the bounds of a vertex sequence.
///
/// # Errors
///
/// Returns [`CubifyError::EmptyMesh`] if `vertices` is empty.
///
/// # Examples
///
/// ```
/// use mesh_cubify::compute_bounds;
/// use mesh_types::Vertex;
///
/// let vertices = [
///     Vertex::from_coords(-2.0, 0.5, -1.0),
///     Vertex::from_coords(3.0, -1.0, 1.0),
/// ];
/// let bounds = compute_bounds(&vertices).unwrap();
/// assert_eq!(bounds.min.x, -2.0);
/// assert_eq!(bounds.max.x, 3.0);
///
/// assert!(compute_bounds(&[]).is_err());
/// ```
pub fn compute_bounds(vertices: &[Vertex]) -> CubifyResult<Aabb> {
    if vertices.is_empty() {
        return Err(CubifyError::EmptyMesh);
    }
    Ok(Aabb::from_points(vertices.iter().map(|v| &v.position)))
}

/// Maps one point onto the cube described by `bounds`.
///
/// The result depends only on `point`, `bounds` and `params`, so points can
/// be mapped in any order.
///
/// # Errors
///
/// Returns [`FaceSolveError`] when the face solve has no real solution and
/// `params` does not clamp.
///
/// # Examples
///
/// ```
/// use mesh_cubify::{map_vertex, CubifyParams};
/// use mesh_types::{Aabb, Axis};
/// use nalgebra::Point3;
///
/// let bounds = Aabb::new(Point3::new(-2.0, -1.0, -1.0), Point3::new(3.0, 1.0, 1.0));
/// let mapped = map_vertex(&Point3::new(2.9, 0.1, -0.05), &bounds, &CubifyParams::default())
///     .unwrap();
///
/// assert_eq!(mapped.face, Some(Axis::X));
/// assert_eq!(mapped.position.x, 3.0);
/// ```
pub fn map_vertex(
    point: &Point3<f64>,
    bounds: &Aabb,
    params: &CubifyParams,
) -> Result<VertexMapping, FaceSolveError> {
    match params.mode {
        CubifyMode::Corner => {
            let target = bounds.scaled((PI / 6.0).sqrt());
            Ok(corner_mapping(point, &target))
        }
        CubifyMode::MinimumTravel => match classify(point) {
            Some(axis) => map_onto_face(point, bounds, axis, params),
            None => Ok(corner_mapping(point, bounds)),
        },
    }
}

fn corner_mapping(point: &Point3<f64>, bounds: &Aabb) -> VertexMapping {
    VertexMapping {
        position: project_to_corner(point, bounds),
        face: None,
        clamped: false,
    }
}

fn map_onto_face(
    point: &Point3<f64>,
    bounds: &Aabb,
    axis: Axis,
    params: &CubifyParams,
) -> Result<VertexMapping, FaceSolveError> {
    let (first, second) = axis.others();
    let (i, j) = (first.index(), second.index());
    let failed = |e: DomainError| FaceSolveError {
        axis,
        radicand: e.radicand,
    };

    let solved = match params.frame {
        SolveFrame::Raw => {
            let s = solve_face(point[i], point[j], params.clamps()).map_err(failed)?;
            (s.a, s.b, s.clamped)
        }
        SolveFrame::Normalized => {
            let dir = unit_direction(point, bounds);
            let s = solve_face(dir[i], dir[j], params.clamps()).map_err(failed)?;
            (
                from_unit(s.a, bounds.min[i], bounds.max[i]),
                from_unit(s.b, bounds.min[j], bounds.max[j]),
                s.clamped,
            )
        }
    };

    let k = axis.index();
    let mut position = *point;
    position[k] = snap_to_nearer(point[k], bounds.min[k], bounds.max[k]);
    position[i] = solved.0;
    position[j] = solved.1;

    Ok(VertexMapping {
        position,
        face: Some(axis),
        clamped: solved.2,
    })
}

/// Direction of `point` after scaling each side of the bounds to unit extent.
fn unit_direction(point: &Point3<f64>, bounds: &Aabb) -> Vector3<f64> {
    let scaled = Vector3::from_fn(|r, _| to_unit(point[r], bounds.min[r], bounds.max[r]));
    let norm = scaled.norm();
    if norm > 0.0 && norm.is_finite() {
        scaled / norm
    } else {
        scaled
    }
}

fn to_unit(c: f64, min: f64, max: f64) -> f64 {
    if c > 0.0 {
        c / max
    } else if c < 0.0 {
        c / -min
    } else {
        c
    }
}

fn from_unit(u: f64, min: f64, max: f64) -> f64 {
    if u > 0.0 {
        u * max
    } else if u < 0.0 {
        u * -min
    } else {
        u
    }
}

/// Maps every vertex onto the bounding cube of the sequence, in place.
///
/// Bounds are computed once and frozen before any vertex is mapped. Every
/// vertex is mapped before any is written, so a failed run leaves the
/// sequence untouched.
///
/// # Errors
///
/// Returns an error if:
/// - `vertices` is empty ([`CubifyError::EmptyMesh`])
/// - a face solve has no real solution and the policy is not
///   [`RadicandPolicy::Skip`] ([`CubifyError::NumericDomain`], naming the
///   lowest failing index). Under [`RadicandPolicy::Clamp`] only NaN
///   radicands fail.
///
/// # Examples
///
/// ```
/// use mesh_cubify::{cubify_vertices, CubifyParams};
/// use mesh_types::Vertex;
///
/// let c = 1.0 / 3.0_f64.sqrt();
/// let mut vertices = vec![
///     Vertex::from_coords(c, c, c),
///     Vertex::from_coords(-c, -c, -c),
///     Vertex::from_coords(0.0, 0.6, 0.8),
/// ];
///
/// let report = cubify_vertices(&mut vertices, &CubifyParams::default()).unwrap();
/// assert_eq!(report.vertex_count, 3);
/// assert_eq!(vertices[2].position.z, report.bounds.max.z);
/// ```
pub fn cubify_vertices(
    vertices: &mut [Vertex],
    params: &CubifyParams,
) -> CubifyResult<CubifyReport> {
    let bounds = compute_bounds(vertices)?;
    info!(
        vertex_count = vertices.len(),
        %bounds,
        mode = ?params.mode,
        frame = ?params.frame,
        "Mapping vertices onto bounding cube"
    );

    let map = |v: &Vertex| map_vertex(&v.position, &bounds, params);
    let outcomes: Vec<_> = if params.parallel && vertices.len() > PARALLEL_THRESHOLD {
        vertices.par_iter().map(map).collect()
    } else {
        vertices.iter().map(map).collect()
    };

    if params.on_domain_error != RadicandPolicy::Skip {
        let failure = outcomes
            .iter()
            .enumerate()
            .find_map(|(index, outcome)| outcome.as_ref().err().map(|e| (index, *e)));
        if let Some((index, err)) = failure {
            return Err(CubifyError::NumericDomain {
                index,
                axis: err.axis,
                radicand: err.radicand,
            });
        }
    }

    let mut report = CubifyReport::new(bounds, vertices.len());
    let mut total_displacement = 0.0;

    for (index, (vertex, outcome)) in vertices.iter_mut().zip(outcomes).enumerate() {
        let mapping = match outcome {
            Ok(mapping) => mapping,
            Err(err) => {
                warn!(
                    index,
                    axis = %err.axis,
                    radicand = err.radicand,
                    "No real face solution, vertex left in place"
                );
                report.skipped += 1;
                continue;
            }
        };

        match mapping.face {
            Some(axis) => report.face_counts[axis.index()] += 1,
            None => report.corner_fallbacks += 1,
        }
        if mapping.clamped {
            report.clamped += 1;
        }

        let displacement = vertex.distance_to(&mapping.position);
        if displacement > MOVE_EPSILON {
            report.vertices_moved += 1;
            total_displacement += displacement;
            if displacement > report.max_displacement {
                report.max_displacement = displacement;
            }
        }

        vertex.move_to(mapping.position);
    }

    #[allow(clippy::cast_precision_loss)]
    let moved = report.vertices_moved as f64;
    if report.vertices_moved > 0 {
        report.average_displacement = total_displacement / moved;
    }

    if params.mode == CubifyMode::MinimumTravel && report.corner_fallbacks > 0 {
        warn!(
            count = report.corner_fallbacks,
            "Vertices with non-finite coordinates were projected to a corner"
        );
    }
    if report.clamped > 0 {
        warn!(count = report.clamped, "Negative radicands clamped to zero");
    }
    debug!(summary = %report.summary(), "Mapping complete");

    Ok(report)
}

/// Maps the vertices of `mesh` onto its bounding cube, in place.
///
/// Faces and smoothing metadata are not touched.
///
/// # Errors
///
/// Same as [`cubify_vertices`].
pub fn cubify_mesh(mesh: &mut IndexedMesh, params: &CubifyParams) -> CubifyResult<CubifyReport> {
    debug!(
        faces = mesh.faces.len(),
        smoothing = %mesh.smoothing,
        "Cubifying mesh"
    );
    cubify_vertices(&mut mesh.vertices, params)
}

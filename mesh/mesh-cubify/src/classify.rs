//! Dominant-axis classification and bound snapping.

use mesh_types::{Aabb, Axis};
use nalgebra::Point3;

/// Absolute tolerance used when comparing coordinate magnitudes.
pub const AXIS_TOLERANCE: f64 = 1e-12;

/// Compares the magnitudes of two values within [`AXIS_TOLERANCE`].
///
/// Any comparison involving NaN or a pair of infinities is false.
///
/// # Examples
///
/// ```
/// use mesh_cubify::approx_eq;
///
/// assert!(approx_eq(-0.5, 0.5));
/// assert!(approx_eq(0.1 + 0.2, 0.3));
/// assert!(!approx_eq(0.5, 0.500_001));
/// assert!(!approx_eq(f64::NAN, f64::NAN));
/// ```
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a.abs() - b.abs()).abs() <= AXIS_TOLERANCE
}

/// Returns the axis whose coordinate has the largest magnitude.
///
/// Ties are broken in the fixed order X, Y, Z. Returns `None` if any
/// coordinate is infinite or NaN; callers fall back to [`project_to_corner`].
///
/// # Examples
///
/// ```
/// use mesh_cubify::classify;
/// use mesh_types::Axis;
/// use nalgebra::Point3;
///
/// assert_eq!(classify(&Point3::new(0.1, -0.9, 0.3)), Some(Axis::Y));
/// assert_eq!(classify(&Point3::new(0.5, 0.5, -0.5)), Some(Axis::X));
/// assert_eq!(classify(&Point3::new(f64::INFINITY, 0.0, 0.0)), None);
/// assert_eq!(classify(&Point3::new(f64::NAN, 0.5, 0.2)), None);
/// ```
#[must_use]
pub fn classify(point: &Point3<f64>) -> Option<Axis> {
    if !point.iter().all(|c| c.is_finite()) {
        return None;
    }
    let m = point.x.abs().max(point.y.abs()).max(point.z.abs());
    Axis::ALL
        .into_iter()
        .find(|&axis| approx_eq(point[axis.index()], m))
}

/// Returns whichever of `min` and `max` is nearer to `value`.
///
/// A value equidistant from both snaps to `max`.
#[inline]
#[must_use]
pub fn snap_to_nearer(value: f64, min: f64, max: f64) -> f64 {
    if (value - max).abs() <= (value - min).abs() {
        max
    } else {
        min
    }
}

/// Snaps every coordinate of `point` to its nearer bound.
///
/// The result is always one of the eight corners of `bounds`.
#[must_use]
pub fn project_to_corner(point: &Point3<f64>, bounds: &Aabb) -> Point3<f64> {
    Point3::new(
        snap_to_nearer(point.x, bounds.min.x, bounds.max.x),
        snap_to_nearer(point.y, bounds.min.y, bounds.max.y),
        snap_to_nearer(point.z, bounds.min.z, bounds.max.z),
    )
}

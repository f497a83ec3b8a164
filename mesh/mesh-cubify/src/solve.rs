//! Closed-form solve for the two non-dominant coordinates.
//!
//! The cube-to-sphere projection maps a face point `(1, s, t)` to
//!
//! ```text
//! a = s * sqrt(1/2 - t²/2 + t²/3)
//! b = t * sqrt(1/2 - s²/2 + s²/3)
//! ```
//!
//! [`solve_face`] inverts it. With `A = 2a²` and `B = 2b²`:
//!
//! ```text
//! D  = -A + B - 3
//! E  = -sqrt(D² - 12A)
//! s  = sqrt(E + A - B + 3) * sqrt(1/2)
//! t  = sqrt(E - A + B + 3) * sqrt(1/2)
//! ```
//!
//! each taking the sign of its input, and exactly zero for a zero input.

use std::f64::consts::FRAC_1_SQRT_2;

/// Negative radicands no smaller than `-RADICAND_TOLERANCE` are treated as
/// rounding noise and read as zero.
pub const RADICAND_TOLERANCE: f64 = 1e-12;

/// The two solved face coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceSolution {
    /// Solved value for the first non-dominant coordinate.
    pub a: f64,
    /// Solved value for the second non-dominant coordinate.
    pub b: f64,
    /// Whether a negative radicand was clamped to zero on the way.
    pub clamped: bool,
}

/// A square root in the solve has no real value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainError {
    /// The offending radicand (negative or NaN).
    pub radicand: f64,
}

/// Solves the face coordinates for the non-dominant pair `(a, b)`.
///
/// With `clamp` set, finite negative radicands become zero and the result is
/// flagged; NaN radicands always fail.
///
/// # Errors
///
/// Returns [`DomainError`] when the discriminant `D² - 12A`, or an outer
/// radicand that is actually used, is below `-RADICAND_TOLERANCE` (and
/// `clamp` is not set) or is NaN.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use mesh_cubify::solve_face;
///
/// // A sphere point above a cube corner solves to the corner.
/// let c = 1.0 / 3.0_f64.sqrt();
/// let solved = solve_face(c, -c, false).unwrap();
/// assert_relative_eq!(solved.a, 1.0, epsilon = 1e-12);
/// assert_relative_eq!(solved.b, -1.0, epsilon = 1e-12);
///
/// // Zero stays exactly zero.
/// let solved = solve_face(0.0, 0.3, false).unwrap();
/// assert_eq!(solved.a, 0.0);
/// ```
pub fn solve_face(a: f64, b: f64, clamp: bool) -> Result<FaceSolution, DomainError> {
    let mut clamped = false;
    let aa = 2.0 * a * a;
    let bb = 2.0 * b * b;

    let d = -aa + bb - 3.0;
    let e = -checked_sqrt(d * d - 12.0 * aa, clamp, &mut clamped)?;

    let solved_a = if a == 0.0 {
        0.0
    } else {
        (checked_sqrt(e + aa - bb + 3.0, clamp, &mut clamped)? * FRAC_1_SQRT_2).copysign(a)
    };
    let solved_b = if b == 0.0 {
        0.0
    } else {
        (checked_sqrt(e - aa + bb + 3.0, clamp, &mut clamped)? * FRAC_1_SQRT_2).copysign(b)
    };

    Ok(FaceSolution {
        a: solved_a,
        b: solved_b,
        clamped,
    })
}

fn checked_sqrt(radicand: f64, clamp: bool, clamped: &mut bool) -> Result<f64, DomainError> {
    if radicand >= 0.0 {
        Ok(radicand.sqrt())
    } else if radicand >= -RADICAND_TOLERANCE {
        Ok(0.0)
    } else if clamp && radicand.is_finite() {
        *clamped = true;
        Ok(0.0)
    } else {
        Err(DomainError { radicand })
    }
}

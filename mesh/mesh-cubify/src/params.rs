//! Remapping parameters and configuration.
//!
//! This module provides the [`CubifyParams`] struct for configuring how a
//! sphere-like mesh is carried onto its bounding cube.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which transformation to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum CubifyMode {
    /// Minimum-travel mapping.
    ///
    /// Each vertex is classified onto the face of its dominant axis, that
    /// coordinate snaps to the nearer bound, and the other two are solved
    /// in closed form so the vertex lands on the face.
    #[default]
    MinimumTravel,

    /// Equal-area corner projection.
    ///
    /// The bounds are scaled by `sqrt(π/6)` (the side of a cube whose surface
    /// area matches the sphere's) and every coordinate snaps independently to
    /// the nearer scaled bound. Every vertex ends up on one of the eight
    /// corners, so this is only useful for inspecting the target cube.
    Corner,
}

/// How the two non-dominant coordinates are presented to the face solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum SolveFrame {
    /// Solve on the unit-sphere direction of the vertex.
    ///
    /// Each coordinate is divided by its own side of the bounds, the result is
    /// normalized, and the solved values are scaled back by the same extents.
    /// Works for any origin-centred sphere radius.
    #[default]
    Normalized,

    /// Feed the raw coordinates to the solve.
    ///
    /// The solve constants assume a unit-radius sphere, so this only lands
    /// vertices on the cube for unit spheres.
    Raw,
}

/// What to do when the face solve has no real solution for a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum RadicandPolicy {
    /// Fail the whole run and leave every vertex untouched.
    #[default]
    Abort,
    /// Leave the failing vertex at its original position.
    Skip,
    /// Clamp negative radicands to zero and keep going.
    Clamp,
}

/// Parameters for sphere-to-cube remapping.
///
/// Use the presets and builder methods to configure a run.
///
/// # Examples
///
/// ```
/// use mesh_cubify::{CubifyParams, RadicandPolicy, SolveFrame};
///
/// // Minimum-travel mapping, normalized frame, abort on domain errors
/// let params = CubifyParams::default();
///
/// // The unscaled formula, skipping vertices it cannot place
/// let params = CubifyParams::literal().with_policy(RadicandPolicy::Skip);
/// assert_eq!(params.frame, SolveFrame::Raw);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CubifyParams {
    /// The transformation to apply.
    pub mode: CubifyMode,
    /// Frame used by the face solve.
    pub frame: SolveFrame,
    /// Policy for negative radicands.
    pub on_domain_error: RadicandPolicy,
    /// Map vertices on the rayon pool when the mesh is large enough.
    pub parallel: bool,
}

impl Default for CubifyParams {
    fn default() -> Self {
        Self::new()
    }
}

impl CubifyParams {
    /// Creates the default parameters: minimum-travel mapping in the
    /// normalized frame, aborting on domain errors, parallel enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: CubifyMode::MinimumTravel,
            frame: SolveFrame::Normalized,
            on_domain_error: RadicandPolicy::Abort,
            parallel: true,
        }
    }

    /// Creates parameters for the equal-area corner projection.
    ///
    /// # Examples
    ///
    /// ```
    /// use mesh_cubify::{CubifyMode, CubifyParams};
    ///
    /// let params = CubifyParams::corner();
    /// assert_eq!(params.mode, CubifyMode::Corner);
    /// ```
    #[must_use]
    pub const fn corner() -> Self {
        Self {
            mode: CubifyMode::Corner,
            ..Self::new()
        }
    }

    /// Creates parameters that apply the face formula to raw coordinates.
    #[must_use]
    pub const fn literal() -> Self {
        Self {
            frame: SolveFrame::Raw,
            ..Self::new()
        }
    }

    /// Sets the transformation mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: CubifyMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the solve frame.
    #[must_use]
    pub const fn with_frame(mut self, frame: SolveFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Sets the negative-radicand policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: RadicandPolicy) -> Self {
        self.on_domain_error = policy;
        self
    }

    /// Enables or disables parallel mapping.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether the face solve should clamp negative radicands.
    #[must_use]
    pub const fn clamps(&self) -> bool {
        matches!(self.on_domain_error, RadicandPolicy::Clamp)
    }
}

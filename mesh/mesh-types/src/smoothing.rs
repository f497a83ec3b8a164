//! Smoothing-group metadata.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The single smoothing-group line carried through a mesh unchanged.
///
/// Only the value token is stored; [`Display`](fmt::Display) renders the
/// full `s <value>` line. The default is `s 0`, smoothing off, which is what
/// a polygonal mesh without an `s` line implies.
///
/// # Example
///
/// ```
/// use mesh_types::SmoothingGroup;
///
/// assert_eq!(SmoothingGroup::default().to_string(), "s 0");
/// assert_eq!(SmoothingGroup::new("4").to_string(), "s 4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SmoothingGroup {
    value: String,
}

impl SmoothingGroup {
    /// Value used when the source file has no `s` line.
    pub const OFF: &'static str = "0";

    /// Create a smoothing group from its value token.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The value token, e.g. `"0"` or `"off"`.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether smoothing is switched off.
    #[must_use]
    pub fn is_off(&self) -> bool {
        self.value == Self::OFF || self.value.eq_ignore_ascii_case("off")
    }
}

impl Default for SmoothingGroup {
    fn default() -> Self {
        Self::new(Self::OFF)
    }
}

impl fmt::Display for SmoothingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s {}", self.value)
    }
}

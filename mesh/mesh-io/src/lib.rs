//! Mesh file I/O for the sphere-to-cube toolkit.
//!
//! This crate loads and saves triangle meshes in the line-oriented
//! **OBJ** (Wavefront) subset the remapping pipeline consumes and produces:
//! smoothing group, vertices and triangular faces.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_obj, save_obj};
//!
//! // Load a mesh
//! let mesh = load_obj("Test.obj").unwrap();
//!
//! // Save it back
//! save_obj(&mesh, "output.obj").unwrap();
//! ```
//!
//! # Errors
//!
//! A missing input file and a failed output write are reported as distinct
//! variants ([`IoError::FileNotFound`], [`IoError::Write`]) so callers can
//! tell the user which side of the pipeline failed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod obj;

pub use error::{IoError, IoResult};
pub use obj::{load_obj, read_obj, save_obj, write_obj};

//! Command-line driver for sphere-to-cube remapping.
//!
//! Reads an OBJ sphere, maps every vertex onto the mesh's bounding cube and
//! writes the result. The binary in `main.rs` only installs logging and turns
//! the outcome of [`run`] into an exit status.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mesh::prelude::*;
use tracing::{Level, info, warn};

/// Exit status for a missing input file.
pub const EXIT_MISSING_INPUT: u8 = 2;
/// Exit status for a failed output write.
pub const EXIT_WRITE_FAILED: u8 = 3;
/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Sphere-to-cube mesh remapper
#[derive(Parser, Debug)]
#[command(name = "cubify")]
#[command(author, version, about = "Morph a sphere OBJ mesh onto its bounding cube", long_about = None)]
pub struct Cli {
    /// Input OBJ file
    #[arg(default_value = "Test.obj")]
    pub input: PathBuf,

    /// Output OBJ file
    #[arg(default_value = "output.obj")]
    pub output: PathBuf,

    /// Transformation to apply
    #[arg(long, value_enum, default_value_t = Mode::MinimumTravel)]
    pub mode: Mode,

    /// Frame the face solve runs in
    #[arg(long, value_enum, default_value_t = Frame::Normalized)]
    pub frame: Frame,

    /// What to do with vertices the face solve cannot place
    #[arg(long, value_enum, default_value_t = Policy::Abort)]
    pub on_domain_error: Policy,

    /// Map vertices on a single thread
    #[arg(long)]
    pub no_parallel: bool,

    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

/// Transformation selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Minimum-travel mapping onto the cube faces.
    MinimumTravel,
    /// Snap every coordinate to an equal-area cube corner.
    Corner,
}

/// Solve frame selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Frame {
    /// Solve on the unit-sphere direction, any radius.
    Normalized,
    /// Solve on raw coordinates, unit spheres only.
    Raw,
}

/// Negative-radicand policy selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Fail without writing output.
    Abort,
    /// Leave the vertex where it is.
    Skip,
    /// Read the radicand as zero.
    Clamp,
}

impl From<Mode> for CubifyMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::MinimumTravel => Self::MinimumTravel,
            Mode::Corner => Self::Corner,
        }
    }
}

impl From<Frame> for SolveFrame {
    fn from(frame: Frame) -> Self {
        match frame {
            Frame::Normalized => Self::Normalized,
            Frame::Raw => Self::Raw,
        }
    }
}

impl From<Policy> for RadicandPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Abort => Self::Abort,
            Policy::Skip => Self::Skip,
            Policy::Clamp => Self::Clamp,
        }
    }
}

impl Cli {
    /// Remapping parameters described by the flags.
    #[must_use]
    pub fn params(&self) -> CubifyParams {
        CubifyParams::new()
            .with_mode(self.mode.into())
            .with_frame(self.frame.into())
            .with_policy(self.on_domain_error.into())
            .with_parallel(!self.no_parallel)
    }

    /// Tracing level named by `--log-level`, `INFO` when unrecognized.
    #[must_use]
    pub fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }
}

/// Loads the input, remaps it and writes the output.
///
/// Nothing is written unless the remapping succeeds.
///
/// # Errors
///
/// Returns an error if the input cannot be read or parsed, the remapping
/// fails, or the output cannot be written. Use [`exit_code`] to classify it.
pub fn run(cli: &Cli) -> Result<CubifyReport> {
    let mut mesh = load_obj(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        smoothing = %mesh.smoothing,
        "Loaded input mesh"
    );

    let dangling = mesh.dangling_faces().count();
    if dangling > 0 {
        warn!(dangling, "Faces reference vertices outside the mesh");
    }

    let report = cubify_mesh(&mut mesh, &cli.params()).context("failed to remap vertices")?;
    info!("{}", report.summary());

    save_obj(&mesh, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    info!(path = %cli.output.display(), "Output file written");

    Ok(report)
}

/// Exit status for an error returned by [`run`].
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<IoError>() {
        Some(e) if e.is_not_found() => EXIT_MISSING_INPUT,
        Some(e) if e.is_write_failure() => EXIT_WRITE_FAILED,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_file_names() {
        let cli = Cli::try_parse_from(["cubify"]).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(cli.input, PathBuf::from("Test.obj"));
        assert_eq!(cli.output, PathBuf::from("output.obj"));
        assert_eq!(cli.params(), CubifyParams::default());
        assert_eq!(cli.level(), Level::INFO);
    }

    #[test]
    fn flags_map_onto_params() {
        let cli = Cli::try_parse_from([
            "cubify",
            "in.obj",
            "out.obj",
            "--mode",
            "corner",
            "--frame",
            "raw",
            "--on-domain-error",
            "clamp",
            "--no-parallel",
            "--log-level",
            "DEBUG",
        ])
        .unwrap_or_else(|e| panic!("{e}"));

        let params = cli.params();
        assert_eq!(params.mode, CubifyMode::Corner);
        assert_eq!(params.frame, SolveFrame::Raw);
        assert_eq!(params.on_domain_error, RadicandPolicy::Clamp);
        assert!(!params.parallel);
        assert_eq!(cli.level(), Level::DEBUG);
    }

    #[test]
    fn unknown_policy_rejected() {
        assert!(Cli::try_parse_from(["cubify", "--on-domain-error", "ignore"]).is_err());
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let cli = Cli::try_parse_from(["cubify", "-l", "chatty"]).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(cli.level(), Level::INFO);
    }
}

//! `cubify`: morph a sphere OBJ mesh onto its bounding cube.
//!
//! ```text
//! cubify [INPUT] [OUTPUT] [--mode minimum-travel|corner] [--frame normalized|raw]
//!        [--on-domain-error abort|skip|clamp] [--no-parallel] [--log-level LEVEL]
//! ```
//!
//! Defaults read `Test.obj` and write `output.obj` in the working directory.

use std::process::ExitCode;

use clap::Parser;
use cubify::{Cli, EXIT_MISSING_INPUT, EXIT_WRITE_FAILED, exit_code, run};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.level())
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {e}");
    }

    info!("cubify v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code(&err);
            match code {
                EXIT_MISSING_INPUT => error!(
                    input = %cli.input.display(),
                    "No input file found, place the input OBJ file in the working directory"
                ),
                EXIT_WRITE_FAILED => error!(error = %format!("{err:#}"), "Error writing to output file"),
                _ => error!(error = %format!("{err:#}"), "Remapping failed"),
            }
            ExitCode::from(code)
        }
    }
}

//! `hmatrix`: render a matrix data document to SVG on stdout.
//!
//! ```text
//! hmatrix [dataFile] [optionsFile]
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hmatrix_viz::prelude::{Error, HMatrix, MatrixData, RenderOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// hmatrix: diamond-grid heatmaps of symmetric matrices
#[derive(Parser, Debug)]
#[command(name = "hmatrix")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(
    about = "Render a matrix data document as a diamond-grid heatmap SVG on stdout",
    long_about = None,
    after_help = "Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostics on stderr."
)]
struct Cli {
    /// Matrix data document
    #[arg(value_name = "DATA_FILE", default_value = "data.json")]
    data_file: PathBuf,

    /// Render options document, merged over the defaults
    #[arg(value_name = "OPTIONS_FILE")]
    options_file: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("error: {0}")]
    Render(#[from] Error),
    #[error("error: I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let data = MatrixData::load(&cli.data_file)?;
    let options = match &cli.options_file {
        Some(path) => RenderOptions::load(path)?,
        None => RenderOptions::default(),
    };
    debug!(data = %cli.data_file.display(), options = ?cli.options_file, "rendering");

    let svg = HMatrix::new().data(data).options(options).build()?.to_svg()?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(svg.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    // Usage errors exit with 2, help and version with 0.
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}

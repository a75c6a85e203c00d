//! `gifcolors` command line tool
//!
//! ```text
//! gifcolors                 # every GIF in the current directory
//! gifcolors images/         # every GIF in images/
//! gifcolors images/logo.gif # just this one
//! ```

use clap::Parser;
use gifcolors::{BatchConfig, RowScan, collect_inputs, run_batch};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(version, about = "Count the palette colors of indexed GIF images", long_about = None)]
struct Args {
    /// GIF file, or directory of GIF files (default: current directory)
    path: Option<PathBuf>,

    /// Count every pixel of rows whose width is not a multiple of the
    /// pixels per byte, instead of dropping the trailing ones
    #[arg(long, default_value_t = false)]
    exact_rows: bool,

    /// Do not write index.html for multi-file runs
    #[arg(long, default_value_t = false)]
    no_index: bool,

    /// Log decoding details
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let path = args.path.unwrap_or_else(|| PathBuf::from("."));
    let config = BatchConfig {
        row_scan: if args.exact_rows {
            RowScan::Exact
        } else {
            RowScan::Truncated
        },
        write_index: !args.no_index,
    };

    if path.is_dir() {
        tracing::info!(dir = %path.display(), "looking for GIF files");
    }
    let inputs = match collect_inputs(&path) {
        Ok(inputs) => inputs,
        Err(e) => {
            tracing::error!(error = %e, "cannot list inputs");
            return ExitCode::FAILURE;
        }
    };
    if inputs.is_empty() {
        eprintln!("Please provide a gif file name or a directory name (that contains gif files)");
        return ExitCode::FAILURE;
    }

    match run_batch(&inputs, &config) {
        Ok(summary) => {
            match (&summary.index, summary.generated.as_slice()) {
                (Some(index), generated) => tracing::info!(
                    index = %index.display(),
                    links = generated.len(),
                    "generated index"
                ),
                (None, [single]) => tracing::info!(report = %single.display(), "generated"),
                (None, generated) => tracing::info!(reports = generated.len(), "generated"),
            }
            if !summary.skipped.is_empty() {
                tracing::warn!(skipped = summary.skipped.len(), "some files were skipped");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "batch failed");
            ExitCode::FAILURE
        }
    }
}

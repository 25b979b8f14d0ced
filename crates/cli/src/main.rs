use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use diurna_core::{convert_day, date_folder_name};
use tracing_subscriber::EnvFilter;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert a per-day news-archive folder into a CSV dataset
#[derive(Parser, Debug)]
#[command(name = "diurna")]
#[command(author = "Diurna Contributors")]
#[command(version)]
#[command(about = "Convert a per-day news-archive folder into a CSV dataset", long_about = None)]
struct Args {
    /// Path to one <data>/<YYYYMMDD> folder of the unzipped archive
    #[arg(value_name = "ARCHIVE_DIR")]
    archive_dir: PathBuf,

    /// Directory the <YYYYMMDD>.csv file is written to
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// All diagnostics go to stderr; stdout is reserved for the output path.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.verbose {
        echo::print_banner();
    }

    // The archive folder is validated before the output directory is even
    // looked at, so a bad date path fails the same way whether or not an
    // output directory was given.
    let date = match date_folder_name(&args.archive_dir) {
        Ok(date) => date,
        Err(err) => {
            echo::print_error(&err.to_string());
            eprintln!("Please provide the path of one <data>/<YYYYMMDD> folder from the unzipped archive.");
            process::exit(1);
        }
    };

    let Some(output_dir) = args.output_dir else {
        echo::print_error("Missing output path.");
        process::exit(1);
    };

    if args.verbose {
        echo::print_info(&format!("Converting day {date}"));
    }

    let output_path =
        convert_day(&args.archive_dir, &output_dir).with_context(|| format!("Failed to convert archive day {date}"))?;

    println!("Created {}", output_path.display());

    Ok(())
}

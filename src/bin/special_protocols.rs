//! special-protocols - Reports protocols that have science data but no biomarkers
//!
//! Usage:
//!   special-protocols
//!   special-protocols --output-dir reports --insecure

use std::path::PathBuf;

use clap::Parser;
use expo_reports::config::ReportConfig;
use expo_reports::loader::HttpGraphLoader;
use expo_reports::logging;
use expo_reports::reports::run_special_protocols;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "special-protocols")]
#[command(
    about = "Generates CSV report of special protocols, where 'special' means protocols that have no \
             biomarkers but do have science data"
)]
struct Args {
    /// Directory receiving the CSV file
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Accept invalid TLS certificates from the source endpoints
    #[arg(long)]
    insecure: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.quiet);

    let config = ReportConfig {
        output_dir: args.output_dir,
        accept_invalid_certs: args.insecure,
        ..Default::default()
    };

    let loader = HttpGraphLoader::new(&config)?;
    let summary = run_special_protocols(&loader, &config)?;
    info!("Wrote {} protocols to {}", summary.rows, config.output_dir.join(&summary.file_name).display());

    Ok(())
}

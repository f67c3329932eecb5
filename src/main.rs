//! csv-reports - Generates CSV reports of EDRN's Cancer Data Expo
//!
//! Usage:
//!   csv-reports
//!   csv-reports --output-dir reports --insecure
//!   csv-reports --sensitivity-data --quiet

use std::path::PathBuf;

use clap::Parser;
use expo_reports::config::ReportConfig;
use expo_reports::loader::HttpGraphLoader;
use expo_reports::logging;
use expo_reports::reports::run_csv_reports;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "csv-reports")]
#[command(about = "Generates CSV reports of EDRN's Cancer Data Expo")]
struct Args {
    /// Directory receiving the CSV files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Accept invalid TLS certificates from the source endpoints
    #[arg(long)]
    insecure: bool,

    /// Also write sensitivity-data.csv
    #[arg(long)]
    sensitivity_data: bool,

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
        write_sensitivity_data: args.sensitivity_data,
        ..Default::default()
    };

    let loader = HttpGraphLoader::new(&config)?;
    let summaries = run_csv_reports(&loader, &config)?;

    for summary in &summaries {
        info!("{:<36} {:>6} rows", summary.file_name, summary.rows);
    }
    info!("Wrote {} reports to {}", summaries.len(), config.output_dir.display());

    Ok(())
}

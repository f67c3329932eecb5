//! The "special protocols" driver: protocols with science data but no biomarkers

use tracing::info;

use super::gap_finder::{find_protocol_gaps, gaps_table};
use super::{load_store, ReportSummary, SPECIAL_PROTOCOLS_FILE};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::loader::GraphLoader;
use crate::sink::CsvSink;

/// Fetch the protocol, biomarker study and science data graphs in that order,
/// compute the protocol gaps and write them.
pub fn run_special_protocols<L: GraphLoader + ?Sized>(loader: &L, config: &ReportConfig) -> Result<ReportSummary> {
    let endpoints = &config.endpoints;
    let protocols = load_store(loader, &endpoints.protocols)?;
    let biomarker_studies = load_store(loader, &endpoints.bmdb_biomarker_organs)?;
    let science_data = load_store(loader, &endpoints.science_data)?;

    let gaps = find_protocol_gaps(&protocols, &biomarker_studies, &science_data);
    info!("Found {} of {} protocols with science data but no biomarkers", gaps.len(), protocols.len());

    let table = gaps_table(&gaps);
    CsvSink::new(config.output_dir.clone()).write(&table, SPECIAL_PROTOCOLS_FILE)?;
    Ok(ReportSummary::new(SPECIAL_PROTOCOLS_FILE, table.len()))
}

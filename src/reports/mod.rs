//! Report drivers and the protocol gap computation
//!
//! Each driver fetches its graphs through a [`GraphLoader`], builds its own
//! statement stores and writes its CSV files before returning. Drivers share
//! no state, so nothing fetched for one report is reused by another.

pub mod catalog;
pub mod gap_finder;
pub mod special_protocols;

use tracing::debug;

use crate::error::Result;
use crate::loader::GraphLoader;
use crate::store::StatementStore;

pub use catalog::run_csv_reports;
pub use gap_finder::{find_protocol_gaps, gaps_table, ProtocolGap, UNKNOWN_TITLE};
pub use special_protocols::run_special_protocols;

pub const ORGANS_FILE: &str = "organs.csv";
pub const DISEASES_FILE: &str = "diseases.csv";
pub const PUBLICATIONS_FILE: &str = "publications.csv";
pub const SITES_FILE: &str = "sites.csv";
pub const PEOPLE_FILE: &str = "people.csv";
pub const COMMITTEES_FILE: &str = "committees.csv";
pub const PROTOCOLS_FILE: &str = "protocols.csv";
pub const BIOMARKERS_FILE: &str = "biomarkers.csv";
pub const BIOMARKER_ORGAN_STUDY_DATA_FILE: &str = "biomarker-organ-study-data.csv";
pub const BIOMARKER_ORGAN_DATA_FILE: &str = "biomarker-organ-data.csv";
pub const SENSITIVITY_DATA_FILE: &str = "sensitivity-data.csv";
pub const BIOMARKER_STUDIES_FILE: &str = "biomarker-studies.csv";
pub const COLLECTIONS_FILE: &str = "collections.csv";
pub const SPECIAL_PROTOCOLS_FILE: &str = "protocols-without-biomarkers-but-with-science-data.csv";

/// One CSV artifact written by a driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub file_name: String,
    /// Data rows written, header excluded
    pub rows: usize,
}

impl ReportSummary {
    pub fn new(file_name: &str, rows: usize) -> Self {
        Self { file_name: file_name.to_string(), rows }
    }
}

/// Fetch one graph and index it
pub fn load_store<L: GraphLoader + ?Sized>(loader: &L, uri: &str) -> Result<StatementStore> {
    let store = StatementStore::build(loader.load(uri)?);
    debug!("Indexed {} subjects from {}", store.len(), uri);
    Ok(store)
}

/// Fetch graphs in the given order and overlay each on the previous ones,
/// so a later source replaces any subject an earlier one also describes.
pub fn load_merged<L: GraphLoader + ?Sized>(loader: &L, uris: &[&str]) -> Result<StatementStore> {
    let mut merged = StatementStore::new();
    for uri in uris {
        let store = load_store(loader, uri)?;
        merged = StatementStore::merge(&merged, &store);
    }
    Ok(merged)
}

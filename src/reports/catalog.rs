//! The "csv reports" driver: one flattened table per catalog graph plus the
//! partitioned biomarker tables.

use tracing::info;

use super::{
    load_merged, ReportSummary, BIOMARKERS_FILE, BIOMARKER_ORGAN_DATA_FILE, BIOMARKER_ORGAN_STUDY_DATA_FILE,
    BIOMARKER_STUDIES_FILE, COLLECTIONS_FILE, COMMITTEES_FILE, DISEASES_FILE, ORGANS_FILE, PEOPLE_FILE,
    PROTOCOLS_FILE, PUBLICATIONS_FILE, SENSITIVITY_DATA_FILE, SITES_FILE,
};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::loader::GraphLoader;
use crate::partition::{partition, Category, TypeMap};
use crate::projection::{collections_table, project};
use crate::sink::CsvSink;

/// A table report built from one or more graphs, later sources overriding
/// earlier ones subject by subject.
#[derive(Debug, Clone)]
pub struct CatalogReport<'a> {
    pub file_name: &'static str,
    pub sources: Vec<&'a str>,
}

/// The plain catalog tables in the order they are written
pub fn catalog_reports(config: &ReportConfig) -> Vec<CatalogReport<'_>> {
    let endpoints = &config.endpoints;
    vec![
        CatalogReport { file_name: ORGANS_FILE, sources: vec![endpoints.body_systems.as_str()] },
        CatalogReport { file_name: DISEASES_FILE, sources: vec![endpoints.diseases.as_str()] },
        CatalogReport {
            file_name: PUBLICATIONS_FILE,
            sources: vec![endpoints.bmdb_publications.as_str(), endpoints.publications.as_str()],
        },
        CatalogReport { file_name: SITES_FILE, sources: vec![endpoints.sites.as_str()] },
        CatalogReport { file_name: PEOPLE_FILE, sources: vec![endpoints.people.as_str()] },
        CatalogReport { file_name: COMMITTEES_FILE, sources: vec![endpoints.committees.as_str()] },
        CatalogReport { file_name: PROTOCOLS_FILE, sources: vec![endpoints.protocols.as_str()] },
    ]
}

/// Fetch, merge, project and write one catalog table
pub fn dump_table<L: GraphLoader + ?Sized>(
    loader: &L,
    sink: &CsvSink,
    report: &CatalogReport<'_>,
) -> Result<ReportSummary> {
    let store = load_merged(loader, &report.sources)?;
    let table = project(&store);
    sink.write(&table, report.file_name)?;
    Ok(ReportSummary::new(report.file_name, table.len()))
}

/// Partition the combined biomarker graphs and write one table per category,
/// then the collection membership report.
pub fn dump_biomarkers<L: GraphLoader + ?Sized>(
    loader: &L,
    sink: &CsvSink,
    config: &ReportConfig,
) -> Result<Vec<ReportSummary>> {
    let endpoints = &config.endpoints;
    let sources = [endpoints.bmdb_biomarkers.as_str(), endpoints.bmdb_biomarker_organs.as_str()];
    let store = load_merged(loader, &sources)?;
    let partition = partition(&store, &TypeMap::biomarker_catalog())?;

    let mut tables = vec![
        (Category::Biomarker, BIOMARKERS_FILE),
        (Category::BiomarkerOrganStudyData, BIOMARKER_ORGAN_STUDY_DATA_FILE),
        (Category::BiomarkerOrganData, BIOMARKER_ORGAN_DATA_FILE),
    ];
    if config.write_sensitivity_data {
        tables.push((Category::SensitivityData, SENSITIVITY_DATA_FILE));
    } else {
        info!(
            "Skipping {} ({} sensitivity data subjects)",
            SENSITIVITY_DATA_FILE,
            partition.get(Category::SensitivityData).len()
        );
    }
    tables.push((Category::BiomarkerStudyData, BIOMARKER_STUDIES_FILE));

    let mut summaries = Vec::with_capacity(tables.len() + 1);
    for (category, file_name) in tables {
        let table = project(partition.get(category));
        sink.write(&table, file_name)?;
        summaries.push(ReportSummary::new(file_name, table.len()));
    }

    let collections = collections_table(partition.get(Category::Collection));
    sink.write(&collections, COLLECTIONS_FILE)?;
    summaries.push(ReportSummary::new(COLLECTIONS_FILE, collections.len()));

    Ok(summaries)
}

/// Write every catalog and biomarker report in sequence.
///
/// Stops at the first failure; files written before it stay on disk.
pub fn run_csv_reports<L: GraphLoader + ?Sized>(loader: &L, config: &ReportConfig) -> Result<Vec<ReportSummary>> {
    let sink = CsvSink::new(config.output_dir.clone());
    let mut summaries = Vec::new();

    for report in catalog_reports(config) {
        summaries.push(dump_table(loader, &sink, &report)?);
    }
    summaries.extend(dump_biomarkers(loader, &sink, config)?);

    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publications_overlay_order() {
        let config = ReportConfig::default();
        let reports = catalog_reports(&config);
        let publications = reports.iter().find(|r| r.file_name == PUBLICATIONS_FILE).unwrap();

        // expo publications are applied last and win
        assert_eq!(
            publications.sources,
            vec![config.endpoints.bmdb_publications.as_str(), config.endpoints.publications.as_str()]
        );
    }
}

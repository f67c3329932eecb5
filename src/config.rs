//! Configuration structures for report runs
//!
//! Nothing is read from files or the environment. Defaults point at the
//! production endpoints; the binaries only override the output directory and
//! the TLS and sensitivity switches from their command line.

use std::path::PathBuf;

/// Source URIs of every graph the reports read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub body_systems: String,
    pub diseases: String,
    pub publications: String,
    pub sites: String,
    pub people: String,
    pub committees: String,
    pub protocols: String,
    /// Science data collections (LabCAS)
    pub science_data: String,
    pub bmdb_biomarkers: String,
    /// Biomarker-organ and biomarker study records
    pub bmdb_biomarker_organs: String,
    pub bmdb_publications: String,
}

/// Cancer Data Expo base URL
pub const CANCER_DATA_EXPO_BASE_URL: &str = "https://edrn.jpl.nasa.gov/cancerdataexpo";

/// Biomarker database RDF base URL
pub const BMDB_BASE_URL: &str = "https://bmdb.jpl.nasa.gov/rdf";

impl Endpoints {
    /// Build the endpoint set for an alternate pair of base URLs
    pub fn with_bases(expo_base: &str, bmdb_base: &str) -> Self {
        let expo_base = expo_base.trim_end_matches('/');
        let bmdb_base = bmdb_base.trim_end_matches('/');
        let expo = |name: &str| format!("{}/rdf-data/{}/@@rdf", expo_base, name);
        let bmdb = |name: &str| format!("{}/{}", bmdb_base, name);
        Self {
            body_systems: expo("body-systems"),
            diseases: expo("diseases"),
            publications: expo("publications"),
            sites: expo("sites"),
            people: expo("registered-person"),
            committees: expo("committees"),
            protocols: expo("protocols"),
            science_data: expo("labcas"),
            bmdb_biomarkers: bmdb("biomarkers"),
            bmdb_biomarker_organs: bmdb("biomarker-organs"),
            bmdb_publications: bmdb("publications"),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_bases(CANCER_DATA_EXPO_BASE_URL, BMDB_BASE_URL)
    }
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub endpoints: Endpoints,
    /// Directory receiving the CSV artifacts
    pub output_dir: PathBuf,
    /// Skip TLS certificate verification when fetching graphs
    pub accept_invalid_certs: bool,
    /// Also write sensitivity-data.csv from the biomarker partition
    pub write_sensitivity_data: bool,
    /// Per-request timeout for graph fetches
    pub timeout_secs: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            output_dir: PathBuf::from("."),
            accept_invalid_certs: false,
            write_sensitivity_data: false,
            timeout_secs: 120,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.body_systems,
            "https://edrn.jpl.nasa.gov/cancerdataexpo/rdf-data/body-systems/@@rdf"
        );
        assert_eq!(
            endpoints.science_data,
            "https://edrn.jpl.nasa.gov/cancerdataexpo/rdf-data/labcas/@@rdf"
        );
        assert_eq!(endpoints.bmdb_biomarker_organs, "https://bmdb.jpl.nasa.gov/rdf/biomarker-organs");
    }

    #[test]
    fn test_with_bases_trims_trailing_slash() {
        let endpoints = Endpoints::with_bases("file:///tmp/expo/", "file:///tmp/bmdb/");
        assert_eq!(endpoints.people, "file:///tmp/expo/rdf-data/registered-person/@@rdf");
        assert_eq!(endpoints.bmdb_publications, "file:///tmp/bmdb/publications");
    }

    #[test]
    fn test_report_config_default() {
        let config = ReportConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(!config.accept_invalid_certs);
        assert!(!config.write_sensitivity_data);
    }
}

//! IRIs of the RDF and EDRN vocabulary terms the reports depend on

pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const RDF_BAG: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Bag";

pub const DC_TITLE: &str = "http://purl.org/dc/terms/title";

/// Biomarker database schema namespace
pub const BMDB_NS: &str = "http://edrn.nci.nih.gov/rdf/rdfs/bmdb-1.0.0#";

pub const BMDB_BIOMARKER: &str = "http://edrn.nci.nih.gov/rdf/rdfs/bmdb-1.0.0#Biomarker";
pub const BMDB_BIOMARKER_ORGAN_STUDY_DATA: &str =
    "http://edrn.nci.nih.gov/rdf/rdfs/bmdb-1.0.0#BiomarkerOrganStudyData";
pub const BMDB_BIOMARKER_ORGAN_DATA: &str =
    "http://edrn.nci.nih.gov/rdf/rdfs/bmdb-1.0.0#BiomarkerOrganData";
pub const BMDB_SENSITIVITY_DATA: &str =
    "http://edrn.nci.nih.gov/rdf/rdfs/bmdb-1.0.0#SensitivityData";
pub const BMDB_BIOMARKER_STUDY_DATA: &str =
    "http://edrn.nci.nih.gov/rdf/rdfs/bmdb-1.0.0#BiomarkerStudyData";

/// Link from a biomarker study record to the protocol it studied
pub const BMDB_REFERENCES_STUDY: &str =
    "http://edrn.nci.nih.gov/rdf/rdfs/bmdb-1.0.0#referencesStudy";

/// Link from a science data collection to its protocol
pub const EDRN_PROTOCOL: &str = "http://edrn.nci.nih.gov/rdf/schema.rdf#protocol";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_live_in_their_namespaces() {
        for term in [RDF_TYPE, RDF_BAG] {
            assert!(term.starts_with(RDF_NS), "{} outside rdf namespace", term);
        }
        for term in [
            BMDB_BIOMARKER,
            BMDB_BIOMARKER_ORGAN_STUDY_DATA,
            BMDB_BIOMARKER_ORGAN_DATA,
            BMDB_SENSITIVITY_DATA,
            BMDB_BIOMARKER_STUDY_DATA,
            BMDB_REFERENCES_STUDY,
        ] {
            assert!(term.starts_with(BMDB_NS), "{} outside bmdb namespace", term);
        }
    }
}

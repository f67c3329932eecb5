//! Protocols that have science data but no biomarker coverage.
//!
//! Pipeline over three stores:
//! 1. title of every protocol in the protocol catalog
//! 2. minus protocols referenced by a biomarker study
//! 3. restricted to protocols referenced by a science data collection
//! 4. stably sorted by title

use std::collections::{BTreeMap, HashSet};

use crate::core::vocab;
use crate::projection::Table;
use crate::store::StatementStore;

/// Title used when a protocol has none
pub const UNKNOWN_TITLE: &str = "UNKNOWN";

pub const PROTOCOL_URI_HEADER: &str = "Protocol URI";
pub const TITLE_HEADER: &str = "Title";

/// A protocol with science data and no biomarker study
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolGap {
    pub uri: String,
    pub title: String,
}

/// Map every protocol subject to its first title, or [`UNKNOWN_TITLE`]
pub fn protocol_titles(protocols: &StatementStore) -> BTreeMap<String, String> {
    protocols
        .iter()
        .map(|(subject, predicates)| {
            let title = predicates
                .first(vocab::DC_TITLE)
                .map_or_else(|| UNKNOWN_TITLE.to_string(), |title| title.as_str().to_string());
            (subject.to_string(), title)
        })
        .collect()
}

/// IRIs referenced through `predicate` by any subject of `store`, in subject
/// order. Literal values are not references and are skipped.
fn referenced_iris<'a>(store: &'a StatementStore, predicate: &'a str) -> impl Iterator<Item = &'a str> {
    store
        .iter()
        .flat_map(move |(_, predicates)| predicates.get(predicate))
        .filter_map(|object| object.as_iri())
}

/// Drop every protocol a biomarker study references.
///
/// References to protocols that are not in `titles` are ignored.
pub fn remove_biomarker_protocols(titles: &mut BTreeMap<String, String>, biomarker_studies: &StatementStore) {
    for protocol in referenced_iris(biomarker_studies, vocab::BMDB_REFERENCES_STUDY) {
        titles.remove(protocol);
    }
}

/// Protocols still in `titles` that a science data collection references,
/// in first-reference order with duplicates collapsed.
pub fn protocols_with_data(titles: &BTreeMap<String, String>, science_data: &StatementStore) -> Vec<ProtocolGap> {
    let mut seen = HashSet::new();
    let mut with_data = Vec::new();
    for protocol in referenced_iris(science_data, vocab::EDRN_PROTOCOL) {
        let Some(title) = titles.get(protocol) else {
            continue;
        };
        if seen.insert(protocol) {
            with_data.push(ProtocolGap { uri: protocol.to_string(), title: title.clone() });
        }
    }
    with_data
}

/// Run the whole pipeline; equal titles keep their first-reference order.
pub fn find_protocol_gaps(
    protocols: &StatementStore,
    biomarker_studies: &StatementStore,
    science_data: &StatementStore,
) -> Vec<ProtocolGap> {
    let mut titles = protocol_titles(protocols);
    remove_biomarker_protocols(&mut titles, biomarker_studies);
    let mut gaps = protocols_with_data(&titles, science_data);
    gaps.sort_by(|a, b| a.title.cmp(&b.title));
    gaps
}

/// Two-column table of protocol IRI and title in the given order
pub fn gaps_table(gaps: &[ProtocolGap]) -> Table {
    let mut table = Table::new([PROTOCOL_URI_HEADER, TITLE_HEADER]);
    for gap in gaps {
        table.push_row(vec![gap.uri.clone(), gap.title.clone()]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Object, Triple};

    #[test]
    fn test_literal_reference_is_not_a_protocol() {
        let protocols = StatementStore::build(vec![Triple::new(
            "urn:p1",
            vocab::DC_TITLE,
            Object::literal("Alpha"),
        )]);
        let studies = StatementStore::build(vec![Triple::new(
            "urn:study",
            vocab::BMDB_REFERENCES_STUDY,
            Object::literal("urn:p1"),
        )]);

        let mut titles = protocol_titles(&protocols);
        remove_biomarker_protocols(&mut titles, &studies);
        assert!(titles.contains_key("urn:p1"));
    }

    #[test]
    fn test_duplicate_references_collapse() {
        let protocols = StatementStore::build(vec![Triple::new(
            "urn:p1",
            vocab::DC_TITLE,
            Object::literal("Alpha"),
        )]);
        let science = StatementStore::build(vec![
            Triple::new("urn:c1", vocab::EDRN_PROTOCOL, Object::iri("urn:p1")),
            Triple::new("urn:c2", vocab::EDRN_PROTOCOL, Object::iri("urn:p1")),
        ]);

        let with_data = protocols_with_data(&protocol_titles(&protocols), &science);
        assert_eq!(with_data.len(), 1);
    }
}

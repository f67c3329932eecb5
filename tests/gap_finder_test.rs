use expo_reports::core::{vocab, Object, Triple};
use expo_reports::reports::gap_finder::{gaps_table, protocol_titles};
use expo_reports::reports::{find_protocol_gaps, ProtocolGap, UNKNOWN_TITLE};
use expo_reports::store::StatementStore;

fn title(protocol: &str, title: &str) -> Triple {
    Triple::new(protocol, vocab::DC_TITLE, Object::literal(title))
}

fn study(subject: &str, protocol: &str) -> Triple {
    Triple::new(subject, vocab::BMDB_REFERENCES_STUDY, Object::iri(protocol))
}

fn collection(subject: &str, protocol: &str) -> Triple {
    Triple::new(subject, vocab::EDRN_PROTOCOL, Object::iri(protocol))
}

fn gap(uri: &str, title: &str) -> ProtocolGap {
    ProtocolGap { uri: uri.to_string(), title: title.to_string() }
}

#[test]
fn test_gaps_exclude_biomarker_protocols() {
    let protocols = StatementStore::build(vec![
        title("urn:P1", "Alpha"),
        title("urn:P2", "Beta"),
        title("urn:P3", "Gamma"),
    ]);
    let studies = StatementStore::build(vec![study("urn:S1", "urn:P2")]);
    let science = StatementStore::build(vec![
        collection("urn:C1", "urn:P3"),
        collection("urn:C2", "urn:P1"),
        collection("urn:C3", "urn:P2"),
    ]);

    let gaps = find_protocol_gaps(&protocols, &studies, &science);
    assert_eq!(gaps, vec![gap("urn:P1", "Alpha"), gap("urn:P3", "Gamma")]);
}

#[test]
fn test_untitled_protocol_is_unknown() {
    let protocols = StatementStore::build(vec![Triple::new(
        "urn:P9",
        "urn:abstract",
        Object::literal("no title here"),
    )]);
    let science = StatementStore::build(vec![collection("urn:C1", "urn:P9")]);

    let titles = protocol_titles(&protocols);
    assert_eq!(titles.get("urn:P9").map(String::as_str), Some(UNKNOWN_TITLE));

    let gaps = find_protocol_gaps(&protocols, &StatementStore::new(), &science);
    assert_eq!(gaps, vec![gap("urn:P9", "UNKNOWN")]);
}

#[test]
fn test_unknown_references_are_ignored() {
    let protocols = StatementStore::build(vec![title("urn:P1", "Alpha")]);
    let studies = StatementStore::build(vec![study("urn:S1", "urn:P404")]);
    let science = StatementStore::build(vec![collection("urn:C1", "urn:P405"), collection("urn:C2", "urn:P1")]);

    let gaps = find_protocol_gaps(&protocols, &studies, &science);
    assert_eq!(gaps, vec![gap("urn:P1", "Alpha")]);
}

#[test]
fn test_equal_titles_keep_reference_order() {
    let protocols = StatementStore::build(vec![
        title("urn:P1", "Same"),
        title("urn:P2", "Same"),
        title("urn:P3", "Earlier"),
    ]);
    let science = StatementStore::build(vec![
        collection("urn:C1", "urn:P2"),
        collection("urn:C2", "urn:P1"),
        collection("urn:C3", "urn:P3"),
    ]);

    let gaps = find_protocol_gaps(&protocols, &StatementStore::new(), &science);
    assert_eq!(gaps, vec![gap("urn:P3", "Earlier"), gap("urn:P2", "Same"), gap("urn:P1", "Same")]);
}

#[test]
fn test_every_referenced_protocol_counts() {
    let protocols = StatementStore::build(vec![title("urn:P1", "Alpha"), title("urn:P2", "Beta")]);
    let studies = StatementStore::build(vec![study("urn:S1", "urn:P1"), study("urn:S1", "urn:P2")]);
    let science = StatementStore::build(vec![collection("urn:C1", "urn:P1"), collection("urn:C1", "urn:P2")]);

    assert!(find_protocol_gaps(&protocols, &studies, &science).is_empty());
}

#[test]
fn test_gaps_table() {
    let table = gaps_table(&[gap("urn:P1", "Alpha")]);
    assert_eq!(table.header(), &["Protocol URI", "Title"]);
    assert_eq!(table.rows(), &[vec!["urn:P1".to_string(), "Alpha".to_string()]]);
}

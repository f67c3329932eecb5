use std::collections::BTreeSet;

use crate::core::vocab;
use crate::core::Object;
use crate::store::StatementStore;

/// Header of the first column of a projected table
pub const SUBJECT_HEADER: &str = "Subject";

/// Separator placed between the values of a multi-valued cell
pub const VALUE_SEPARATOR: &str = ", ";

/// A header plus ordered rows of string cells, ready for a CSV sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { header: header.into_iter().map(Into::into).collect(), rows: Vec::new() }
    }

    /// Append a row. Rows must be as wide as the header.
    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.header.len(), "row width does not match header");
        self.rows.push(row);
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows, header excluded
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Join the display form of every object in encounter order
pub fn join_objects(objects: &[Object]) -> String {
    objects.iter().map(Object::as_str).collect::<Vec<_>>().join(VALUE_SEPARATOR)
}

/// Flatten `store` into one row per subject and one column per predicate.
///
/// Columns are the union of all predicates except `rdf:type`, sorted by IRI.
/// Rows are sorted by subject IRI. A subject lacking a column's predicate gets
/// an empty cell. An empty store yields a header-only table.
pub fn project(store: &StatementStore) -> Table {
    let columns: BTreeSet<&str> = store
        .iter()
        .flat_map(|(_, predicates)| predicates.keys())
        .filter(|predicate| *predicate != vocab::RDF_TYPE)
        .collect();

    let mut table = Table::new(std::iter::once(SUBJECT_HEADER).chain(columns.iter().copied()));

    // store iteration is already in ascending subject order
    for (subject, predicates) in store.iter() {
        let mut row = Vec::with_capacity(columns.len() + 1);
        row.push(subject.to_string());
        row.extend(columns.iter().map(|column| join_objects(predicates.get(column))));
        table.push_row(row);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Triple;

    #[test]
    fn test_empty_store_projects_header_only() {
        let table = project(&StatementStore::new());
        assert_eq!(table.header(), &["Subject".to_string()]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_predicate_is_empty_cell() {
        let store = StatementStore::build(vec![
            Triple::new("urn:a", "urn:p1", Object::literal("x")),
            Triple::new("urn:b", "urn:p2", Object::literal("y")),
        ]);

        let table = project(&store);
        assert_eq!(table.header(), &["Subject", "urn:p1", "urn:p2"]);
        assert_eq!(table.rows()[0], vec!["urn:a", "x", ""]);
        assert_eq!(table.rows()[1], vec!["urn:b", "", "y"]);
    }
}

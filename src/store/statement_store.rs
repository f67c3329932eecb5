use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::core::{Object, Triple};

/// All statements about one subject: predicate IRI to its ordered object list.
///
/// Every predicate maps to a list even when the schema promises a single
/// value, callers pick `first` explicitly when they want one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicates {
    values: BTreeMap<String, Vec<Object>>,
}

impl Predicates {
    pub fn new() -> Self {
        Self { values: BTreeMap::new() }
    }

    /// Objects recorded for `predicate`, empty when the predicate is absent
    pub fn get(&self, predicate: &str) -> &[Object] {
        self.values.get(predicate).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first(&self, predicate: &str) -> Option<&Object> {
        self.get(predicate).first()
    }

    pub fn contains(&self, predicate: &str) -> bool {
        self.values.contains_key(predicate)
    }

    /// Append one object to the list of `predicate`
    pub fn push(&mut self, predicate: &str, object: Object) {
        self.values.entry(predicate.to_string()).or_default().push(object);
    }

    /// Replace the whole object list of `predicate`
    pub fn insert(&mut self, predicate: &str, objects: Vec<Object>) {
        self.values.insert(predicate.to_string(), objects);
    }

    /// Predicate IRIs in ascending string order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Object])> {
        self.values.iter().map(|(p, o)| (p.as_str(), o.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Statements of one or more graphs indexed by subject, then predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatementStore {
    subjects: BTreeMap<String, Predicates>,
}

impl StatementStore {
    pub const fn new() -> Self {
        Self { subjects: BTreeMap::new() }
    }

    /// Group `triples` by subject and predicate.
    ///
    /// Accepts any triples as-is; nothing is validated at this layer.
    pub fn build<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = Triple>,
    {
        let mut store = Self::new();
        for triple in triples {
            store.add(triple);
        }
        store
    }

    /// Record a single triple, appending to the subject's object list
    pub fn add(&mut self, triple: Triple) {
        let Triple { subject, predicate, object } = triple;
        self.subjects.entry(subject).or_default().push(&predicate, object);
    }

    /// Objects of (`subject`, `predicate`), empty when either is absent
    pub fn get(&self, subject: &str, predicate: &str) -> &[Object] {
        self.subjects.get(subject).map(|p| p.get(predicate)).unwrap_or(&[])
    }

    pub fn predicates(&self, subject: &str) -> Option<&Predicates> {
        self.subjects.get(subject)
    }

    pub fn contains_subject(&self, subject: &str) -> bool {
        self.subjects.contains_key(subject)
    }

    /// Subject IRIs in ascending string order
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Predicates)> {
        self.subjects.iter().map(|(s, p)| (s.as_str(), p))
    }

    /// Put a complete subject record in place, returning the one it replaced
    pub fn insert_subject(&mut self, subject: &str, predicates: Predicates) -> Option<Predicates> {
        self.subjects.insert(subject.to_string(), predicates)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Overlay `overlay` on top of `base` into a new store.
    ///
    /// A subject present in both takes the overlay's predicate map wholesale,
    /// predicates of the base record are not carried over. Neither input is
    /// modified.
    pub fn merge(base: &StatementStore, overlay: &StatementStore) -> StatementStore {
        let mut merged = base.clone();
        for (subject, predicates) in &overlay.subjects {
            merged.subjects.insert(subject.clone(), predicates.clone());
        }
        merged
    }

    /// Left fold of [`merge`](Self::merge) over `stores` in the given order,
    /// so the last store wins for any subject it contains.
    pub fn merge_all<'a, I>(stores: I) -> StatementStore
    where
        I: IntoIterator<Item = &'a StatementStore>,
    {
        stores.into_iter().fold(StatementStore::new(), |acc, next| StatementStore::merge(&acc, next))
    }
}

impl FromIterator<Triple> for StatementStore {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Self::build(iter)
    }
}

impl IntoIterator for StatementStore {
    type Item = (String, Predicates);
    type IntoIter = btree_map::IntoIter<String, Predicates>;

    fn into_iter(self) -> Self::IntoIter {
        self.subjects.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(s, p, Object::literal(o))
    }

    #[test]
    fn test_build_preserves_encounter_order_and_duplicates() {
        let store = StatementStore::build(vec![
            t("urn:s", "urn:p", "b"),
            t("urn:s", "urn:p", "a"),
            t("urn:s", "urn:p", "b"),
        ]);

        let values: Vec<&str> = store.get("urn:s", "urn:p").iter().map(Object::as_str).collect();
        assert_eq!(values, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_get_missing_is_empty() {
        let store = StatementStore::build(vec![t("urn:s", "urn:p", "x")]);

        assert!(store.get("urn:s", "urn:missing").is_empty());
        assert!(store.get("urn:missing", "urn:p").is_empty());
    }

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let base = StatementStore::build(vec![t("urn:s", "urn:p", "base")]);
        let overlay = StatementStore::build(vec![t("urn:s", "urn:q", "overlay")]);

        let merged = StatementStore::merge(&base, &overlay);

        assert_eq!(base.get("urn:s", "urn:p")[0].as_str(), "base");
        assert_eq!(overlay.get("urn:s", "urn:q")[0].as_str(), "overlay");
        assert!(merged.get("urn:s", "urn:p").is_empty());
    }
}

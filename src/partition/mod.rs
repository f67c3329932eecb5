//! Classification of subjects by their declared RDF type
//!
//! The biomarker endpoints serve a mix of resource kinds in one graph. Each
//! subject is routed to exactly one [`Category`] through a [`TypeMap`]; a
//! subject whose type is not in the map aborts the whole partition, since an
//! unseen type usually means the upstream schema changed.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::core::vocab;
use crate::store::StatementStore;

/// The closed set of resource kinds found in the biomarker graphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// An `rdf:Bag` grouping other resources
    Collection,
    Biomarker,
    BiomarkerOrganStudyData,
    BiomarkerOrganData,
    SensitivityData,
    BiomarkerStudyData,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Collection,
        Category::Biomarker,
        Category::BiomarkerOrganStudyData,
        Category::BiomarkerOrganData,
        Category::SensitivityData,
        Category::BiomarkerStudyData,
    ];

    /// The RDF type IRI that declares this category in the biomarker graphs
    pub fn type_iri(self) -> &'static str {
        match self {
            Category::Collection => vocab::RDF_BAG,
            Category::Biomarker => vocab::BMDB_BIOMARKER,
            Category::BiomarkerOrganStudyData => vocab::BMDB_BIOMARKER_ORGAN_STUDY_DATA,
            Category::BiomarkerOrganData => vocab::BMDB_BIOMARKER_ORGAN_DATA,
            Category::SensitivityData => vocab::BMDB_SENSITIVITY_DATA,
            Category::BiomarkerStudyData => vocab::BMDB_BIOMARKER_STUDY_DATA,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Collection => "collection",
            Category::Biomarker => "biomarker",
            Category::BiomarkerOrganStudyData => "biomarker organ study data",
            Category::BiomarkerOrganData => "biomarker organ data",
            Category::SensitivityData => "sensitivity data",
            Category::BiomarkerStudyData => "biomarker study data",
        };
        f.write_str(name)
    }
}

/// Errors raised while partitioning a store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("Unknown RDF object type \"{type_iri}\" for subject {subject}")]
    UnrecognizedType { subject: String, type_iri: String },

    #[error("Subject {subject} has no RDF type")]
    MissingType { subject: String },
}

/// Lookup from declared type IRI to category
#[derive(Debug, Clone, Default)]
pub struct TypeMap {
    categories: HashMap<String, Category>,
}

impl TypeMap {
    pub fn new() -> Self {
        Self { categories: HashMap::new() }
    }

    /// Every category keyed by its type IRI in the biomarker database schema
    pub fn biomarker_catalog() -> Self {
        let mut map = Self::new();
        for category in Category::ALL {
            map.insert(category.type_iri(), category);
        }
        map
    }

    pub fn insert(&mut self, type_iri: &str, category: Category) {
        self.categories.insert(type_iri.to_string(), category);
    }

    pub fn get(&self, type_iri: &str) -> Option<Category> {
        self.categories.get(type_iri).copied()
    }
}

/// Result of [`partition`]: one statement store per category.
///
/// Immutable once built; a category with no subjects reads as an empty store.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    buckets: BTreeMap<Category, StatementStore>,
}

impl Partition {
    pub fn get(&self, category: Category) -> &StatementStore {
        static EMPTY: StatementStore = StatementStore::new();
        self.buckets.get(&category).unwrap_or(&EMPTY)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &StatementStore)> {
        self.buckets.iter().map(|(c, s)| (*c, s))
    }

    /// Total number of subjects across all buckets
    pub fn subject_count(&self) -> usize {
        self.buckets.values().map(StatementStore::len).sum()
    }
}

/// Route every subject of `store` to the category of its first declared type.
///
/// Fails without producing any buckets if a subject has no type or a type
/// missing from `type_map`.
pub fn partition(store: &StatementStore, type_map: &TypeMap) -> Result<Partition, PartitionError> {
    let mut buckets: BTreeMap<Category, StatementStore> = BTreeMap::new();

    for (subject, predicates) in store.iter() {
        let declared = predicates
            .first(vocab::RDF_TYPE)
            .ok_or_else(|| PartitionError::MissingType { subject: subject.to_string() })?;

        let category = type_map.get(declared.as_str()).ok_or_else(|| {
            PartitionError::UnrecognizedType {
                subject: subject.to_string(),
                type_iri: declared.as_str().to_string(),
            }
        })?;

        buckets.entry(category).or_default().insert_subject(subject, predicates.clone());
    }

    for (category, bucket) in &buckets {
        debug!("Partitioned {} {} subjects", bucket.len(), category);
    }

    Ok(Partition { buckets })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Object, Triple};

    #[test]
    fn test_biomarker_catalog_covers_every_category() {
        let map = TypeMap::biomarker_catalog();
        for category in Category::ALL {
            assert_eq!(map.get(category.type_iri()), Some(category));
        }
        assert_eq!(map.get("http://example.org/Unknown"), None);
    }

    #[test]
    fn test_first_declared_type_wins() {
        let store = StatementStore::build(vec![
            Triple::new("urn:s", vocab::RDF_TYPE, Object::iri(vocab::BMDB_BIOMARKER)),
            Triple::new("urn:s", vocab::RDF_TYPE, Object::iri("http://example.org/Unknown")),
        ]);

        let partition = partition(&store, &TypeMap::biomarker_catalog()).unwrap();
        assert!(partition.get(Category::Biomarker).contains_subject("urn:s"));
    }

    #[test]
    fn test_empty_bucket_reads_as_empty_store() {
        let partition = partition(&StatementStore::new(), &TypeMap::biomarker_catalog()).unwrap();
        assert!(partition.get(Category::SensitivityData).is_empty());
        assert_eq!(partition.subject_count(), 0);
    }
}

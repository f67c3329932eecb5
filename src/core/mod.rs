//! Core data structures shared by every stage of report generation

use std::fmt;

/// The object position of a triple.
///
/// Subjects and predicates are kept as plain IRI strings, objects keep enough
/// of their RDF term kind that set lookups can tell an IRI reference from a
/// literal that happens to spell the same text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Object {
    Iri(String),
    BlankNode(String),
    Literal { value: String, datatype: Option<String>, language: Option<String> },
}

impl Object {
    pub fn iri(iri: &str) -> Self {
        Object::Iri(iri.to_string())
    }

    /// Plain string literal with no datatype or language tag
    pub fn literal(value: &str) -> Self {
        Object::Literal { value: value.to_string(), datatype: None, language: None }
    }

    /// Returns the IRI if this object is a reference to a named resource
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Object::Iri(iri) => Some(iri.as_str()),
            _ => None,
        }
    }

    /// The display form used in report cells: the IRI, the blank node id or
    /// the literal's lexical value.
    pub fn as_str(&self) -> &str {
        match self {
            Object::Iri(iri) => iri,
            Object::BlankNode(id) => id,
            Object::Literal { value, .. } => value,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Object::Literal { .. })
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single subject-predicate-object statement as handed over by a graph loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Object,
}

impl Triple {
    pub fn new(subject: &str, predicate: &str, object: Object) -> Self {
        Self { subject: subject.to_string(), predicate: predicate.to_string(), object }
    }
}

pub mod vocab;

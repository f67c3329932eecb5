//! In-memory statement index built from fetched triples
//!
//! A [`StatementStore`] groups the objects of a graph by subject, then by
//! predicate. Object lists keep the order the triples were encountered in and
//! keep duplicates. Stores from several endpoints are combined with
//! [`StatementStore::merge`], where the overlay replaces whole subject records.

pub mod statement_store;

pub use statement_store::{Predicates, StatementStore};

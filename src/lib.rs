//! # Expo Reports
//!
//! Expo Reports flattens the RDF graphs of the EDRN Cancer Data Expo and the
//! Biomarker Database into CSV reports: one row per subject, one column per
//! predicate. A second report lists protocols that have science data but no
//! biomarker studies.
//!
//! ## Pipeline
//!
//! - [`loader`] fetches a graph and parses it into [`core::Triple`]s
//! - [`store`] indexes triples by subject and predicate and overlays stores
//! - [`partition`] routes biomarker subjects to categories by RDF type
//! - [`projection`] turns a store into a [`projection::Table`] and orders bag members
//! - [`sink`] writes tables as CSV
//! - [`reports`] drives the two report commands
//!
//! ## Example
//!
//! ```rust
//! use expo_reports::core::{Object, Triple};
//! use expo_reports::projection::project;
//! use expo_reports::store::StatementStore;
//!
//! let store = StatementStore::build(vec![
//!     Triple::new("http://example.org/p1", "http://purl.org/dc/terms/title", Object::literal("Alpha")),
//! ]);
//! let table = project(&store);
//! assert_eq!(table.header(), &["Subject", "http://purl.org/dc/terms/title"]);
//! assert_eq!(table.rows()[0], vec!["http://example.org/p1", "Alpha"]);
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::new_without_default)]

/// Core data structures and vocabulary
pub mod core;

/// Endpoint and output configuration
pub mod config;

pub mod error;

/// Graph loading and RDF parsing
pub mod loader;

pub mod logging;

pub mod partition;

pub mod projection;

/// Report drivers
pub mod reports;

/// CSV output
pub mod sink;

/// Statement index and graph merging
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};

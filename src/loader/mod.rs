//! Graph loading: the boundary between remote RDF documents and triples
//!
//! Report drivers only see the [`GraphLoader`] trait. [`HttpGraphLoader`]
//! fetches over HTTP(S) or reads `file://` URIs, [`MemoryGraphLoader`] serves
//! graphs registered in memory.

pub mod http;
pub mod parse;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::Triple;
use crate::error::{Error, Result};

pub use http::HttpGraphLoader;
pub use parse::{format_for_media_type, format_for_path, parse_graph};

/// Produces the full graph published at a URI.
///
/// Failures are fatal to the report that asked for the graph; loaders do not
/// retry.
pub trait GraphLoader {
    fn load(&self, uri: &str) -> Result<Vec<Triple>>;
}

impl<L: GraphLoader + ?Sized> GraphLoader for &L {
    fn load(&self, uri: &str) -> Result<Vec<Triple>> {
        (**self).load(uri)
    }
}

/// Loader serving graphs registered up front, recording every request.
#[derive(Debug, Default)]
pub struct MemoryGraphLoader {
    graphs: HashMap<String, Vec<Triple>>,
    requests: RefCell<Vec<String>>,
}

impl MemoryGraphLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the triples returned for `uri`
    pub fn with_graph(mut self, uri: &str, triples: Vec<Triple>) -> Self {
        self.graphs.insert(uri.to_string(), triples);
        self
    }

    pub fn insert(&mut self, uri: &str, triples: Vec<Triple>) {
        self.graphs.insert(uri.to_string(), triples);
    }

    /// URIs requested so far, in request order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl GraphLoader for MemoryGraphLoader {
    fn load(&self, uri: &str) -> Result<Vec<Triple>> {
        self.requests.borrow_mut().push(uri.to_string());
        self.graphs.get(uri).cloned().ok_or_else(|| Error::UnknownSource(uri.to_string()))
    }
}

//! Parsing of fetched RDF documents into triples with Oxigraph.
//!
//! Named graphs are folded into one graph; the reports never distinguish them.
//! Blank node labels are replaced with fresh ones on every parse, so two
//! documents that both use `_:b0` never share a subject.

use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::model::{Literal, NamedOrBlankNode, Quad, Term};

use crate::core::{Object, Triple};
use crate::error::{Error, Result};

const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// RDF syntax named by a `Content-Type` value, parameters ignored
pub fn format_for_media_type(content_type: &str) -> Option<RdfFormat> {
    let media_type = content_type.split(';').next().unwrap_or_default().trim();
    if media_type.is_empty() {
        return None;
    }
    RdfFormat::from_media_type(media_type)
}

/// RDF syntax guessed from the file extension of a path or URI
pub fn format_for_path(path: &str) -> Option<RdfFormat> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let (_, extension) = file_name.rsplit_once('.')?;
    RdfFormat::from_extension(extension)
}

/// Parse `data` in `format`, resolving relative IRIs against `base_iri`.
///
/// Any syntax error aborts the whole parse; a partially read graph would
/// silently drop rows from the reports.
pub fn parse_graph(data: &[u8], format: RdfFormat, base_iri: &str) -> Result<Vec<Triple>> {
    let parser = RdfParser::from_format(format)
        .with_base_iri(base_iri)
        .map_err(|e| Error::Parse { uri: base_iri.to_string(), message: e.to_string() })?
        .rename_blank_nodes();

    let mut triples = Vec::new();
    for quad in parser.for_reader(data) {
        let quad = quad.map_err(|e| Error::Parse { uri: base_iri.to_string(), message: e.to_string() })?;
        triples.push(quad_to_triple(quad));
    }
    Ok(triples)
}

fn quad_to_triple(quad: Quad) -> Triple {
    let subject = match quad.subject {
        NamedOrBlankNode::NamedNode(node) => node.into_string(),
        NamedOrBlankNode::BlankNode(node) => node.into_string(),
    };
    Triple { subject, predicate: quad.predicate.as_str().to_string(), object: term_to_object(quad.object) }
}

fn term_to_object(term: Term) -> Object {
    match term {
        Term::NamedNode(node) => Object::Iri(node.as_str().to_string()),
        Term::BlankNode(node) => Object::BlankNode(node.as_str().to_string()),
        Term::Literal(literal) => literal_to_object(&literal),
        #[allow(unreachable_patterns)]
        other => Object::literal(&other.to_string()),
    }
}

fn literal_to_object(literal: &Literal) -> Object {
    let datatype = literal.datatype().as_str();
    let datatype = if datatype == XSD_STRING || datatype == RDF_LANG_STRING {
        None
    } else {
        Some(datatype.to_string())
    };
    Object::Literal {
        value: literal.value().to_string(),
        datatype,
        language: literal.language().map(str::to_string),
    }
}

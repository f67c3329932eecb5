//! Blocking loader for graphs published over HTTP(S) or stored on disk

use std::time::Duration;

use oxigraph::io::RdfFormat;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::{debug, info};

use super::parse::{format_for_media_type, format_for_path, parse_graph};
use super::GraphLoader;
use crate::config::ReportConfig;
use crate::core::Triple;
use crate::error::{Error, Result};

const ACCEPT_RDF: &str =
    "application/rdf+xml, text/turtle;q=0.9, application/n-triples;q=0.8, */*;q=0.1";

/// Loader for the production endpoints.
///
/// Every Cancer Data Expo and BMDB endpoint serves RDF/XML, which is assumed
/// when neither the response nor the URI names a syntax.
pub struct HttpGraphLoader {
    client: Client,
    accept_invalid_certs: bool,
}

impl HttpGraphLoader {
    pub fn new(config: &ReportConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .user_agent(concat!("expo-reports/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Config(format!("Cannot build HTTP client: {}", e)))?;

        Ok(HttpGraphLoader { client, accept_invalid_certs: config.accept_invalid_certs })
    }

    fn fetch(&self, uri: &str) -> Result<(Vec<u8>, Option<String>)> {
        let response = self
            .client
            .get(uri)
            .header(ACCEPT, ACCEPT_RDF)
            .send()
            .map_err(|source| self.send_error(uri, source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus { uri: uri.to_string(), status: status.as_u16() });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().map_err(|source| Error::Fetch { uri: uri.to_string(), source })?;

        Ok((body.to_vec(), content_type))
    }

    fn send_error(&self, uri: &str, source: reqwest::Error) -> Error {
        if !self.accept_invalid_certs && is_certificate_error(&source) {
            Error::Certificate { uri: uri.to_string(), source }
        } else {
            Error::Fetch { uri: uri.to_string(), source }
        }
    }
}

/// Whether any error in the source chain reports a rejected certificate.
///
/// reqwest exposes no dedicated predicate for this, the TLS backend only
/// names it in its message.
fn is_certificate_error(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        if err.to_string().to_ascii_lowercase().contains("certificate") {
            return true;
        }
        current = err.source();
    }
    false
}

impl GraphLoader for HttpGraphLoader {
    fn load(&self, uri: &str) -> Result<Vec<Triple>> {
        info!("Loading graph {}", uri);

        let (data, format) = if let Some(path) = uri.strip_prefix("file://") {
            (std::fs::read(path)?, format_for_path(path))
        } else if uri.starts_with("http://") || uri.starts_with("https://") {
            let (data, content_type) = self.fetch(uri)?;
            let format = content_type
                .as_deref()
                .and_then(format_for_media_type)
                .or_else(|| format_for_path(uri));
            (data, format)
        } else {
            return Err(Error::UnknownSource(uri.to_string()));
        };

        let format = format.unwrap_or(RdfFormat::RdfXml);
        let triples = parse_graph(&data, format, uri)?;
        debug!("Parsed {} triples from {} ({} bytes, {:?})", triples.len(), uri, data.len(), format);
        Ok(triples)
    }
}

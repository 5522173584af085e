//! Shared bundle extraction.
//!
//! Both the connection builder and the property exporter start here: read
//! the archive, then resolve keyspace from `config.json` and the endpoint from
//! `cqlshrc`.

use crate::Result;
use ec_bundle::{read_bundle, BundleMember, RawBundleContents};
use ec_config::{ConfigExtractor, Endpoint, EndpointExtractor, KeyspaceExtractor};
use std::path::Path;
use tracing::info;

/// Values resolved from a bundle, with the raw member bytes kept for TLS.
#[derive(Debug, Clone)]
pub struct ParsedBundle {
    pub endpoint: Endpoint,
    pub keyspace: String,
    pub contents: RawBundleContents,
}

impl ParsedBundle {
    /// Raw client certificate PEM (empty if absent).
    pub fn cert_pem(&self) -> &[u8] {
        self.contents.get(BundleMember::Cert)
    }

    /// Raw client key PEM (empty if absent).
    pub fn key_pem(&self) -> &[u8] {
        self.contents.get(BundleMember::Key)
    }

    /// Raw CA chain PEM (empty if absent).
    pub fn ca_pem(&self) -> &[u8] {
        self.contents.get(BundleMember::CaCert)
    }
}

/// Read and parse the bundle at `path`.
pub fn parse_bundle(path: &Path) -> Result<ParsedBundle> {
    let contents = read_bundle(path)?;
    let parsed = parse_contents(contents)?;

    info!(
        path = %path.display(),
        endpoint = %parsed.endpoint,
        keyspace = %parsed.keyspace,
        "Bundle parsed"
    );

    Ok(parsed)
}

/// Parse already-extracted bundle members.
///
/// `config.json` is parsed first, so its errors win over `cqlshrc` errors.
pub fn parse_contents(contents: RawBundleContents) -> Result<ParsedBundle> {
    let keyspace = extract_member(&KeyspaceExtractor, &contents)?.keyspace;
    let endpoint = extract_member(&EndpointExtractor, &contents)?;

    Ok(ParsedBundle {
        endpoint,
        keyspace,
        contents,
    })
}

fn extract_member<E: ConfigExtractor>(
    extractor: &E,
    contents: &RawBundleContents,
) -> Result<E::Output> {
    let data = BundleMember::from_file_name(extractor.source())
        .map(|member| contents.get(member))
        .unwrap_or_default();
    Ok(extractor.extract(data)?)
}

//! Flat property export of a secure connect bundle.
//!
//! The same values the connection builder resolves, rendered as six string
//! properties so they can be stored in environment variables or secrets
//! managers. Certificate material is base64 (standard alphabet, padded).

use crate::extract::{parse_bundle, ParsedBundle};
use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Names of the exported properties.
pub const PROPERTY_HOSTNAME: &str = "hostname";
pub const PROPERTY_PORT: &str = "port";
pub const PROPERTY_KEYSPACE: &str = "keyspace";
pub const PROPERTY_CERT: &str = "certPEMBlock";
pub const PROPERTY_KEY: &str = "keyPemBlock";
pub const PROPERTY_CA_CERTS: &str = "pemCerts";

/// Every property name, in output order.
pub const PROPERTY_NAMES: [&str; 6] = [
    PROPERTY_HOSTNAME,
    PROPERTY_PORT,
    PROPERTY_KEYSPACE,
    PROPERTY_CERT,
    PROPERTY_KEY,
    PROPERTY_CA_CERTS,
];

/// The six exported connection properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleProperties {
    pub hostname: String,
    /// Decimal port.
    pub port: String,
    pub keyspace: String,
    /// Base64 client certificate PEM.
    #[serde(rename = "certPEMBlock")]
    pub cert_pem_block: String,
    /// Base64 client key PEM.
    #[serde(rename = "keyPemBlock")]
    pub key_pem_block: String,
    /// Base64 CA chain PEM.
    #[serde(rename = "pemCerts")]
    pub pem_certs: String,
}

impl BundleProperties {
    /// Render parsed bundle values. Absent certificate members encode as `""`.
    pub fn from_parsed(parsed: &ParsedBundle) -> Self {
        Self {
            hostname: parsed.endpoint.hostname.clone(),
            port: parsed.endpoint.port.to_string(),
            keyspace: parsed.keyspace.clone(),
            cert_pem_block: encode_property(parsed.cert_pem()),
            key_pem_block: encode_property(parsed.key_pem()),
            pem_certs: encode_property(parsed.ca_pem()),
        }
    }

    /// Rebuild from a string map; every property must be present.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let get = |name: &'static str| {
            map.get(name).cloned().ok_or_else(|| Error::Validation {
                field: name,
                reason: "property is missing".to_string(),
            })
        };

        Ok(Self {
            hostname: get(PROPERTY_HOSTNAME)?,
            port: get(PROPERTY_PORT)?,
            keyspace: get(PROPERTY_KEYSPACE)?,
            cert_pem_block: get(PROPERTY_CERT)?,
            key_pem_block: get(PROPERTY_KEY)?,
            pem_certs: get(PROPERTY_CA_CERTS)?,
        })
    }

    /// `(name, value)` pairs in [`PROPERTY_NAMES`] order.
    pub fn pairs(&self) -> [(&'static str, &str); 6] {
        [
            (PROPERTY_HOSTNAME, self.hostname.as_str()),
            (PROPERTY_PORT, self.port.as_str()),
            (PROPERTY_KEYSPACE, self.keyspace.as_str()),
            (PROPERTY_CERT, self.cert_pem_block.as_str()),
            (PROPERTY_KEY, self.key_pem_block.as_str()),
            (PROPERTY_CA_CERTS, self.pem_certs.as_str()),
        ]
    }

    /// Flat string map with exactly the six property names as keys.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.pairs()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }
}

/// Extract the bundle at `path` as flat properties.
pub fn extract_properties(path: &Path) -> Result<BundleProperties> {
    Ok(BundleProperties::from_parsed(&parse_bundle(path)?))
}

/// Base64-encode certificate material.
pub fn encode_property(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a base64 certificate property, naming the field on failure.
pub fn decode_property(field: &'static str, value: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(value)
        .map_err(|source| Error::Encoding { field, source })
}

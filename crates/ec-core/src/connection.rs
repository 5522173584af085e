//! Connection info resolved from a secure connect bundle.

use crate::extract::{parse_bundle, parse_contents, ParsedBundle};
use crate::properties::{decode_property, BundleProperties};
use crate::tls::TlsConfig;
use crate::{Error, Result};
use ec_bundle::RawBundleContents;
use std::path::Path;
use tracing::info;

/// Everything needed to open a mutual-TLS session to one database.
///
/// Construction either yields a complete value or fails; there is no
/// partially-populated state.
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    hostname: String,
    port: u16,
    keyspace: String,
    tls: TlsConfig,
}

impl ConnectionInfo {
    /// Build from the bundle at `path`.
    pub fn from_bundle(path: &Path) -> Result<Self> {
        Self::from_parsed(&parse_bundle(path)?)
    }

    /// Build from members already read out of an archive.
    pub fn from_contents(contents: RawBundleContents) -> Result<Self> {
        Self::from_parsed(&parse_contents(contents)?)
    }

    /// Build from values previously exported with
    /// [`extract_properties`](crate::properties::extract_properties).
    ///
    /// `port` is decimal text and the three certificate fields are base64.
    pub fn from_properties(
        hostname: &str,
        port: &str,
        keyspace: &str,
        cert_b64: &str,
        key_b64: &str,
        ca_b64: &str,
    ) -> Result<Self> {
        if hostname.is_empty() {
            return Err(Error::Validation {
                field: "hostname",
                reason: "must be set".to_string(),
            });
        }

        let port = parse_port(port)?;
        let cert = decode_property("certPEMBlock", cert_b64)?;
        let key = decode_property("keyPemBlock", key_b64)?;
        let ca = decode_property("pemCerts", ca_b64)?;

        Self::new(hostname, port, keyspace, &cert, &key, &ca)
    }

    /// Build from an exported property set.
    pub fn from_property_set(properties: &BundleProperties) -> Result<Self> {
        Self::from_properties(
            &properties.hostname,
            &properties.port,
            &properties.keyspace,
            &properties.cert_pem_block,
            &properties.key_pem_block,
            &properties.pem_certs,
        )
    }

    /// Build from resolved values and raw PEM bytes.
    pub fn new(
        hostname: &str,
        port: u16,
        keyspace: &str,
        cert_pem: &[u8],
        key_pem: &[u8],
        ca_pem: &[u8],
    ) -> Result<Self> {
        let tls = TlsConfig::from_pem(hostname, cert_pem, key_pem, ca_pem)?;

        info!(
            hostname,
            port,
            keyspace,
            trusted_roots = tls.trusted_roots(),
            "Connection info built"
        );

        Ok(Self {
            hostname: hostname.to_string(),
            port,
            keyspace: keyspace.to_string(),
            tls,
        })
    }

    fn from_parsed(parsed: &ParsedBundle) -> Result<Self> {
        Self::new(
            &parsed.endpoint.hostname,
            parsed.endpoint.port,
            &parsed.keyspace,
            parsed.cert_pem(),
            parsed.key_pem(),
            parsed.ca_pem(),
        )
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn keyspace(&self) -> &str {
        &self.keyspace
    }

    pub fn tls(&self) -> &TlsConfig {
        &self.tls
    }

    /// `host:port` form used as the cluster contact point.
    pub fn address(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }
}

fn parse_port(value: &str) -> Result<u16> {
    let port: u16 = value.parse().map_err(|e: std::num::ParseIntError| Error::Validation {
        field: "port",
        reason: format!("bad port value '{value}': {e}"),
    })?;

    if port == 0 {
        return Err(Error::Validation {
            field: "port",
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(port)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::encode_property;
    use crate::tls::TlsError;
    use ec_bundle::BundleMember;

    const TEST_CERT: &str = include_str!("../tests/fixtures/client.crt");
    const TEST_KEY: &str = include_str!("../tests/fixtures/client.key");
    const TEST_CA: &str = include_str!("../tests/fixtures/ca.crt");

    fn valid_contents() -> RawBundleContents {
        let mut contents = RawBundleContents::new();
        contents.insert(BundleMember::Cert, TEST_CERT.as_bytes().to_vec());
        contents.insert(BundleMember::Key, TEST_KEY.as_bytes().to_vec());
        contents.insert(BundleMember::CaCert, TEST_CA.as_bytes().to_vec());
        contents.insert(
            BundleMember::ConfigJson,
            br#"{"keyspace": "prod", "port": 1234}"#.to_vec(),
        );
        contents.insert(
            BundleMember::Cqlshrc,
            b"hostname = db.example.com\nport = 9042\n".to_vec(),
        );
        contents
    }

    #[test]
    fn test_from_contents() {
        let info = ConnectionInfo::from_contents(valid_contents()).unwrap();

        assert_eq!(info.hostname(), "db.example.com");
        assert_eq!(info.port(), 9042);
        assert_eq!(info.keyspace(), "prod");
        assert_eq!(info.address(), "db.example.com:9042");
        assert_eq!(info.tls().trusted_roots(), 1);
    }

    #[test]
    fn test_missing_cert_fails_fast() {
        let mut contents = valid_contents();
        contents.insert(BundleMember::Cert, Vec::new());

        let err = ConnectionInfo::from_contents(contents).unwrap_err();
        assert!(matches!(err, Error::Tls(TlsError::NoCertificates(_))));
    }

    #[test]
    fn test_garbage_ca_degrades_to_empty_pool() {
        let mut contents = valid_contents();
        contents.insert(BundleMember::CaCert, b"garbage".to_vec());

        let info = ConnectionInfo::from_contents(contents).unwrap();
        assert_eq!(info.tls().trusted_roots(), 0);
    }

    #[test]
    fn test_from_properties() {
        let info = ConnectionInfo::from_properties(
            "db.example.com",
            "9042",
            "",
            &encode_property(TEST_CERT.as_bytes()),
            &encode_property(TEST_KEY.as_bytes()),
            &encode_property(TEST_CA.as_bytes()),
        )
        .unwrap();

        assert_eq!(info.port(), 9042);
        assert_eq!(info.keyspace(), "");
    }

    #[test]
    fn test_from_properties_empty_hostname() {
        let err = ConnectionInfo::from_properties("", "9042", "ks", "", "", "").unwrap_err();
        assert!(matches!(err, Error::Validation { field: "hostname", .. }));
    }

    #[test]
    fn test_from_properties_bad_port() {
        for port in ["", "abc", "90.42", "70000", "0", "-1"] {
            let err = ConnectionInfo::from_properties("h", port, "ks", "", "", "").unwrap_err();
            assert!(
                matches!(err, Error::Validation { field: "port", .. }),
                "port {port:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_from_properties_bad_base64() {
        let err =
            ConnectionInfo::from_properties("h", "9042", "ks", "!!not base64!!", "", "").unwrap_err();
        assert!(matches!(
            err,
            Error::Encoding {
                field: "certPEMBlock",
                ..
            }
        ));

        let cert = encode_property(TEST_CERT.as_bytes());
        let err = ConnectionInfo::from_properties("h", "9042", "ks", &cert, "%%%", "").unwrap_err();
        assert!(matches!(err, Error::Encoding { field: "keyPemBlock", .. }));
    }
}

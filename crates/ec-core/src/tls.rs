//! TLS client configuration from bundle PEM material.
//!
//! The bundle carries a client certificate, its private key and the CA chain
//! that signed the database's server certificate. All three arrive as raw PEM
//! bytes; nothing touches the filesystem here.

use std::sync::Arc;

use rustls::crypto::ring::default_provider;
use rustls::crypto::CryptoProvider;
use rustls::pki_types::{CertificateDer, PrivateKeyDer, ServerName};
use rustls::{ClientConfig, RootCertStore};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while building TLS material.
#[derive(Error, Debug)]
pub enum TlsError {
    /// No certificate could be found in the client certificate PEM
    #[error("no certificates found in {0}")]
    NoCertificates(&'static str),

    /// No private key could be found in the key PEM
    #[error("no private key found in {0}")]
    NoPrivateKey(&'static str),

    /// PEM framing was corrupt
    #[error("failed to parse {source_name}: {message}")]
    Pem {
        source_name: &'static str,
        message: String,
    },

    /// Hostname is not usable as a TLS server name
    #[error("invalid server name '{hostname}': {message}")]
    InvalidServerName { hostname: String, message: String },

    /// rustls rejected the certificate/key pair
    #[error("failed to configure client auth: {0}")]
    ClientAuth(String),
}

/// Result type alias for TLS operations.
pub type TlsResult<T> = std::result::Result<T, TlsError>;

/// Install the ring crypto provider if not already installed.
fn ensure_crypto_provider() {
    let _ = CryptoProvider::install_default(default_provider());
}

/// Client TLS settings for one database endpoint.
///
/// rustls takes the server name per connection rather than in the config, so
/// it travels alongside the [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct TlsConfig {
    client_config: Arc<ClientConfig>,
    server_name: ServerName<'static>,
    trusted_roots: usize,
}

impl TlsConfig {
    /// Build a mutual-TLS client config.
    ///
    /// A certificate/key pair that cannot be parsed is an error. A CA chain
    /// that yields no usable certificates is not: the trust store is left
    /// empty and every server certificate will be rejected at handshake.
    pub fn from_pem(
        hostname: &str,
        cert_pem: &[u8],
        key_pem: &[u8],
        ca_pem: &[u8],
    ) -> TlsResult<Self> {
        ensure_crypto_provider();

        let server_name = ServerName::try_from(hostname.to_string()).map_err(|e| {
            TlsError::InvalidServerName {
                hostname: hostname.to_string(),
                message: e.to_string(),
            }
        })?;

        let certs = parse_certificates(cert_pem)?;
        let key = parse_private_key(key_pem)?;
        let root_store = build_root_store(ca_pem);
        let trusted_roots = root_store.len();

        let client_config = ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_client_auth_cert(certs, key)
            .map_err(|e| TlsError::ClientAuth(e.to_string()))?;

        debug!(server_name = %hostname, trusted_roots, "built TLS client config");

        Ok(Self {
            client_config: Arc::new(client_config),
            server_name,
            trusted_roots,
        })
    }

    /// Shared rustls client config.
    pub fn client_config(&self) -> Arc<ClientConfig> {
        Arc::clone(&self.client_config)
    }

    /// Name the server certificate must be valid for.
    pub fn server_name(&self) -> &ServerName<'static> {
        &self.server_name
    }

    /// Number of CA certificates in the trust store.
    pub fn trusted_roots(&self) -> usize {
        self.trusted_roots
    }
}

/// Parse the client certificate chain; malformed PEM is an error.
fn parse_certificates(pem: &[u8]) -> TlsResult<Vec<CertificateDer<'static>>> {
    let mut reader = pem;
    let certs = rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TlsError::Pem {
            source_name: "cert",
            message: e.to_string(),
        })?;

    if certs.is_empty() {
        return Err(TlsError::NoCertificates("cert"));
    }

    debug!(count = certs.len(), "loaded client certificates");
    Ok(certs)
}

/// Parse the first private key (PKCS#1, PKCS#8 or SEC1).
fn parse_private_key(pem: &[u8]) -> TlsResult<PrivateKeyDer<'static>> {
    let mut reader = pem;
    rustls_pemfile::private_key(&mut reader)
        .map_err(|e| TlsError::Pem {
            source_name: "key",
            message: e.to_string(),
        })?
        .ok_or(TlsError::NoPrivateKey("key"))
}

/// Build the trust store from every certificate in the CA chain.
///
/// Unparsable entries are skipped; the result may be empty.
fn build_root_store(pem: &[u8]) -> RootCertStore {
    let mut root_store = RootCertStore::empty();
    let mut reader = pem;

    let certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut reader)
        .filter_map(|result| match result {
            Ok(cert) => Some(cert),
            Err(e) => {
                warn!(error = %e, "skipping invalid CA certificate");
                None
            }
        })
        .collect();

    let (added, ignored) = root_store.add_parsable_certificates(certs);
    debug!(added, ignored, "added CA certificates to trust store");

    if added == 0 {
        warn!("CA chain contains no usable certificates; trust store is empty");
    }

    root_store
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CERT: &str = include_str!("../tests/fixtures/client.crt");
    const TEST_KEY: &str = include_str!("../tests/fixtures/client.key");
    const TEST_CA: &str = include_str!("../tests/fixtures/ca.crt");

    #[test]
    fn test_parse_certificates() {
        let certs = parse_certificates(TEST_CERT.as_bytes()).unwrap();
        assert_eq!(certs.len(), 1);
    }

    #[test]
    fn test_parse_private_key() {
        assert!(parse_private_key(TEST_KEY.as_bytes()).is_ok());
    }

    #[test]
    fn test_parse_certificates_rejects_garbage() {
        let result = parse_certificates(b"not a certificate");
        assert!(matches!(result, Err(TlsError::NoCertificates("cert"))));
    }

    #[test]
    fn test_parse_certificates_rejects_empty() {
        assert!(matches!(
            parse_certificates(b""),
            Err(TlsError::NoCertificates(_))
        ));
    }

    #[test]
    fn test_parse_private_key_rejects_garbage() {
        let result = parse_private_key(b"not a key");
        assert!(matches!(result, Err(TlsError::NoPrivateKey("key"))));
    }

    #[test]
    fn test_parse_private_key_ignores_certificates() {
        let result = parse_private_key(TEST_CERT.as_bytes());
        assert!(matches!(result, Err(TlsError::NoPrivateKey(_))));
    }

    #[test]
    fn test_root_store_from_chain() {
        let chain = format!("{TEST_CA}\n{TEST_CERT}");
        let store = build_root_store(chain.as_bytes());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_root_store_empty_on_garbage() {
        assert!(build_root_store(b"garbage").is_empty());
        assert!(build_root_store(b"").is_empty());
    }

    #[test]
    fn test_tls_config_from_pem() {
        let config = TlsConfig::from_pem(
            "db.example.com",
            TEST_CERT.as_bytes(),
            TEST_KEY.as_bytes(),
            TEST_CA.as_bytes(),
        )
        .unwrap();

        assert_eq!(config.trusted_roots(), 1);
        assert_eq!(
            config.server_name(),
            &ServerName::try_from("db.example.com").unwrap()
        );
    }

    #[test]
    fn test_tls_config_empty_ca_still_builds() {
        let config = TlsConfig::from_pem(
            "db.example.com",
            TEST_CERT.as_bytes(),
            TEST_KEY.as_bytes(),
            b"",
        )
        .unwrap();
        assert_eq!(config.trusted_roots(), 0);
    }

    #[test]
    fn test_tls_config_missing_key_fails() {
        let result = TlsConfig::from_pem("db.example.com", TEST_CERT.as_bytes(), b"", b"");
        assert!(matches!(result, Err(TlsError::NoPrivateKey(_))));
    }

    #[test]
    fn test_tls_config_invalid_server_name() {
        let result = TlsConfig::from_pem(
            "not a host name",
            TEST_CERT.as_bytes(),
            TEST_KEY.as_bytes(),
            TEST_CA.as_bytes(),
        );
        assert!(matches!(result, Err(TlsError::InvalidServerName { .. })));
    }
}

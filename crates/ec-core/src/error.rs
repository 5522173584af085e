//! Error types for easycass.
//!
//! Every failure aborts the whole operation; callers never see a partially
//! built connection. Each variant maps to one CLI exit code.

use crate::exit_codes::ExitCode;
use crate::tls::TlsError;
use ec_bundle::BundleError;
use ec_config::ConfigError;
use thiserror::Error;

/// Result type alias for easycass operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error returned by a session collaborator.
pub type SessionSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by bundle extraction and session setup.
#[derive(Error, Debug)]
pub enum Error {
    /// Archive missing, unreadable, or a member could not be read
    #[error(transparent)]
    Bundle(#[from] BundleError),

    /// `config.json` or `cqlshrc` malformed or incomplete
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A supplied connection property was rejected
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A certificate property was not valid base64
    #[error("{field} decode error: {source}")]
    Encoding {
        field: &'static str,
        #[source]
        source: base64::DecodeError,
    },

    /// Certificate material could not be turned into a TLS config
    #[error(transparent)]
    Tls(#[from] TlsError),

    /// The session collaborator failed; the source is its own error
    #[error("failed to create session: {0}")]
    Session(#[source] SessionSource),
}

impl Error {
    /// Exit code reported by the CLI for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Bundle(_) => ExitCode::BundleError,
            Error::Config(_) => ExitCode::ConfigError,
            Error::Validation { .. } => ExitCode::ValidationError,
            Error::Encoding { .. } => ExitCode::EncodingError,
            Error::Tls(_) => ExitCode::TlsError,
            Error::Session(_) => ExitCode::SessionError,
        }
    }
}

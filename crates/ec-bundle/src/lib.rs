//! Secure connect bundle reader/writer for easycass.
//!
//! A secure connect bundle is a ZIP archive handed out by the database vendor.
//! It carries everything a client needs to reach one database over mutual TLS.
//!
//! # Bundle Format
//!
//! Only five members are of interest; everything else in the archive is ignored:
//! - `cert`: client certificate (PEM)
//! - `key`: client private key (PEM)
//! - `ca.crt`: CA chain used to verify the server (PEM)
//! - `config.json`: vendor JSON config (only `keyspace` is trusted)
//! - `cqlshrc`: flat `key = value` config holding the real hostname and port
//!
//! # Example
//!
//! ```no_run
//! use ec_bundle::{BundleMember, BundleReader};
//! use std::path::Path;
//!
//! let contents = BundleReader::open(Path::new("secure-connect-db.zip"))
//!     .unwrap()
//!     .read_members()
//!     .unwrap();
//! let cqlshrc: &[u8] = contents.get(BundleMember::Cqlshrc);
//! ```

pub mod error;
pub mod member;
pub mod reader;
pub mod writer;

pub use error::{BundleError, Result};
pub use member::{BundleMember, RawBundleContents};
pub use reader::{read_bundle, BundleReader};
pub use writer::BundleWriter;

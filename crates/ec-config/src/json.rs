//! `config.json` extraction.
//!
//! Only the keyspace is read. The file also carries `host` and `port`, but
//! those describe the vendor's metadata service, not the CQL endpoint.
//!
//! Decoding is lenient in the same places the vendor's own Go tooling is:
//! - a top-level `null` is an empty config
//! - the `keyspace` key matches case-insensitively (`Keyspace`, `KEYSPACE`)
//! - repeated keys are allowed; the last non-null value wins
//! - a `null` value leaves the keyspace as it was

use crate::{ConfigExtractor, Result};
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use tracing::debug;

const KEYSPACE_FIELD: &str = "keyspace";

/// Values taken from `config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyspaceConfig {
    /// Default keyspace; empty when the file does not name one.
    pub keyspace: String,
}

impl<'de> Deserialize<'de> for KeyspaceConfig {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<ConfigObject>::deserialize(deserializer)?
            .map(|object| object.0)
            .unwrap_or_default())
    }
}

/// A JSON object scanned key by key.
struct ConfigObject(KeyspaceConfig);

impl<'de> Deserialize<'de> for ConfigObject {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ConfigObjectVisitor)
    }
}

struct ConfigObjectVisitor;

impl<'de> Visitor<'de> for ConfigObjectVisitor {
    type Value = ConfigObject;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a config.json object")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<ConfigObject, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut config = KeyspaceConfig::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(KEYSPACE_FIELD) {
                if let Some(keyspace) = map.next_value::<Option<String>>()? {
                    config.keyspace = keyspace;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(ConfigObject(config))
    }
}

/// Extracts the keyspace from `config.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyspaceExtractor;

impl ConfigExtractor for KeyspaceExtractor {
    type Output = KeyspaceConfig;

    fn source(&self) -> &'static str {
        "config.json"
    }

    fn extract(&self, data: &[u8]) -> Result<KeyspaceConfig> {
        let config: KeyspaceConfig = serde_json::from_slice(data)?;
        debug!(keyspace = %config.keyspace, "Parsed config.json");
        Ok(config)
    }
}

/// Read the keyspace from raw `config.json` bytes.
pub fn read_keyspace(data: &[u8]) -> Result<String> {
    Ok(KeyspaceExtractor.extract(data)?.keyspace)
}

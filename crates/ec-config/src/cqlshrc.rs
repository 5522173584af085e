//! `cqlshrc` extraction.
//!
//! The file is INI-like, but only two keys matter, so it is scanned line by
//! line instead of parsed: a line starting with `hostname` or `port` must be a
//! single `key = value` pair. Sections, quoting and comments are not
//! interpreted, and lines that match neither key are never decoded, so stray
//! non-UTF-8 bytes elsewhere in the file are harmless.

use crate::{ConfigError, ConfigExtractor, MissingField, Result};
use tracing::debug;

const HOSTNAME_KEY: &str = "hostname";
const PORT_KEY: &str = "port";

/// Longest line the scanner accepts, newline excluded.
pub const MAX_LINE_LEN: usize = 64 * 1024 - 1;

/// The database endpoint named by `cqlshrc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub hostname: String,
    pub port: u16,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.hostname, self.port)
    }
}

/// Extracts hostname and port from `cqlshrc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointExtractor;

impl ConfigExtractor for EndpointExtractor {
    type Output = Endpoint;

    fn source(&self) -> &'static str {
        "cqlshrc"
    }

    fn extract(&self, data: &[u8]) -> Result<Endpoint> {
        let mut hostname = String::new();
        let mut port: u16 = 0;

        for (index, line) in raw_lines(data).enumerate() {
            let line_no = index + 1;

            if line.len() > MAX_LINE_LEN {
                return Err(ConfigError::Scan(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("line {line_no} is longer than {MAX_LINE_LEN} bytes"),
                )));
            }

            if line.starts_with(HOSTNAME_KEY.as_bytes()) {
                let text = String::from_utf8_lossy(line);
                hostname = split_value(&text, HOSTNAME_KEY, line_no)?.to_string();
            }

            if line.starts_with(PORT_KEY.as_bytes()) {
                let text = String::from_utf8_lossy(line);
                port = parse_port(split_value(&text, PORT_KEY, line_no)?)?;
            }

            // First complete pair wins; later lines are never looked at.
            if !hostname.is_empty() && port > 0 {
                debug!(hostname = %hostname, port, line = line_no, "Parsed cqlshrc");
                return Ok(Endpoint { hostname, port });
            }
        }

        let missing = match (hostname.is_empty(), port == 0) {
            (false, true) => MissingField::Port,
            (true, false) => MissingField::Hostname,
            _ => MissingField::HostnameAndPort,
        };
        Err(ConfigError::Missing(missing))
    }
}

/// Split raw bytes on `\n`, dropping one trailing `\r` from each line.
fn raw_lines(data: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    let data = data.strip_suffix(b"\n").unwrap_or(data);
    data.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

/// Trimmed value of a `key = value` line; anything but exactly one `=` fails.
fn split_value<'a>(line: &'a str, key: &'static str, line_no: usize) -> Result<&'a str> {
    let mut segments = line.split('=');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(value), None) => Ok(value.trim()),
        _ => Err(ConfigError::MalformedLine { key, line: line_no }),
    }
}

/// Parse a base-10 port. Zero or negative values count as "not found".
fn parse_port(value: &str) -> Result<u16> {
    let parsed: i64 = value.parse().map_err(|e: std::num::ParseIntError| {
        ConfigError::InvalidPort {
            value: value.to_string(),
            reason: e.to_string(),
        }
    })?;

    if parsed <= 0 {
        return Ok(0);
    }

    u16::try_from(parsed).map_err(|_| ConfigError::InvalidPort {
        value: value.to_string(),
        reason: format!("must be at most {}", u16::MAX),
    })
}

/// Read hostname and port from raw `cqlshrc` bytes.
pub fn read_endpoint(data: &[u8]) -> Result<Endpoint> {
    EndpointExtractor.extract(data)
}

//! Fuzz target for rebuilding a connection from exported properties.
//!
//! Arbitrary strings in every field must produce an error, never a panic.

#![no_main]

use arbitrary::Arbitrary;
use ec_core::ConnectionInfo;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Properties {
    hostname: String,
    port: String,
    keyspace: String,
    cert: String,
    key: String,
    ca: String,
}

fuzz_target!(|props: Properties| {
    let _ = ConnectionInfo::from_properties(
        &props.hostname,
        &props.port,
        &props.keyspace,
        &props.cert,
        &props.key,
        &props.ca,
    );
});

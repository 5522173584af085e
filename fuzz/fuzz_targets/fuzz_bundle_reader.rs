//! Fuzz target for secure connect bundle reading.
//!
//! Bundles are downloaded from outside; reading one must never panic.

#![no_main]

use ec_bundle::BundleReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(reader) = BundleReader::from_bytes(data.to_vec()) {
        let _ = reader.read_members();
    }
});

//! Fuzz target for the cqlshrc hostname/port scanner.

#![no_main]

use ec_config::read_endpoint;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(endpoint) = read_endpoint(data) {
        assert!(endpoint.port > 0);
    }
});

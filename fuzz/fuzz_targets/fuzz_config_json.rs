//! Fuzz target for keyspace extraction from config.json.

#![no_main]

use ec_config::read_keyspace;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = read_keyspace(data);
});

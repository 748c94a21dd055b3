//! Fuzz target for label/object id extraction from file names.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pointdist::cloud::parse_file_ids;

fuzz_target!(|data: &[u8]| {
    let name = String::from_utf8_lossy(data);
    let ids = parse_file_ids(&name);
    assert!(ids.fallback_count() <= 2);
});

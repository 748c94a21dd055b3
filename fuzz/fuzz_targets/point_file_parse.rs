//! Fuzz target for object point-file averaging.
//!
//! This fuzzer feeds arbitrary UTF-8 file contents to the centroid
//! extractor, checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pointdist::cloud::centroid::fuzz_summarize_points;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    let summary = fuzz_summarize_points(content);
    assert!(summary.sample_lines <= summary.line_count);
});

#![allow(dead_code)]

use pointdist::cloud::{ObjectRecord, Point3};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Relative tolerance for comparing single-precision distances.
pub const EPS_F32: f32 = 1e-6;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_point() -> impl Strategy<Value = Point3> {
    (-1e4f64..1e4, -1e4f64..1e4, -1e4f64..1e4).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

/// Objects with unique object ids `1..=n` and arbitrary labels.
pub fn arb_distinct_objects(max_len: usize) -> impl Strategy<Value = Vec<ObjectRecord>> {
    prop::collection::vec((0i64..5, arb_point()), 0..=max_len).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (label, centroid))| ObjectRecord::new(label, i as i64 + 1, centroid))
            .collect()
    })
}

/// Objects whose ids are drawn from a tiny range, so collisions are common.
pub fn arb_colliding_objects(max_len: usize) -> impl Strategy<Value = Vec<ObjectRecord>> {
    prop::collection::vec((0i64..3, 0i64..3, arb_point()), 0..=max_len).prop_map(|items| {
        items
            .into_iter()
            .map(|(label, id, centroid)| ObjectRecord::new(label, id, centroid))
            .collect()
    })
}

pub fn close_f32(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPS_F32 * a.abs().max(b.abs()).max(1.0)
}

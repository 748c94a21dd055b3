//! Centroid extraction from a single object point file.
//!
//! Each non-blank line holds one sample point as whitespace-separated fields.
//! The x, y, z values sit in three consecutive fields starting at a
//! configurable offset; the fields before the offset are metadata.
//!
//! The average is taken over *every* line produced by splitting the trimmed
//! file content, including blank lines in the middle of the file, not just
//! the lines that contributed a point. A field that fails to parse is logged
//! and contributes nothing to its axis sum. Both behaviors match the legacy
//! distance tool so existing outputs stay reproducible.

use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use super::Point3;

/// Default index of the x field within a line.
pub const DEFAULT_COORD_OFFSET: usize = 2;

/// Characters stripped from both ends of the whole file before splitting.
const FILE_TRIM_CHARS: [char; 3] = [' ', '\n', '\r'];

const AXIS_NAMES: [&str; 3] = ["x", "y", "z"];

/// Outcome of averaging one object file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CentroidSummary {
    /// Mean position (axis sums divided by `line_count`).
    pub centroid: Point3,
    /// Lines in the split content, blank ones included. This is the divisor.
    pub line_count: usize,
    /// Non-blank lines that were parsed for coordinates.
    pub sample_lines: usize,
    /// Coordinate fields that were missing or not a valid float.
    pub parse_failures: usize,
}

/// Computes the centroid of one object file's content.
///
/// Content that is empty after trimming has zero lines, so the result is
/// NaN on every axis. Callers must tolerate non-finite centroids.
pub fn compute_centroid(content: &str, offset: usize) -> Point3 {
    summarize_points(content, offset, Path::new("<memory>")).centroid
}

/// Like [`compute_centroid`], but also reports how the average was formed.
///
/// `source` only appears in log messages.
pub fn summarize_points(content: &str, offset: usize, source: &Path) -> CentroidSummary {
    let trimmed = content.trim_matches(&FILE_TRIM_CHARS[..]);

    let mut sums = [0.0f64; 3];
    let mut line_count = 0usize;
    let mut sample_lines = 0usize;
    let mut parse_failures = 0usize;

    if !trimmed.is_empty() {
        for (line_idx, line) in trimmed.split('\n').enumerate() {
            line_count += 1;
            if line.trim().is_empty() {
                continue;
            }
            sample_lines += 1;

            let mut fields = line.split_whitespace().skip(offset);
            for (axis, sum) in sums.iter_mut().enumerate() {
                match parse_coord(fields.next()) {
                    Ok(value) => *sum += value,
                    Err(raw) => {
                        parse_failures += 1;
                        warn!(
                            "{}:{}: unable to parse {} coordinate '{}'",
                            source.display(),
                            line_idx + 1,
                            AXIS_NAMES[axis],
                            raw
                        );
                    }
                }
            }
        }
    }

    let centroid = Point3::new(sums[0], sums[1], sums[2]) / line_count as f64;

    info!(
        "{}: avg : {} {} {}",
        source.display(),
        centroid.x,
        centroid.y,
        centroid.z
    );
    if !centroid.is_finite() {
        warn!(
            "{}: no point lines, centroid is not finite",
            source.display()
        );
    }

    CentroidSummary {
        centroid,
        line_count,
        sample_lines,
        parse_failures,
    }
}

/// Parses one coordinate token; on failure returns the raw text for logging.
fn parse_coord(token: Option<&str>) -> Result<f64, &str> {
    match token {
        Some(raw) => raw.parse::<f64>().map_err(|_| raw),
        None => Err("<missing>"),
    }
}

/// Fuzz-only entrypoint for point-file parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_summarize_points(input: &str) -> CentroidSummary {
    summarize_points(input, DEFAULT_COORD_OFFSET, Path::new("<fuzz>"))
}

//! Run report: what one measuring pass read, skipped and wrote.
//!
//! Nothing in the pipeline fails on malformed coordinates or file names, so
//! this report is where those recoveries become visible.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::cloud::{Label, ObjectCollection};

/// Counts gathered while loading objects and writing distances.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RunReport {
    /// Files listed in the input directory.
    pub files_scanned: usize,
    /// Object records built (one per file).
    pub objects: usize,
    /// Coordinate fields that were missing or not a float.
    pub field_parse_failures: usize,
    /// Label or object ids that defaulted to zero.
    pub id_fallbacks: usize,
    /// Objects whose centroid is NaN or infinite.
    pub non_finite_centroids: usize,
    /// Distance records written to the output file.
    pub records_written: usize,
    /// Highest label seen, if any object was loaded.
    pub max_label: Option<Label>,
    /// Objects per label.
    pub objects_per_label: BTreeMap<Label, usize>,
}

impl RunReport {
    /// Fill the object-level counts from a loaded collection.
    pub fn record_objects(&mut self, objects: &ObjectCollection) {
        self.objects = objects.len();
        self.non_finite_centroids = objects.non_finite_count();
        self.max_label = objects.max_label();
        self.objects_per_label = objects.count_by_label();
    }

    /// Returns true if any input needed a fallback.
    pub fn has_recoveries(&self) -> bool {
        self.field_parse_failures > 0 || self.id_fallbacks > 0 || self.non_finite_centroids > 0
    }

    /// Pretty JSON rendering for `--report json`.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  {} file(s), {} object(s), {} distance record(s)",
            self.files_scanned, self.objects, self.records_written
        )?;

        if !self.objects_per_label.is_empty() {
            writeln!(f)?;
            writeln!(f, "Labels ({}):", self.objects_per_label.len())?;
            for (label, count) in &self.objects_per_label {
                writeln!(f, "  {}: {} object(s)", label, count)?;
            }
        }

        if self.has_recoveries() {
            writeln!(f)?;
            writeln!(f, "Recovered:")?;
            if self.field_parse_failures > 0 {
                writeln!(
                    f,
                    "  - {} coordinate field(s) could not be parsed",
                    self.field_parse_failures
                )?;
            }
            if self.id_fallbacks > 0 {
                writeln!(
                    f,
                    "  - {} file name id(s) defaulted to 0",
                    self.id_fallbacks
                )?;
            }
            if self.non_finite_centroids > 0 {
                writeln!(
                    f,
                    "  - {} object(s) have a non-finite centroid",
                    self.non_finite_centroids
                )?;
            }
        }

        Ok(())
    }
}

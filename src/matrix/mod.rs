//! Pairwise centroid distance matrix.
//!
//! [`build_matrix`] walks the full ordered cartesian product of an object
//! slice and yields one [`DistanceRecord`] per pair of objects with
//! different object ids. Both `(a, b)` and `(b, a)` are produced; nothing is
//! sorted, pruned or deduplicated. Records are computed on demand so the
//! O(n²) output never has to sit in memory.

pub mod io_distances;

use std::fmt;

use serde::Serialize;

use crate::cloud::{Label, ObjectId, ObjectRecord};

/// Distance between the centroids of two distinct objects.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DistanceRecord {
    pub label1: Label,
    pub object_id1: ObjectId,
    pub label2: Label,
    pub object_id2: ObjectId,
    /// Computed in double precision, stored in single precision.
    pub distance: f32,
}

impl DistanceRecord {
    /// Builds the record for the ordered pair `(a, b)`.
    pub fn between(a: &ObjectRecord, b: &ObjectRecord) -> Self {
        Self {
            label1: a.label,
            object_id1: a.object_id,
            label2: b.label,
            object_id2: b.object_id,
            distance: a.centroid.distance(&b.centroid) as f32,
        }
    }
}

/// One output line, without the trailing newline.
impl fmt::Display for DistanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.label1, self.object_id1, self.label2, self.object_id2, self.distance
        )
    }
}

/// Lazy iterator over the distance records of an object slice.
#[derive(Clone, Debug)]
pub struct DistanceMatrix<'a> {
    objects: &'a [ObjectRecord],
    outer: usize,
    inner: usize,
}

/// Start iterating the distance matrix of `objects`.
///
/// Iteration order is outer index then inner index, both in collection
/// order.
pub fn build_matrix(objects: &[ObjectRecord]) -> DistanceMatrix<'_> {
    DistanceMatrix {
        objects,
        outer: 0,
        inner: 0,
    }
}

impl<'a> Iterator for DistanceMatrix<'a> {
    type Item = DistanceRecord;

    fn next(&mut self) -> Option<DistanceRecord> {
        while self.outer < self.objects.len() {
            if self.inner >= self.objects.len() {
                self.outer += 1;
                self.inner = 0;
                continue;
            }

            let a = &self.objects[self.outer];
            let b = &self.objects[self.inner];
            self.inner += 1;

            // Same object id also covers the diagonal.
            if a.object_id == b.object_id {
                continue;
            }
            return Some(DistanceRecord::between(a, b));
        }
        None
    }
}

impl std::iter::FusedIterator for DistanceMatrix<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::Point3;

    fn obj(label: i64, id: i64, x: f64, y: f64, z: f64) -> ObjectRecord {
        ObjectRecord::new(label, id, Point3::new(x, y, z))
    }

    #[test]
    fn three_four_five_distance_is_exact() {
        let objects = [obj(1, 1, 0.0, 0.0, 0.0), obj(1, 2, 3.0, 4.0, 0.0)];
        let records: Vec<_> = build_matrix(&objects).collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].distance, 5.0);
        assert_eq!(records[1].distance, 5.0);
        assert_eq!(records[0].to_string(), "1 1 1 2 5");
        assert_eq!(records[1].to_string(), "1 2 1 1 5");
    }

    #[test]
    fn shared_object_id_is_skipped_in_both_orders() {
        let objects = [obj(1, 9, 0.0, 0.0, 0.0), obj(2, 9, 1.0, 1.0, 1.0)];
        assert_eq!(build_matrix(&objects).count(), 0);
    }

    #[test]
    fn emits_outer_then_inner_order() {
        let objects = [
            obj(0, 1, 0.0, 0.0, 0.0),
            obj(0, 2, 1.0, 0.0, 0.0),
            obj(0, 3, 2.0, 0.0, 0.0),
        ];
        let pairs: Vec<_> = build_matrix(&objects)
            .map(|r| (r.object_id1.as_i64(), r.object_id2.as_i64()))
            .collect();
        assert_eq!(pairs, vec![(1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2)]);
    }

    #[test]
    fn non_finite_centroids_propagate() {
        let objects = [obj(0, 1, f64::NAN, f64::NAN, f64::NAN), obj(0, 2, 0.0, 0.0, 0.0)];
        let records: Vec<_> = build_matrix(&objects).collect();
        assert!(records.iter().all(|r| r.distance.is_nan()));
        assert_eq!(records[0].to_string(), "0 1 0 2 NaN");
    }

    #[test]
    fn empty_and_single_object_collections_yield_nothing() {
        assert_eq!(build_matrix(&[]).count(), 0);
        assert_eq!(build_matrix(&[obj(0, 1, 1.0, 2.0, 3.0)]).count(), 0);
    }

    #[test]
    fn fractional_distances_use_shortest_float_text() {
        let objects = [obj(0, 1, 0.0, 0.0, 0.0), obj(0, 2, 1.0, 1.0, 0.0)];
        let record = build_matrix(&objects).next().expect("one record");
        assert_eq!(record.distance, std::f64::consts::SQRT_2 as f32);
        assert_eq!(record.to_string(), "0 1 0 2 1.4142135");
    }
}

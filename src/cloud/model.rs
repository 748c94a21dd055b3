//! Core object types: per-file records and the ordered collection of them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Label, ObjectId, Point3};

/// One labeled object, summarized by the centroid of its point file.
///
/// Created once per input file and never modified afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub label: Label,
    pub object_id: ObjectId,
    pub centroid: Point3,
}

impl ObjectRecord {
    /// Creates a new object record.
    pub fn new(label: impl Into<Label>, object_id: impl Into<ObjectId>, centroid: Point3) -> Self {
        Self {
            label: label.into(),
            object_id: object_id.into(),
            centroid,
        }
    }
}

/// Objects in directory enumeration order.
///
/// `(label, object_id)` pairs are not required to be unique; duplicates are
/// kept as distinct entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectCollection {
    objects: Vec<ObjectRecord>,
}

impl ObjectCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record, preserving insertion order.
    pub fn push(&mut self, record: ObjectRecord) {
        self.objects.push(record);
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObjectRecord> {
        self.objects.iter()
    }

    pub fn as_slice(&self) -> &[ObjectRecord] {
        &self.objects
    }

    /// Highest label in the collection, if any.
    pub fn max_label(&self) -> Option<Label> {
        self.objects.iter().map(|obj| obj.label).max()
    }

    /// Number of objects per label, ordered by label.
    pub fn count_by_label(&self) -> BTreeMap<Label, usize> {
        let mut counts = BTreeMap::new();
        for obj in &self.objects {
            *counts.entry(obj.label).or_insert(0) += 1;
        }
        counts
    }

    /// Number of objects whose centroid is NaN or infinite.
    pub fn non_finite_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|obj| !obj.centroid.is_finite())
            .count()
    }
}

impl From<Vec<ObjectRecord>> for ObjectCollection {
    fn from(objects: Vec<ObjectRecord>) -> Self {
        Self { objects }
    }
}

impl FromIterator<ObjectRecord> for ObjectCollection {
    fn from_iter<I: IntoIterator<Item = ObjectRecord>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ObjectCollection {
    type Item = &'a ObjectRecord;
    type IntoIter = std::slice::Iter<'a, ObjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_keeps_duplicates_in_order() {
        let mut objects = ObjectCollection::new();
        objects.push(ObjectRecord::new(1i64, 2i64, Point3::zero()));
        objects.push(ObjectRecord::new(1i64, 2i64, Point3::new(1.0, 1.0, 1.0)));

        assert_eq!(objects.len(), 2);
        assert_eq!(objects.as_slice()[1].centroid, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_label_statistics() {
        let objects: ObjectCollection = vec![
            ObjectRecord::new(3i64, 1i64, Point3::zero()),
            ObjectRecord::new(1i64, 2i64, Point3::zero()),
            ObjectRecord::new(3i64, 3i64, Point3::new(f64::NAN, 0.0, 0.0)),
        ]
        .into();

        assert_eq!(objects.max_label(), Some(Label(3)));
        let counts = objects.count_by_label();
        assert_eq!(counts.get(&Label(1)), Some(&1));
        assert_eq!(counts.get(&Label(3)), Some(&2));
        assert_eq!(objects.non_finite_count(), 1);
    }

    #[test]
    fn test_empty_collection_has_no_max_label() {
        assert_eq!(ObjectCollection::new().max_label(), None);
    }
}

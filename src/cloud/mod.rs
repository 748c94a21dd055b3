//! Point-cloud object model and readers.
//!
//! An object file holds the sampled points of one physical object; its name
//! carries the object's label and id. Reading a directory of such files
//! yields an [`ObjectCollection`] of centroids, which is all the distance
//! matrix needs.
//!
//! # Example
//!
//! ```
//! use pointdist::cloud::{compute_centroid, ObjectRecord, Point3, DEFAULT_COORD_OFFSET};
//!
//! let centroid = compute_centroid("s 0 1 2 3\ns 0 3 4 5\n", DEFAULT_COORD_OFFSET);
//! assert_eq!(centroid, Point3::new(2.0, 3.0, 4.0));
//!
//! let record = ObjectRecord::new(1i64, 2i64, centroid);
//! assert_eq!(record.object_id.as_i64(), 2);
//! ```

pub mod centroid;
pub mod filename;
mod ids;
pub mod io_objects;
mod model;
mod point;

// Re-export core types for convenient access
pub use centroid::{compute_centroid, summarize_points, CentroidSummary, DEFAULT_COORD_OFFSET};
pub use filename::{parse_file_ids, FileIds};
pub use ids::{Label, ObjectId};
pub use model::{ObjectCollection, ObjectRecord};
pub use point::Point3;

//! Object directory reader.
//!
//! Lists a directory non-recursively in file name order, derives each file's
//! ids from its name and reduces its content to a centroid.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use super::centroid::summarize_points;
use super::filename::parse_file_ids;
use super::model::{ObjectCollection, ObjectRecord};
use crate::error::PointdistError;
use crate::report::RunReport;

/// Read every object file in `dir` into an [`ObjectCollection`].
///
/// Parse-level problems are counted in `report` and never abort the read.
/// An unreadable directory or input file is an error.
pub fn read_object_dir(
    dir: &Path,
    offset: usize,
    report: &mut RunReport,
) -> Result<ObjectCollection, PointdistError> {
    let files = list_object_files(dir)?;
    let mut objects = ObjectCollection::new();

    for path in files {
        report.files_scanned += 1;

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ids = parse_file_ids(&name);
        report.id_fallbacks += ids.fallback_count();

        let bytes = fs::read(&path).map_err(|source| PointdistError::InputFileRead {
            path: path.clone(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let summary = summarize_points(&content, offset, &path);
        report.field_parse_failures += summary.parse_failures;

        objects.push(ObjectRecord::new(
            ids.label_or_default(),
            ids.object_id_or_default(),
            summary.centroid,
        ));
    }

    report.record_objects(&objects);
    Ok(objects)
}

/// List the regular files directly inside `dir`, sorted by file name.
pub fn list_object_files(dir: &Path) -> Result<Vec<PathBuf>, PointdistError> {
    let meta = fs::metadata(dir).map_err(|source| PointdistError::InputDirUnreadable {
        path: dir.to_path_buf(),
        message: source.to_string(),
    })?;
    if !meta.is_dir() {
        return Err(PointdistError::InputDirUnreadable {
            path: dir.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| PointdistError::InputDirUnreadable {
            path: dir.to_path_buf(),
            message: format!("failed while listing directory: {source}"),
        })?;

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        } else {
            debug!("skipping non-file entry {}", entry.path().display());
        }
    }

    Ok(files)
}

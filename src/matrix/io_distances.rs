//! Distance file writer.
//!
//! The output file is removed and recreated on every run, then each record
//! is appended and flushed as soon as it is produced. The handle lives for
//! the whole write and is closed when it goes out of scope, on success and
//! on error alike.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::debug;

use super::{build_matrix, DistanceRecord};
use crate::cloud::ObjectRecord;
use crate::error::PointdistError;

/// Write the full distance matrix of `objects` to `path`.
///
/// Returns the number of records written.
pub fn write_distances_file(path: &Path, objects: &[ObjectRecord]) -> Result<usize, PointdistError> {
    let mut file = recreate_output(path)?;
    let written = write_distance_lines(&mut file, build_matrix(objects)).map_err(|source| {
        PointdistError::OutputWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!("wrote {} distance record(s) to {}", written, path.display());
    Ok(written)
}

/// Write one line per record, flushing after each.
pub fn write_distance_lines<W, I>(writer: &mut W, records: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = DistanceRecord>,
{
    let mut written = 0;
    for record in records {
        let line = format!("{record}\n");
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        written += 1;
    }
    Ok(written)
}

/// Render records exactly as they appear in the output file.
pub fn to_distance_string(objects: &[ObjectRecord]) -> String {
    let mut out = String::new();
    for record in build_matrix(objects) {
        out.push_str(&record.to_string());
        out.push('\n');
    }
    out
}

fn recreate_output(path: &Path) -> Result<File, PointdistError> {
    match fs::remove_file(path) {
        Ok(()) => debug!("removed previous output {}", path.display()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(PointdistError::OutputOpen {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options.open(path).map_err(|source| PointdistError::OutputOpen {
        path: path.to_path_buf(),
        source,
    })
}

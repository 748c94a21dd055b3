//! Run configuration.

use std::path::PathBuf;

use crate::cloud::DEFAULT_COORD_OFFSET;

/// Directory scanned when none is configured.
pub const DEFAULT_INPUT_DIR: &str = "/tmp/objects/";

/// Output file written when none is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "/tmp/distances.data";

/// Where one measuring pass reads from and writes to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory holding one point file per object.
    pub input_dir: PathBuf,
    /// Distance file, recreated on every run.
    pub output_path: PathBuf,
    /// Field index of the x coordinate on each point line.
    pub coord_offset: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            coord_offset: DEFAULT_COORD_OFFSET,
        }
    }
}

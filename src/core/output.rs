//! Output directory naming and creation.
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::params::LaunchParams;
use crate::error::{Error, Result};

pub const TOTAL_TIME_FILE: &str = "total_time.txt";
pub const BLANT_TIME_FILE: &str = "blant_time.txt";
pub const EPP_TIME_FILE: &str = "epp_time.txt";

/// `k<k>-n<n>-e<e>-output`
pub fn output_dir_name(params: &LaunchParams) -> String {
    format!("k{}-n{}-e{}-output", params.k, params.n, params.e)
}

/// Output directory for `params`, relative to `work_dir`. No I/O.
pub fn output_path(work_dir: &Path, params: &LaunchParams) -> PathBuf {
    work_dir.join(output_dir_name(params))
}

/// Create `path` as a fresh directory.
///
/// Any existing entry at `path` (directory, file, symlink) is refused and left
/// untouched. The parent must already exist.
pub fn prepare_output_dir(path: &Path) -> Result<()> {
    match fs::create_dir(path) {
        Ok(()) => {
            debug!("Created output directory {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(Error::OutputExists {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e.into()),
    }
}

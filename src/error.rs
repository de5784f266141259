//! Crate-level error type and `Result` alias.
//! Covers argument validation, output directory preparation and spawning the
//! external pipeline. Failures inside the pipeline itself are not errors here;
//! they only surface through the returned exit status.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: &'static str },

    #[error("Output directory {} already exists", path.display())]
    OutputExists { path: PathBuf },

    #[error("Failed to spawn {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! High-level entry point: prepare the output directory and run the timed
//! pipeline in one call. Prefer this over the `core` modules when embedding.
use std::path::Path;

use tracing::info;

use crate::core::output::{output_dir_name, output_path, prepare_output_dir};
use crate::core::params::{LaunchParams, LauncherConfig};
use crate::core::pipeline::{PipelineOutcome, run_pipeline};
use crate::error::Result;

/// Create `k<k>-n<n>-e<e>-output` under `config.work_dir` and run the pipeline
/// into it.
///
/// Nothing is spawned when the directory cannot be created. A directory that was
/// created is left in place whatever the pipeline does.
pub fn launch(params: &LaunchParams, config: &LauncherConfig) -> Result<PipelineOutcome> {
    prepare_output_dir(&output_path(&config.work_dir, params))?;
    let name = output_dir_name(params);
    info!("Output directory: {}", name);
    run_pipeline(params, Path::new(&name), config)
}

//! Timed BLANT | epp pipeline.
//!
//! The whole pipeline runs under one outer timing utility invocation that writes
//! `total_time.txt`. Inside it a shell pipes the timed BLANT stage into the timed
//! epp stage, each writing its own report. User tokens reach the script through
//! environment variables and positional parameters only, never through the script
//! text, so they are forwarded verbatim.
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tracing::{debug, info, warn};

use crate::core::output::{BLANT_TIME_FILE, EPP_TIME_FILE, TOTAL_TIME_FILE};
use crate::core::params::{LaunchParams, LauncherConfig};
use crate::error::{Error, Result};

const ENV_TIME: &str = "BLANT_EPP_TIME";
const ENV_BLANT: &str = "BLANT_EPP_BLANT";
const ENV_EPP: &str = "BLANT_EPP_EPP";
const ENV_GRAPH: &str = "BLANT_EPP_GRAPH";
const ENV_OUT: &str = "BLANT_EPP_OUT";
const ENV_K: &str = "BLANT_EPP_K";
const ENV_N: &str = "BLANT_EPP_N";
const ENV_E: &str = "BLANT_EPP_E";

/// `$0` of the inner shell, shows up in its diagnostics.
const SCRIPT_NAME: &str = "blant-epp";

/// Exit status of the outer timed scope plus where the reports were written.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub status: ExitStatus,
    pub output_dir: PathBuf,
    pub total_report: PathBuf,
    pub blant_report: PathBuf,
    pub epp_report: PathBuf,
}

impl PipelineOutcome {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Process exit code the launcher should end with. A pipeline killed by a
    /// signal maps to `128 + signal`, like a shell does.
    pub fn exit_code(&self) -> i32 {
        if let Some(code) = self.status.code() {
            return code;
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(sig) = self.status.signal() {
                return 128 + sig;
            }
        }
        1
    }
}

/// Inner shell script: timed BLANT piped into timed epp.
fn pipeline_script(config: &LauncherConfig) -> String {
    format!(
        concat!(
            "{prologue}",
            "\"${time}\" \"$@\" -o \"${out}/{blant_report}\" ",
            "\"${blant}\" -k \"${k}\" -n \"${n}\" \"${graph}\" | ",
            "\"${time}\" \"$@\" -o \"${out}/{epp_report}\" ",
            "\"${epp}\" -k \"${k}\" -e \"${e}\" -o \"${out}\"\n",
        ),
        prologue = config.status_policy.shell_prologue(),
        time = ENV_TIME,
        out = ENV_OUT,
        blant = ENV_BLANT,
        epp = ENV_EPP,
        graph = ENV_GRAPH,
        k = ENV_K,
        n = ENV_N,
        e = ENV_E,
        blant_report = BLANT_TIME_FILE,
        epp_report = EPP_TIME_FILE,
    )
}

/// Outer command: `<time> <time-args> -o <out>/total_time.txt <shell> -c <script>`.
///
/// `out_dir` is taken relative to `config.work_dir`, which is also where every
/// stage runs.
pub(crate) fn pipeline_command(
    params: &LaunchParams,
    out_dir: &Path,
    config: &LauncherConfig,
) -> Command {
    let mut cmd = Command::new(&config.time);
    cmd.args(&config.time_args)
        .arg("-o")
        .arg(out_dir.join(TOTAL_TIME_FILE))
        .arg(&config.shell)
        .arg("-c")
        .arg(pipeline_script(config))
        .arg(SCRIPT_NAME)
        .args(&config.time_args)
        .env(ENV_TIME, &config.time)
        .env(ENV_BLANT, &config.blant)
        .env(ENV_EPP, &config.epp)
        .env(ENV_GRAPH, &config.input_graph)
        .env(ENV_OUT, out_dir)
        .env(ENV_K, &params.k)
        .env(ENV_N, &params.n)
        .env(ENV_E, &params.e)
        .current_dir(&config.work_dir);
    cmd
}

/// Spawn the timed pipeline and block until the outer timing scope exits.
///
/// Stage failures are not inspected; they only show up in the returned status,
/// shaped by `config.status_policy`, and in the reports.
pub fn run_pipeline(
    params: &LaunchParams,
    out_dir: &Path,
    config: &LauncherConfig,
) -> Result<PipelineOutcome> {
    let mut cmd = pipeline_command(params, out_dir, config);
    info!(
        "Running {} | {} (k={}, n={}, e={}, policy={})",
        config.blant.display(),
        config.epp.display(),
        params.k,
        params.n,
        params.e,
        config.status_policy
    );
    debug!("Outer command: {:?}", cmd);

    let status = cmd.status().map_err(|source| Error::Spawn {
        program: config.time.clone(),
        source,
    })?;

    let output_dir = config.work_dir.join(out_dir);
    let outcome = PipelineOutcome {
        status,
        total_report: output_dir.join(TOTAL_TIME_FILE),
        blant_report: output_dir.join(BLANT_TIME_FILE),
        epp_report: output_dir.join(EPP_TIME_FILE),
        output_dir,
    };

    if outcome.success() {
        info!("Pipeline finished: {}", status);
    } else {
        warn!("Pipeline finished with {}", status);
    }
    Ok(outcome)
}

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::types::StatusPolicy;

/// Error-rate exponent handed to epp when `-e` is not given.
pub const DEFAULT_E: &str = "8";

/// Values forwarded to the external stages. Tokens are passed through verbatim;
/// numeric-ness is left to BLANT and epp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchParams {
    /// Graphlet size, forwarded to both stages
    pub k: String,
    /// Sample count, forwarded to BLANT only
    pub n: String,
    /// Error-rate exponent, forwarded to epp only
    pub e: String,
}

impl LaunchParams {
    /// Build parameters from optional flag values, defaulting `e` from `config`.
    ///
    /// Fails when `k` or `n` is absent or empty. `e` is never checked: it always
    /// carries a value, given or defaulted.
    pub fn validate(
        k: Option<String>,
        n: Option<String>,
        e: Option<String>,
        config: &LauncherConfig,
    ) -> Result<Self> {
        let k = k
            .filter(|v| !v.is_empty())
            .ok_or(Error::MissingArgument { arg: "-k" })?;
        let n = n
            .filter(|v| !v.is_empty())
            .ok_or(Error::MissingArgument { arg: "-n" })?;
        let e = e.unwrap_or_else(|| config.default_e.clone());
        Ok(Self { k, n, e })
    }
}

/// Everything the launcher would otherwise take from its environment.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub default_e: String,
    /// BLANT executable (upstream stage)
    pub blant: PathBuf,
    /// epp executable (downstream stage)
    pub epp: PathBuf,
    /// Timing utility; must accept `-o <file>` followed by the command to wrap
    pub time: PathBuf,
    /// Extra flags given to every timing utility invocation, before `-o`
    pub time_args: Vec<String>,
    /// Shell running the piped stages inside the outer timed scope
    pub shell: PathBuf,
    /// Input network handed to BLANT
    pub input_graph: PathBuf,
    /// Directory the output directory is created in and the stages run from
    pub work_dir: PathBuf,
    pub status_policy: StatusPolicy,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            default_e: DEFAULT_E.to_string(),
            blant: PathBuf::from("./blant"),
            epp: PathBuf::from("./epp"),
            time: PathBuf::from("/usr/bin/time"),
            time_args: vec!["-v".to_string()],
            shell: PathBuf::from("bash"),
            input_graph: PathBuf::from("networks/syeast0/syeast0.el"),
            work_dir: PathBuf::from("."),
            status_policy: StatusPolicy::LastStage,
        }
    }
}

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use blant_epp::{LauncherConfig, StatusPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "blant-epp",
    about = "Run BLANT piped into epp, timing each stage.\n\
             Reports go to k<k>-n<n>-e<e>-output/{total,blant,epp}_time.txt.",
    disable_help_flag = true,
    args_override_self = true
)]
pub struct CliArgs {
    /// Graphlet size, forwarded to BLANT and epp (required)
    #[arg(short = 'k', value_name = "K", allow_hyphen_values = true)]
    pub k: Option<String>,

    /// Number of samples BLANT draws (required)
    #[arg(short = 'n', value_name = "N", allow_hyphen_values = true)]
    pub n: Option<String>,

    /// Error-rate exponent for epp: error rate is 10^-E [default: 8]
    #[arg(short = 'e', value_name = "E", allow_hyphen_values = true)]
    pub e: Option<String>,

    /// Print this help and exit
    #[arg(short = 'h', action = ArgAction::SetTrue)]
    pub help: bool,

    /// BLANT executable
    #[arg(long, value_name = "PATH")]
    pub blant: Option<PathBuf>,

    /// epp executable
    #[arg(long, value_name = "PATH")]
    pub epp: Option<PathBuf>,

    /// Timing utility wrapping every stage
    #[arg(long, value_name = "PATH")]
    pub time: Option<PathBuf>,

    /// Input network handed to BLANT
    #[arg(long, value_name = "PATH")]
    pub graph: Option<PathBuf>,

    /// Which stage failures fail the run
    #[arg(long, value_enum)]
    pub status_policy: Option<StatusPolicy>,

    /// Enable logging (stderr, filtered by RUST_LOG)
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Operands after the options; everything from the first one on is ignored
    #[arg(value_name = "IGNORED", trailing_var_arg = true, hide = true)]
    pub operands: Vec<String>,
}

impl CliArgs {
    /// Launcher configuration with the long-option overrides applied.
    pub fn config(&self) -> LauncherConfig {
        let mut config = LauncherConfig::default();
        if let Some(blant) = &self.blant {
            config.blant = blant.clone();
        }
        if let Some(epp) = &self.epp {
            config.epp = epp.clone();
        }
        if let Some(time) = &self.time {
            config.time = time.clone();
        }
        if let Some(graph) = &self.graph {
            config.input_graph = graph.clone();
        }
        if let Some(policy) = self.status_policy {
            config.status_policy = policy;
        }
        config
    }
}

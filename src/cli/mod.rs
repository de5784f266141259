//! Command Line Interface (CLI) layer for blant-epp.
//!
//! `args` defines the flags, `errors` the CLI error type, and `runner` the
//! parse/validate/launch flow together with the exit-code contract:
//! help and unknown flags exit 0, usage problems and an existing output
//! directory exit 1, anything else exits with the pipeline's own status.
//!
//! If you are embedding the launcher, use `blant_epp::launch` instead.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::main_with;

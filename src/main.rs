//! blant-epp CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse flags, launch the pipeline and
//! exit with the resulting status. For programmatic use, prefer the library
//! API (`blant_epp::launch`).

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let code = cli::main_with(std::env::args_os());
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

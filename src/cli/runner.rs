use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use blant_epp::{Error, LaunchParams, launch};

use super::args::CliArgs;
use super::errors::AppError;

/// What the command line asks for.
#[derive(Debug)]
pub enum Invocation {
    Help,
    Run(CliArgs),
}

/// Parse `argv` (program name first).
///
/// `-h` anywhere or an unknown flag requests help. A flag missing its value is
/// an error. Option values may start with `-`; the first operand ends option
/// parsing and it and everything after it are ignored.
pub fn parse_args<I, T>(argv: I) -> Result<Invocation, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let help_requested = argv.iter().skip(1).any(|a| a == "-h");

    match CliArgs::try_parse_from(&argv) {
        Ok(args) if args.help => Ok(Invocation::Help),
        Ok(args) => Ok(Invocation::Run(args)),
        Err(_) if help_requested => Ok(Invocation::Help),
        Err(e) if e.kind() == ErrorKind::UnknownArgument => Ok(Invocation::Help),
        Err(e) => Err(e.into()),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Validate, create the output directory and run the pipeline. Returns the
/// pipeline's exit code.
pub fn run(args: CliArgs) -> Result<i32, AppError> {
    if args.log {
        init_logging();
    }

    if !args.operands.is_empty() {
        warn!("Ignoring operands: {:?}", args.operands);
    }

    let config = args.config();
    let params = LaunchParams::validate(args.k, args.n, args.e, &config)?;
    debug!("Parameters: {:?}", params);

    let outcome = launch(&params, &config)?;
    info!(
        "Reports: {}, {}, {}",
        outcome.total_report.display(),
        outcome.blant_report.display(),
        outcome.epp_report.display()
    );
    Ok(outcome.exit_code())
}

fn print_help() {
    let help = CliArgs::command().render_help();
    let mut out = std::io::stdout().lock();
    let _ = write!(out, "{help}");
}

fn print_usage() {
    let usage = CliArgs::command().render_usage();
    eprintln!("{usage}");
}

/// Whole CLI flow; returns the process exit code.
pub fn main_with<I, T>(argv: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = match parse_args(argv) {
        Ok(Invocation::Help) => {
            print_help();
            return 0;
        }
        Ok(Invocation::Run(args)) => args,
        Err(AppError::Parse(e)) => {
            let _ = e.print();
            return 1;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    match run(args) {
        Ok(code) => code,
        Err(AppError::Launch(e @ Error::MissingArgument { .. })) => {
            eprintln!("Error: {e}");
            print_usage();
            1
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blant_epp::StatusPolicy;

    fn parse(args: &[&str]) -> Result<Invocation, AppError> {
        parse_args(std::iter::once("blant-epp").chain(args.iter().copied()))
    }

    fn parse_run(args: &[&str]) -> CliArgs {
        match parse(args) {
            Ok(Invocation::Run(a)) => a,
            other => panic!("expected Run for {args:?}, got {other:?}"),
        }
    }

    fn is_help(args: &[&str]) -> bool {
        matches!(parse(args), Ok(Invocation::Help))
    }

    #[test]
    fn short_flags_are_captured_verbatim() {
        let a = parse_run(&["-k", "5", "-n", "100", "-e", "6"]);
        assert_eq!(a.k.as_deref(), Some("5"));
        assert_eq!(a.n.as_deref(), Some("100"));
        assert_eq!(a.e.as_deref(), Some("6"));
        assert!(!a.log);
    }

    #[test]
    fn e_is_optional() {
        let a = parse_run(&["-n", "100", "-k", "5"]);
        assert_eq!(a.e, None);
    }

    #[test]
    fn attached_values_are_accepted() {
        let a = parse_run(&["-k5", "-n100"]);
        assert_eq!((a.k.as_deref(), a.n.as_deref()), (Some("5"), Some("100")));
    }

    #[test]
    fn repeated_flag_keeps_last_value() {
        let a = parse_run(&["-k", "4", "-n", "10", "-k", "6"]);
        assert_eq!(a.k.as_deref(), Some("6"));
    }

    #[test]
    fn help_flag_wins_anywhere() {
        assert!(is_help(&["-h"]));
        assert!(is_help(&["-k", "5", "-n", "100", "-h"]));
        assert!(is_help(&["-h", "-k", "5"]));
        assert!(is_help(&["-n", "100", "-h", "-k"]));
    }

    #[test]
    fn unknown_flag_behaves_like_help() {
        assert!(is_help(&["-x"]));
        assert!(is_help(&["-k", "5", "-n", "100", "-q"]));
        assert!(is_help(&["--bogus"]));
    }

    #[test]
    fn values_may_start_with_a_hyphen() {
        let a = parse_run(&["-k", "-5", "-n", "-100", "-e", "-2"]);
        assert_eq!(a.k.as_deref(), Some("-5"));
        assert_eq!(a.n.as_deref(), Some("-100"));
        assert_eq!(a.e.as_deref(), Some("-2"));

        let params = LaunchParams::validate(a.k, a.n, None, &Default::default()).unwrap();
        assert_eq!(blant_epp::output_dir_name(&params), "k-5-n-100-e8-output");
    }

    #[test]
    fn help_still_wins_when_taken_as_a_value() {
        assert!(is_help(&["-k", "-h", "-n", "100"]));
    }

    #[test]
    fn trailing_operands_are_ignored() {
        let a = parse_run(&["-k", "5", "-n", "100", "stray", "extra"]);
        assert_eq!((a.k.as_deref(), a.n.as_deref()), (Some("5"), Some("100")));
        assert_eq!(a.operands, ["stray", "extra"]);
    }

    #[test]
    fn flag_without_value_is_an_error() {
        for args in [&["-k"][..], &["-k", "5", "-n"], &["-k", "5", "-n", "100", "-e"]] {
            match parse(args) {
                Err(AppError::Parse(e)) => {
                    assert_ne!(e.kind(), ErrorKind::UnknownArgument);
                }
                other => panic!("expected parse error for {args:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_value_error_names_the_option() {
        match parse(&["-k", "5", "-n", "100", "-e"]) {
            Err(AppError::Parse(e)) => assert!(e.to_string().contains("-e")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn long_options_override_config() {
        let a = parse_run(&[
            "-k",
            "5",
            "-n",
            "100",
            "--blant",
            "/opt/blant/blant",
            "--epp",
            "/opt/epp/epp",
            "--time",
            "/bin/time",
            "--graph",
            "g.el",
            "--status-policy",
            "any-stage",
        ]);
        let config = a.config();
        assert_eq!(config.blant, std::path::PathBuf::from("/opt/blant/blant"));
        assert_eq!(config.epp, std::path::PathBuf::from("/opt/epp/epp"));
        assert_eq!(config.time, std::path::PathBuf::from("/bin/time"));
        assert_eq!(config.input_graph, std::path::PathBuf::from("g.el"));
        assert_eq!(config.status_policy, StatusPolicy::AnyStage);
        assert_eq!(config.default_e, "8");
    }

    #[test]
    fn missing_required_flags_fail_before_any_io() {
        for args in [&[] as &[&str], &["-k", "5"], &["-n", "100"], &["-e", "3"]] {
            let a = parse_run(args);
            match run(a) {
                Err(AppError::Launch(Error::MissingArgument { .. })) => {}
                other => panic!("expected missing argument for {args:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn exit_codes_for_help_and_usage() {
        assert_eq!(main_with(["blant-epp", "-h"]), 0);
        assert_eq!(main_with(["blant-epp", "-z"]), 0);
        assert_eq!(main_with(["blant-epp", "-k", "5"]), 1);
        assert_eq!(main_with(["blant-epp", "-k", "5", "-n"]), 1);
    }
}

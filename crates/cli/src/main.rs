//! Gatecheck CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use gatecheck::cli::Cli;
use gatecheck::error::ExitCode;

mod cmd_run;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GATECHECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cmd_run::run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("gatecheck: {}", e);
            match e.downcast_ref::<gatecheck::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

// rpncalc: interactive RPN calculator over standard input

use std::io;

use clap::Parser;
use crossterm::tty::IsTty;
use tracing_subscriber::EnvFilter;

use rpncalc::config::{Cli, LOG_ENV};
use rpncalc::session::Session;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.default_log_level());

    let stdout = io::stdout();
    let config = cli.session_config(stdout.is_tty());

    let mut session = Session::new(config);
    let stdin = io::stdin();
    let mut output = stdout.lock();
    session.run(stdin.lock(), &mut output)?;

    Ok(())
}

/// Logs go to stderr; stdout carries only calculator output
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

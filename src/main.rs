// src/main.rs

use anyhow::Result;
use clap::Parser;
use nomoemo::cli::Cli;
use nomoemo::config::Config;
use nomoemo::errors::Error;
use nomoemo::prompt::StdinConfirm;
use nomoemo::report::{ConsoleReporter, Reporter};
use nomoemo::run;
use nomoemo::signal::setup_signal_handler;
use std::path::Path;

fn main() -> Result<()> {
    // Developer diagnostics only, controlled by RUST_LOG; every
    // user-facing line goes through the reporter below.
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // Mode-flag conflicts and --quiet/--verbose clashes never get past
    // the parser; it exits with the usage error itself.
    let cli = Cli::parse();

    let mut reporter = ConsoleReporter::new(
        cli.quiet,
        cli.verbose,
        cli.log.as_deref().map(Path::new),
    );

    reporter.info(&format!("nomoemo v{}", env!("CARGO_PKG_VERSION")));

    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            reporter.error(&e.to_string());
            std::process::exit(1);
        }
    };
    log::debug!("Resolved configuration: {:?}", config);

    let token = setup_signal_handler()?;
    let mut confirm = StdinConfirm;

    let result = run(&config, &token, &mut reporter, &mut confirm);

    if let Err(e) = result {
        match e {
            Error::Interrupted => {
                reporter.info("Operation cancelled by user.");
                std::process::exit(130);
            }
            Error::TargetNotFound { .. } => {
                reporter.error(&e.to_string());
                std::process::exit(1);
            }
            _ => {
                reporter.error(&format!("Unexpected error: {e}"));
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

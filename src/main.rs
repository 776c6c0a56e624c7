mod cli;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, USAGE};
use skillcheck::{config, Level, Outcome, Validator};

fn main() -> Result<()> {
    // Anything but a single skill directory, --help and --version included,
    // gets the one-line usage.
    let Ok(cli) = Cli::try_parse() else {
        usage_exit();
    };
    let [skill_dir] = cli.paths.as_slice() else {
        usage_exit();
    };

    init_tracing(if cli.verbose { "debug" } else { "warn" });

    let cfg = config::load_or_default(cli.config.as_deref())?;
    let outcome = Validator::new(cfg).validate(skill_dir)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_report(&outcome);
    }
    if !outcome.valid {
        std::process::exit(1);
    }
    Ok(())
}

fn usage_exit() -> ! {
    println!("{USAGE}");
    std::process::exit(1);
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn print_report(outcome: &Outcome) {
    if !std::io::stdout().is_terminal() {
        println!("{}", outcome.report());
        return;
    }
    for diagnostic in &outcome.diagnostics {
        let line = diagnostic.to_string();
        match diagnostic.level {
            Level::Success => println!("{}", line.green()),
            Level::Warning => println!("{}", line.yellow()),
            Level::Error => println!("{}", line.bold().red()),
        }
    }
}

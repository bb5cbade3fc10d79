//! Athenaeum CLI - library lending desk
//!
//! Usage: athenaeum [--config FILE] [--seed FILE] [--json] [-v...] <COMMAND>
//!
//! Commands:
//!   classify  Classify an author by book count
//!   search    Search the catalog by title or author
//!   login     Check credentials
//!   borrow    Borrow the first available copy of a book
//!   return    Return a loan
//!   loans     List a member's borrowed books
//!   block     Block a member
//!   unblock   Unblock a member

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::{warn, Level};
use tracing_subscriber::EnvFilter;

use athenaeum::config::{Config, OutputFormat};
use athenaeum::presentation::{Cli, Renderer};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::resolve(cli.config.as_deref(), &cwd)?;

    init_tracing(cli.verbose, config.output.verbosity.log_level());
    for warning in &warnings {
        warn!("{warning}");
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    let seed = cli.seed.or(config.seed.path);

    let output = commands::run(cli.command, seed.as_deref(), Renderer::new(format))?;
    print!("{output}");
    Ok(())
}

/// `RUST_LOG` wins, then `-v` count, then the configured verbosity
fn init_tracing(verbose: u8, configured: Level) {
    let level = match verbose {
        0 => configured,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

use std::io::{Write, stdin, stdout};

use anyhow::{Context, Result};
use clap::Parser;
use tl_core::SystemClock;
use tracing_subscriber::EnvFilter;

use tl_cli::commands::{
    add, calendar, edit, export, import, init, line, list, remove, rename, summary,
};
use tl_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let clock = SystemClock;
    let mut out = stdout().lock();

    match &cli.command {
        Some(Commands::Init { name }) => init::run(&mut out, &config, name.as_deref())?,
        Some(Commands::Add(args)) => add::run(&mut out, &config, args, &clock)?,
        Some(Commands::Edit(args)) => edit::run(&mut out, &config, args)?,
        Some(Commands::Remove { id }) => remove::run(&mut out, &config, id)?,
        Some(Commands::Rename { name }) => rename::run(&mut out, &config, name)?,
        Some(Commands::List { json }) => list::run(&mut out, &config, *json, &clock)?,
        Some(Commands::Summary { json }) => summary::run(&mut out, &config, *json, &clock)?,
        Some(Commands::Calendar) => calendar::run(&mut out, &config, &clock)?,
        Some(Commands::Line { vertical }) => line::run(&mut out, &config, *vertical, &clock)?,
        Some(Commands::Export) => export::run(&mut out, &config)?,
        Some(Commands::Import { blob }) => {
            import::run(&mut out, &mut stdin().lock(), &config, blob.as_deref())?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(out)?;
        }
    }

    Ok(())
}

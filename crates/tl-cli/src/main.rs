use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tl_cli::commands::{geometry, lanes, rename, show, util};
use tl_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so JSON output on stdout stays parseable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Lanes { file, json }) => {
            let items = util::load_items(file.as_deref())?;
            lanes::run(&mut out, &items, *json)?;
        }
        Some(Commands::Geometry { file, json }) => {
            let items = util::load_items(file.as_deref())?;
            geometry::run(&mut out, &items, *json, config.day_view_threshold)?;
        }
        Some(Commands::Show { file, width }) => {
            let items = util::load_items(file.as_deref())?;
            let width = config.effective_chart_width(*width);
            show::run(&mut out, &items, width, config.day_view_threshold)?;
        }
        Some(Commands::Rename { file, id, name }) => {
            let items = util::load_items(file.as_deref())?;
            rename::run(&mut out, &items, *id, name)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    out.flush()?;
    Ok(())
}

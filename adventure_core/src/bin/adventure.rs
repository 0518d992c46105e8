//! Console entry point for the text adventure.

use adventure_core::{sample_world, AliasTable, Repl, Session};
use anyhow::{Context, Result};
use clap::Parser;
use game_world::World;
use std::path::PathBuf;

/// Play a text adventure described by a JSON world file
#[derive(Parser)]
#[command(name = "adventure")]
#[command(about = "Play a text adventure", long_about = None)]
#[command(version)]
struct Cli {
    /// World description to load; the bundled sample world when omitted
    world: Option<PathBuf>,

    /// TOML file replacing the standard alias table
    #[arg(long, value_name = "FILE")]
    aliases: Option<PathBuf>,

    /// Log more detail on stderr (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Warnings only by default so log lines stay out of the game text.
fn log_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = log_level(cli.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let world = match &cli.world {
        Some(path) => World::load(path)
            .with_context(|| format!("could not load world from {}", path.display()))?,
        None => sample_world().context("bundled sample world is invalid")?,
    };

    let mut session = Session::new(world);
    if let Some(path) = &cli.aliases {
        let aliases = AliasTable::load(path)
            .with_context(|| format!("could not load aliases from {}", path.display()))?;
        session = session.with_aliases(aliases);
    }

    Repl::new(session)?.run()?;
    Ok(())
}

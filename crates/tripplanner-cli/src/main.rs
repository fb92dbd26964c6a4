mod commands;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use tripplanner_cli::output::OutputFormat;
use tripplanner_cli::terminal::ColorPalette;
use tripplanner_lib::{load_catalog, Catalog};

use commands::cities::handle_cities;
use commands::recommend::{handle_recommend, RecommendArgs};
use commands::search::{handle_search, SearchArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Budget-aware route search between cities")]
struct Cli {
    /// JSON catalog to use instead of the built-in city table.
    #[arg(long, global = true, env = "TRIPPLANNER_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the cheapest and fastest routes between two cities.
    Search(SearchArgs),
    /// List affordable destinations from a city.
    Recommend(RecommendArgs),
    /// Show the city catalog and its declared routes.
    Cities,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let catalog = resolve_catalog(cli.catalog.as_deref())?;
    let palette = ColorPalette::detect();

    match cli.command {
        Command::Search(args) => handle_search(&catalog, cli.format, &palette, &args),
        Command::Recommend(args) => handle_recommend(&catalog, cli.format, &palette, &args),
        Command::Cities => handle_cities(&catalog, cli.format, &palette),
    }
}

fn resolve_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => load_catalog(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

/// Log to stderr so JSON on stdout stays machine-readable.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

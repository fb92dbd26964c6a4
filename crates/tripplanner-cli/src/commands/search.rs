//! Search command handler.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use tripplanner_cli::output::{write_search, OutputFormat};
use tripplanner_cli::terminal::ColorPalette;
use tripplanner_lib::{search_route, Catalog, PlannerConfig};

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Origin city name.
    #[arg(long = "from")]
    pub from: String,
    /// Destination city name.
    #[arg(long = "to")]
    pub to: String,
    /// Spending limit; `inf` lifts it.
    #[arg(long, allow_negative_numbers = true)]
    pub budget: f64,
    /// Intermediate stops allowed on a route.
    #[arg(long)]
    pub max_stops: Option<usize>,
    /// Number of candidate routes to list.
    #[arg(long)]
    pub limit: Option<usize>,
}

impl SearchArgs {
    pub fn to_config(&self) -> PlannerConfig {
        let mut config = PlannerConfig::default();
        if let Some(max_stops) = self.max_stops {
            config = config.with_max_stops(max_stops);
        }
        if let Some(limit) = self.limit {
            config = config.with_max_results(limit);
        }
        config
    }
}

pub fn handle_search(
    catalog: &Catalog,
    format: OutputFormat,
    palette: &ColorPalette,
    args: &SearchArgs,
) -> Result<()> {
    let config = args.to_config();
    let bundle = search_route(catalog, &config, &args.from, &args.to, args.budget)
        .with_context(|| format!("failed to search routes from {} to {}", args.from, args.to))?;
    debug!(found = bundle.is_some(), "search finished");

    let mut stdout = io::stdout().lock();
    write_search(
        &mut stdout,
        format,
        palette,
        &args.from,
        &args.to,
        args.budget,
        bundle.as_ref(),
    )?;
    stdout.flush()?;
    Ok(())
}

//! Recommend command handler.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;

use tripplanner_cli::output::{write_recommendations, OutputFormat};
use tripplanner_cli::terminal::ColorPalette;
use tripplanner_lib::{recommend_routes, Catalog, PlannerConfig};

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    /// Origin city name.
    #[arg(long = "from")]
    pub from: String,
    /// Spending limit; `inf` lifts it.
    #[arg(long, allow_negative_numbers = true)]
    pub budget: f64,
    /// Intermediate stops allowed on the way to each destination.
    #[arg(long, default_value_t = 0)]
    pub stops: usize,
}

pub fn handle_recommend(
    catalog: &Catalog,
    format: OutputFormat,
    palette: &ColorPalette,
    args: &RecommendArgs,
) -> Result<()> {
    let config = PlannerConfig::default().with_recommend_stops(args.stops);
    let routes = recommend_routes(catalog, &config, &args.from, args.budget)
        .with_context(|| format!("failed to recommend destinations from {}", args.from))?;

    let mut stdout = io::stdout().lock();
    write_recommendations(&mut stdout, format, palette, &args.from, args.budget, &routes)?;
    stdout.flush()?;
    Ok(())
}

use std::io::{self, Write};

use anyhow::Result;

use tripplanner_cli::output::{write_catalog, OutputFormat};
use tripplanner_cli::terminal::ColorPalette;
use tripplanner_lib::Catalog;

pub fn handle_cities(catalog: &Catalog, format: OutputFormat, palette: &ColorPalette) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write_catalog(&mut stdout, format, palette, catalog)?;
    stdout.flush()?;
    Ok(())
}

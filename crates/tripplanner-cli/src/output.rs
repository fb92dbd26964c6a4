//! Rendering of search results, recommendations, and the catalog.
//!
//! Every renderer writes to a caller-supplied sink so the binary can target
//! stdout while tests capture into a buffer.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use tripplanner_lib::{CandidateRoute, Catalog, ResultBundle};

use crate::terminal::ColorPalette;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON matching the HTTP service payloads.
    Json,
}

#[derive(Serialize)]
struct Recommendations<'a> {
    recommendations: &'a [CandidateRoute],
}

/// One-line summary: path followed by the four totals.
pub fn format_route(route: &CandidateRoute) -> String {
    format!(
        "{} ({:.2} km, cost {:.2}, CO2 {:.2} kg, {:.2} h)",
        route.path.join(" -> "),
        route.total_distance_km,
        route.total_cost,
        route.total_co2,
        route.total_duration_h
    )
}

/// Budgets are printed with two decimals; infinity reads as "unlimited".
pub fn format_budget(budget: f64) -> String {
    if budget.is_infinite() {
        "unlimited".to_string()
    } else {
        format!("{budget:.2}")
    }
}

/// Render the outcome of a route search.
pub fn write_search<W: Write>(
    out: &mut W,
    format: OutputFormat,
    palette: &ColorPalette,
    origin: &str,
    destination: &str,
    budget: f64,
    bundle: Option<&ResultBundle>,
) -> Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &bundle)?;
        writeln!(out)?;
        return Ok(());
    }

    let Some(bundle) = bundle else {
        writeln!(
            out,
            "{}No route from {} to {} within budget {}.{}",
            palette.orange,
            origin,
            destination,
            format_budget(budget),
            palette.reset
        )?;
        return Ok(());
    };

    writeln!(
        out,
        "{}Routes from {} to {} (budget {}):{}",
        palette.white_bold,
        origin,
        destination,
        format_budget(budget),
        palette.reset
    )?;
    writeln!(out, "Cheapest: {}", format_route(&bundle.cheapest))?;
    write_legs(out, palette, &bundle.cheapest)?;
    writeln!(out, "Fastest:  {}", format_route(&bundle.shortest))?;
    write_legs(out, palette, &bundle.shortest)?;

    writeln!(out, "\nCandidates ({}):", bundle.all_routes.len())?;
    for (index, route) in bundle.all_routes.iter().enumerate() {
        writeln!(out, "{:>3}. {}", index + 1, format_route(route))?;
    }
    Ok(())
}

fn write_legs<W: Write>(out: &mut W, palette: &ColorPalette, route: &CandidateRoute) -> Result<()> {
    for leg in &route.legs {
        let declared = if leg.declared { ", declared" } else { "" };
        writeln!(
            out,
            "    {}{} -> {}: {:.2} km{} {}[{}{}]{}",
            palette.gray,
            leg.from,
            leg.to,
            leg.distance_km,
            palette.reset,
            palette.mode(leg.mode),
            leg.mode,
            declared,
            palette.reset
        )?;
    }
    Ok(())
}

/// Render recommended destinations, cheapest first.
pub fn write_recommendations<W: Write>(
    out: &mut W,
    format: OutputFormat,
    palette: &ColorPalette,
    origin: &str,
    budget: f64,
    routes: &[CandidateRoute],
) -> Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(
            &mut *out,
            &Recommendations {
                recommendations: routes,
            },
        )?;
        writeln!(out)?;
        return Ok(());
    }

    if routes.is_empty() {
        writeln!(
            out,
            "{}No destinations from {} within budget {}.{}",
            palette.orange,
            origin,
            format_budget(budget),
            palette.reset
        )?;
        return Ok(());
    }

    writeln!(
        out,
        "{}Destinations from {} (budget {}):{}",
        palette.white_bold,
        origin,
        format_budget(budget),
        palette.reset
    )?;
    for (index, route) in routes.iter().enumerate() {
        let destination = route.destination().unwrap_or("<unknown>");
        writeln!(
            out,
            "{:>3}. {}{}{}: {}",
            index + 1,
            palette.green,
            destination,
            palette.reset,
            format_route(route)
        )?;
    }
    Ok(())
}

/// Render the catalog: cities with coordinates, then declared routes.
pub fn write_catalog<W: Write>(
    out: &mut W,
    format: OutputFormat,
    palette: &ColorPalette,
    catalog: &Catalog,
) -> Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &catalog.to_file())?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "{}Cities ({}):{}",
        palette.white_bold,
        catalog.len(),
        palette.reset
    )?;
    for city in catalog.cities() {
        writeln!(
            out,
            " - {} {}({:.4}, {:.4}){}",
            city.name, palette.gray, city.position.lat, city.position.lon, palette.reset
        )?;
    }

    let routes = catalog.declared_routes();
    writeln!(
        out,
        "\n{}Declared routes ({}):{}",
        palette.white_bold,
        routes.len(),
        palette.reset
    )?;
    for (a, b) in routes {
        writeln!(out, " - {a} - {b}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripplanner_lib::{recommend_routes, search_route, PlannerConfig};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        f(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn route_line_lists_all_totals() {
        let catalog = Catalog::builtin();
        let bundle = search_route(&catalog, &PlannerConfig::default(), "Lima", "Arequipa", 200.0)
            .unwrap()
            .unwrap();
        assert_eq!(
            format_route(&bundle.cheapest),
            "Lima -> Arequipa (779.70 km, cost 194.93, CO2 194.93 kg, 2.47 h)"
        );
    }

    #[test]
    fn budget_formatting() {
        assert_eq!(format_budget(12.5), "12.50");
        assert_eq!(format_budget(f64::INFINITY), "unlimited");
    }

    #[test]
    fn text_search_shows_legs_and_candidates() {
        let catalog = Catalog::builtin();
        let bundle = search_route(&catalog, &PlannerConfig::default(), "Lima", "Arequipa", 300.0)
            .unwrap();
        let text = render(|out| {
            write_search(
                out,
                OutputFormat::Text,
                &ColorPalette::plain(),
                "Lima",
                "Arequipa",
                300.0,
                bundle.as_ref(),
            )
        });
        assert!(text.starts_with("Routes from Lima to Arequipa (budget 300.00):"));
        assert!(text.contains("    Lima -> Arequipa: 779.70 km [air, declared]"));
        assert!(text.contains("Candidates (3):"));
        assert!(text.contains("  3. Lima -> Puno -> Arequipa"));
    }

    #[test]
    fn json_search_without_result_is_null() {
        let text = render(|out| {
            write_search(
                out,
                OutputFormat::Json,
                &ColorPalette::plain(),
                "Lima",
                "Arequipa",
                100.0,
                None,
            )
        });
        assert_eq!(text.trim(), "null");
    }

    #[test]
    fn json_recommendations_are_wrapped() {
        let catalog = Catalog::builtin();
        let routes =
            recommend_routes(&catalog, &PlannerConfig::default(), "Lima", 130.0).unwrap();
        let text = render(|out| {
            write_recommendations(
                out,
                OutputFormat::Json,
                &ColorPalette::plain(),
                "Lima",
                130.0,
                &routes,
            )
        });
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let list = value["recommendations"].as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["path"], serde_json::json!(["Lima", "Trujillo"]));
        assert!(list[0].get("legs").is_none());
    }

    #[test]
    fn empty_recommendations_explain_themselves() {
        let text = render(|out| {
            write_recommendations(
                out,
                OutputFormat::Text,
                &ColorPalette::plain(),
                "Lima",
                0.0,
                &[],
            )
        });
        assert_eq!(text, "No destinations from Lima within budget 0.00.\n");
    }

    #[test]
    fn catalog_text_lists_declared_routes() {
        let catalog = Catalog::builtin();
        let text =
            render(|out| write_catalog(out, OutputFormat::Text, &ColorPalette::plain(), &catalog));
        assert!(text.contains("Cities (9):"));
        assert!(text.contains(" - Lima (-12.0464, -77.0428)"));
        assert!(text.contains(" - Lima - Cusco"));
        assert!(text.contains("Declared routes (6):"));
    }
}

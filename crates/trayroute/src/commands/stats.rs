use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use trayroute::config::{Config, OutputFormat};
use trayroute::project::ProjectFile;
use trayroute::routing::ProjectSource;
use trayroute::stats::project_stats;

pub fn run(file: &Path, project: i64, format: Option<OutputFormat>) -> Result<()> {
    let config = Config::load_or_default();
    let file = ProjectFile::load(file)?;
    let racks = file.racks(project)?;
    let trays = file.trays(project)?;
    let stats = project_stats(&racks, &trays, &file.data.project_routes(project));

    match super::resolve_format(format, &config) {
        OutputFormat::Json => super::print_json(&stats),
        OutputFormat::Text => {
            println!("{} {project}", "Project".bold());
            println!("  {:<14} {}", "Racks", stats.racks);
            println!(
                "  {:<14} {}  ({} free / {} attention / {} critical)",
                "Trays",
                stats.trays,
                stats.tray_status.free.to_string().green(),
                stats.tray_status.attention.to_string().yellow(),
                stats.tray_status.critical.to_string().red()
            );
            println!(
                "  {:<14} {}  ({:.0} m)",
                "Routes", stats.routes, stats.route_distance_m
            );
            match &stats.busiest_tray {
                Some(busiest) => println!(
                    "  {:<14} {}  {}/{} ({}%)",
                    "Busiest tray",
                    busiest.name,
                    busiest.occupancy,
                    busiest.max_capacity,
                    busiest.percent
                ),
                None => println!("  {:<14} -", "Busiest tray"),
            }
            Ok(())
        }
    }
}

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use trayroute::config::{Config, OutputFormat};
use trayroute::project::{ProjectFile, RouteStatus};

pub fn run(file: &Path, project: i64, format: Option<OutputFormat>) -> Result<()> {
    let config = Config::load_or_default();
    let file = ProjectFile::load(file)?;
    let routes = file.data.project_routes(project);

    match super::resolve_format(format, &config) {
        OutputFormat::Json => super::print_json(&routes),
        OutputFormat::Text => {
            if routes.is_empty() {
                println!("No confirmed routes in project {project}");
                return Ok(());
            }
            for (i, route) in routes.iter().enumerate() {
                let status = match route.status {
                    RouteStatus::Active => route.status.to_string().green(),
                    RouteStatus::Retired => route.status.to_string().dimmed(),
                };
                let distance = format!("{:.2} m", route.distance_m);
                println!(
                    "{:>3}. {:<24} rack {} → rack {}  {}  {} segment(s)  {status}",
                    i + 1,
                    route.name,
                    route.source_rack,
                    route.destination_rack,
                    distance.as_str().cyan(),
                    route.segment_ids.len()
                );
            }
            Ok(())
        }
    }
}

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use trayroute::config::{Config, OutputFormat};
use trayroute::project::{ConfirmedRoute, ProjectFile, RouteSink};
use trayroute::routing::plan_route;
use trayroute::routing::types::{Rack, RackId, Route};

pub struct RouteArgs {
    pub file: PathBuf,
    pub project: i64,
    pub from: RackId,
    pub to: RackId,
    pub format: Option<OutputFormat>,
    pub confirm: bool,
    pub name: Option<String>,
}

#[derive(Serialize)]
struct RouteReport<'a> {
    #[serde(flatten)]
    route: &'a Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirmed_as: Option<&'a str>,
}

pub fn run(args: RouteArgs) -> Result<()> {
    let config = Config::load_or_default();
    let format = super::resolve_format(args.format, &config);
    let mut file = ProjectFile::load(&args.file)?;

    let route = plan_route(
        &file,
        args.project,
        args.from,
        args.to,
        &config.network_options(),
    )?;

    let confirmed_as = if args.confirm {
        let record = ConfirmedRoute::new(
            args.project,
            args.from,
            args.to,
            &route,
            args.name.clone(),
        );
        let name = record.name.clone();
        file.confirm(record)?;
        Some(name)
    } else {
        None
    };

    match format {
        OutputFormat::Json => super::print_json(&RouteReport {
            route: &route,
            confirmed_as: confirmed_as.as_deref(),
        }),
        OutputFormat::Text => {
            print_route(&file, &args, &route);
            if let Some(name) = confirmed_as {
                println!(
                    "\n{} \"{name}\" saved to {}",
                    "Confirmed".green().bold(),
                    file.path().display()
                );
            }
            Ok(())
        }
    }
}

fn rack_label(racks: &[Rack], id: RackId) -> String {
    racks
        .iter()
        .find(|r| r.id == id)
        .map(|r| {
            let tile = r.position.tile_label();
            format!("{} {}", r.display_name(), tile.as_str().dimmed())
        })
        .unwrap_or_else(|| format!("rack #{id}"))
}

fn print_route(file: &ProjectFile, args: &RouteArgs, route: &Route) {
    let racks = &file.data.racks;
    let distance = format!("{:.2}", route.distance_m);
    println!(
        "{} {} {} {}",
        "Route".bold(),
        rack_label(racks, args.from),
        "→".dimmed(),
        rack_label(racks, args.to)
    );
    println!(
        "  {} m over {} tiles, {} tray segment(s)",
        distance.as_str().cyan().bold(),
        route.steps,
        route.segments.len()
    );
    for (i, segment) in route.segments.iter().enumerate() {
        let load = format!("{}/{}", segment.occupancy, segment.max_capacity);
        let load = if segment.occupancy >= segment.max_capacity {
            load.as_str().red()
        } else {
            load.as_str().normal()
        };
        println!(
            "  {:>2}. {:<16} {} → {}  load {}",
            i + 1,
            segment.display_name(),
            segment.a,
            segment.b,
            load
        );
    }
}

use anyhow::Result;
use colored::Colorize;

use trayroute::config::{Config, OutputFormat};
use trayroute::layout::suggest_grid;
use trayroute::routing::types::{Orientation, TILE_MM};

pub fn run(width: u32, height: u32, capacity: Option<u32>, format: Option<OutputFormat>) -> Result<()> {
    let config = Config::load_or_default();
    let capacity = capacity.unwrap_or_else(|| config.default_capacity());
    let suggestions = suggest_grid(width, height, capacity);

    match super::resolve_format(format, &config) {
        OutputFormat::Json => super::print_json(&suggestions),
        OutputFormat::Text => {
            println!(
                "{} {}×{} tiles ({width}×{height} mm), {} tray run(s)",
                "Floor".bold(),
                width / TILE_MM,
                height / TILE_MM,
                suggestions.len()
            );
            for s in &suggestions {
                let kind = match s.orientation {
                    Orientation::Horizontal => "H",
                    _ => "V",
                };
                println!(
                    "  {} {} → {}  capacity {}",
                    kind.cyan(),
                    s.a,
                    s.b,
                    s.max_capacity
                );
            }
            Ok(())
        }
    }
}

use anyhow::Result;
use serde::Serialize;

use trayroute::config::{Config, OutputFormat};
use trayroute::routing::types::GridPoint;

#[derive(Serialize)]
struct TileReport {
    tile: GridPoint,
    label: String,
}

pub fn run(x_mm: i64, y_mm: i64, format: Option<OutputFormat>) -> Result<()> {
    let config = Config::load_or_default();
    let tile = GridPoint::from_mm(x_mm, y_mm);
    let report = TileReport {
        tile,
        label: tile.tile_label(),
    };

    match super::resolve_format(format, &config) {
        OutputFormat::Json => super::print_json(&report),
        OutputFormat::Text => {
            println!("{}  {}", report.tile, report.label);
            Ok(())
        }
    }
}

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use trayroute::alerts::{AlertLevel, occupancy_alerts};
use trayroute::config::{Config, OutputFormat};
use trayroute::project::ProjectFile;
use trayroute::routing::ProjectSource;

pub fn run(file: &Path, project: i64, format: Option<OutputFormat>) -> Result<()> {
    let config = Config::load_or_default();
    let file = ProjectFile::load(file)?;
    let trays = file.trays(project)?;
    let alerts = occupancy_alerts(&trays, config.alert_thresholds());

    match super::resolve_format(format, &config) {
        OutputFormat::Json => super::print_json(&alerts),
        OutputFormat::Text => {
            if alerts.is_empty() {
                println!("{} all {} tray(s) within capacity", "OK".green().bold(), trays.len());
                return Ok(());
            }
            for alert in &alerts {
                let tag = match alert.level {
                    AlertLevel::Critical => "CRITICAL".red().bold(),
                    AlertLevel::Warning => "WARNING".yellow().bold(),
                    AlertLevel::Info => "INFO".blue().bold(),
                };
                println!("{tag:>8} {}", alert.message);
            }
            Ok(())
        }
    }
}

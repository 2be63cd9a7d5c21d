pub mod alerts;
pub mod completion;
pub mod config;
pub mod retire;
pub mod route;
pub mod routes;
pub mod stats;
pub mod suggest;
pub mod tile;

use serde::Serialize;
use trayroute::config::{Config, OutputFormat};

/// Pick the explicit format if given, otherwise the configured one.
fn resolve_format(format: Option<OutputFormat>, config: &Config) -> OutputFormat {
    format.unwrap_or_else(|| config.output_format())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

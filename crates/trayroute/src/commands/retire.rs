use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use trayroute::project::{ProjectFile, RouteSink};

pub fn run(file: &Path, project: i64, number: usize) -> Result<()> {
    let mut file = ProjectFile::load(file)?;
    let retired = file.retire(project, number)?;
    println!(
        "{} \"{}\", released {} tray segment(s) in {}",
        "Retired".yellow().bold(),
        retired.name,
        retired.segment_ids.len(),
        file.path().display()
    );
    Ok(())
}

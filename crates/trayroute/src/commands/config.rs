use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use trayroute::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = Config::load_or_default();
            if let Ok(path) = Config::path() {
                let state = if path.exists() { "" } else { " (not created yet)" };
                eprintln!("{} {}{state}", "Config:".dimmed(), path.display());
            }
            print!("{}", serde_yaml::to_string(&config.effective())?);
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            let path = config.save()?;
            println!(
                "{} {key} = {value} {}",
                "Set".green().bold(),
                format!("({})", path.display()).dimmed()
            );
            Ok(())
        }
    }
}

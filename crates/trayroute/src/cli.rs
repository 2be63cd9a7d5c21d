use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use trayroute::config::OutputFormat;

#[derive(Parser)]
#[command(name = "trayroute")]
#[command(version, about)]
#[command(long_about = "Cable-tray route planning for data-center floors.\n\n\
    Racks and trays live in a project snapshot (YAML or JSON). Positions are\n\
    grid tiles of 600 mm.\n\n\
    Examples:\n  \
    trayroute route hall.yaml --project 1 --from 3 --to 8     Plan a route\n  \
    trayroute route hall.yaml --project 1 --from 3 --to 8 --confirm\n  \
    trayroute suggest --width 24000 --height 18000           Suggest a tray grid\n  \
    trayroute alerts hall.yaml --project 1                   Show occupancy alerts\n  \
    trayroute stats hall.yaml --project 1                    Summarise a project\n  \
    trayroute tile --x-mm 1250 --y-mm 700                    Name the tile at a position")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan the shortest tray route between two racks
    Route {
        /// Project snapshot file
        file: PathBuf,

        /// Project id
        #[arg(short, long)]
        project: i64,

        /// Source rack id
        #[arg(long)]
        from: i64,

        /// Destination rack id
        #[arg(long)]
        to: i64,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Record the route and update tray occupancy in the snapshot
        #[arg(long)]
        confirm: bool,

        /// Name for the confirmed route
        #[arg(long, requires = "confirm")]
        name: Option<String>,
    },

    /// Suggest a regular tray grid for a floor footprint
    Suggest {
        /// Floor width in millimetres
        #[arg(long)]
        width: u32,

        /// Floor height in millimetres
        #[arg(long)]
        height: u32,

        /// Capacity of each suggested tray (defaults to the configured capacity)
        #[arg(long)]
        capacity: Option<u32>,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Report trays close to or over capacity
    Alerts {
        /// Project snapshot file
        file: PathBuf,

        /// Project id
        #[arg(short, long)]
        project: i64,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List a project's confirmed routes
    Routes {
        /// Project snapshot file
        file: PathBuf,

        /// Project id
        #[arg(short, long)]
        project: i64,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Retire a confirmed route and release its tray occupancy
    Retire {
        /// Project snapshot file
        file: PathBuf,

        /// Project id
        #[arg(short, long)]
        project: i64,

        /// Route number as shown by `trayroute routes`
        #[arg(long)]
        route: usize,
    },

    /// Summarise a project's racks, trays and routes
    Stats {
        /// Project snapshot file
        file: PathBuf,

        /// Project id
        #[arg(short, long)]
        project: i64,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Convert a floor-plan position in millimetres to its grid tile and label
    Tile {
        /// Distance from the left wall in millimetres
        #[arg(long, allow_negative_numbers = true)]
        x_mm: i64,

        /// Distance from the top wall in millimetres
        #[arg(long, allow_negative_numbers = true)]
        y_mm: i64,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.capacity, planner.strict_geometry, alerts.warning)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    /// Log filter directive implied by the verbosity flags.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Route {
                file,
                project,
                from,
                to,
                format,
                confirm,
                name,
            }) => crate::commands::route::run(crate::commands::route::RouteArgs {
                file,
                project,
                from,
                to,
                format,
                confirm,
                name,
            }),
            Some(Commands::Suggest {
                width,
                height,
                capacity,
                format,
            }) => crate::commands::suggest::run(width, height, capacity, format),
            Some(Commands::Alerts {
                file,
                project,
                format,
            }) => crate::commands::alerts::run(&file, project, format),
            Some(Commands::Routes {
                file,
                project,
                format,
            }) => crate::commands::routes::run(&file, project, format),
            Some(Commands::Retire {
                file,
                project,
                route,
            }) => crate::commands::retire::run(&file, project, route),
            Some(Commands::Stats {
                file,
                project,
                format,
            }) => crate::commands::stats::run(&file, project, format),
            Some(Commands::Tile { x_mm, y_mm, format }) => {
                crate::commands::tile::run(x_mm, y_mm, format)
            }
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                println!("trayroute {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => {
                use clap::CommandFactory;
                let mut cmd = Self::command();
                cmd.print_help()?;
                println!();
                Ok(())
            }
        }
    }
}

use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "stagecal", version, about = "Calendar and timeline layout for production schedules")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Week (or single day) calendar
    Week(commands::week::WeekArgs),
    /// Month calendar, one grid per week row
    Month(commands::month::MonthArgs),
    /// Timeline rows per team member or item kind
    Timeline(commands::timeline::TimelineArgs),
    /// Raw lane layout for an arbitrary window
    Layout(commands::layout::LayoutArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Logs go to stderr, filtered by `STAGECAL_LOG` (default `warn`).
/// Colour only when stderr is a terminal.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("STAGECAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Week(args) => commands::week::run(args),
        Commands::Month(args) => commands::month::run(args),
        Commands::Timeline(args) => commands::timeline::run(args),
        Commands::Layout(args) => commands::layout::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

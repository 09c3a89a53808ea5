use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::Args;
use stagecal_core::{layout_between, Config};

use super::load_items;

#[derive(Args)]
pub struct LayoutArgs {
    /// JSON file with an array of schedule items
    #[arg(long)]
    input: PathBuf,
    /// Window start (YYYY-MM-DDTHH:MM:SS)
    #[arg(long)]
    from: NaiveDateTime,
    /// Window end (YYYY-MM-DDTHH:MM:SS)
    #[arg(long)]
    to: NaiveDateTime,
}

/// Raw engine output for one window, always JSON.
pub fn run(args: LayoutArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let items = load_items(&args.input)?;
    let layout = layout_between(args.from, args.to, &items, config.view_options().layout)?;
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

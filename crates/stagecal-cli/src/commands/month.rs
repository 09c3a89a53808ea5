use std::path::PathBuf;

use chrono::{Datelike, Local};
use clap::Args;
use stagecal_core::{Config, MonthView};

use super::{load_items, text_style};
use crate::render::{render_hidden, render_layout, TextStyle};

#[derive(Args)]
pub struct MonthArgs {
    /// JSON file with an array of schedule items
    #[arg(long)]
    input: PathBuf,
    /// Year, defaults to the current year
    #[arg(long)]
    year: Option<i32>,
    /// Month (1-12), defaults to the current month
    #[arg(long)]
    month: Option<u32>,
    /// Print JSON instead of a text grid
    #[arg(long)]
    json: bool,
}

pub fn run(args: MonthArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let options = config.view_options();
    let items = load_items(&args.input)?;
    let today = Local::now().date_naive();

    let view = MonthView::build(
        args.year.unwrap_or(today.year()),
        args.month.unwrap_or(today.month()),
        &items,
        &options,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let style = text_style(&config);
    // Rows repeat the same skipped events; report them once at the end.
    let row_style = TextStyle {
        show_skipped: false,
        ..style
    };
    println!("{}-{:02}", view.year, view.month);
    for row in &view.rows {
        print!("{}", render_layout(&row.layout, &items, &row_style, row.max_lanes));
        if let Some(more) = render_hidden(&row.hidden, &row_style) {
            print!("{more}");
        }
        println!();
    }
    let skipped = view.skipped_ids();
    if style.show_skipped && !skipped.is_empty() {
        println!("skipped: {}", skipped.join(", "));
    }
    Ok(())
}

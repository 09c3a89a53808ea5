use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use stagecal_core::{Config, WeekView};

use super::{load_items, text_style};
use crate::render::render_layout;

#[derive(Args)]
pub struct WeekArgs {
    /// JSON file with an array of schedule items
    #[arg(long)]
    input: PathBuf,
    /// Any date in the week (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Show only the given date instead of its week
    #[arg(long)]
    day: bool,
    /// Print JSON instead of a text grid
    #[arg(long)]
    json: bool,
}

pub fn run(args: WeekArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let options = config.view_options();
    let items = load_items(&args.input)?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let view = if args.day {
        WeekView::for_day(date, &items, &options)
    } else {
        WeekView::for_date(date, &items, &options)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_layout(&view.layout, &items, &text_style(&config), None));
    }
    Ok(())
}

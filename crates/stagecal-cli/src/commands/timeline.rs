use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use stagecal_core::{Config, TimelineView, Window};

use super::{load_items, text_style};
use crate::render::{render_layout, TextStyle};

#[derive(Clone, Copy, ValueEnum)]
pub enum GroupBy {
    /// One row per item kind (project, training, pto)
    Kind,
    /// One row per team member
    Assignee,
}

#[derive(Args)]
pub struct TimelineArgs {
    /// JSON file with an array of schedule items
    #[arg(long)]
    input: PathBuf,
    /// First visible date (YYYY-MM-DD)
    #[arg(long)]
    from: NaiveDate,
    /// Last visible date (YYYY-MM-DD)
    #[arg(long)]
    to: NaiveDate,
    #[arg(long, value_enum, default_value = "assignee")]
    group_by: GroupBy,
    /// Print JSON instead of a text grid
    #[arg(long)]
    json: bool,
}

pub fn run(args: TimelineArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let options = config.view_options();
    let items = load_items(&args.input)?;
    let window = Window::dates(args.from, args.to)?;

    let view = match args.group_by {
        GroupBy::Kind => TimelineView::build(
            &window,
            &items,
            |item| Some(item.kind.as_str().to_string()),
            &options,
        ),
        GroupBy::Assignee => {
            TimelineView::build_multi(&window, &items, |item| item.assignees.clone(), &options)
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let style = text_style(&config);
    let row_style = TextStyle {
        show_skipped: false,
        ..style
    };
    for row in &view.rows {
        println!("== {}", row.key);
        print!("{}", render_layout(&row.layout, &items, &row_style, None));
    }
    let skipped = view.skipped_ids();
    if style.show_skipped && !skipped.is_empty() {
        println!("skipped: {}", skipped.join(", "));
    }
    Ok(())
}

//! Calendar lane layout.
//!
//! This module provides:
//! - Visible windows (day, week, month rows, arbitrary date ranges)
//! - The [`Interval`] trait the engine reads events through
//! - Greedy lane packing of date-ranged events into day-column grids

mod engine;
mod interval;
mod window;

pub use engine::{
    layout, layout_between, layout_with, LaidOutEvent, Layout, LayoutOptions, MalformedEvent,
    MalformedPolicy,
};
pub use interval::{Interval, TimelineEvent};
pub use window::{end_of_day, month_rows, start_of_day, WeekStart, Window};

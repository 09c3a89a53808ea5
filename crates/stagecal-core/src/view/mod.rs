//! Calendar and timeline views built on the layout engine.
//!
//! Each view computes one [`Layout`] per visible window: a week (or a single
//! day) for the week view, one per week row for the month view, and one per
//! group for the timeline view. Nothing is cached between builds.

mod geometry;
mod month;
mod timeline;

pub use geometry::BarGeometry;
pub use month::{MonthRow, MonthView};
pub use timeline::{TimelineRow, TimelineView};

use chrono::NaiveDate;
use serde::Serialize;

use crate::layout::{layout_with, Interval, Layout, LayoutOptions, WeekStart, Window};

/// Options shared by every view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub week_start: WeekStart,
    /// Lanes shown per row before the rest collapse into a "+N more" count
    pub max_lanes: Option<usize>,
    pub layout: LayoutOptions,
}

/// A single-window view: a week, a day, or any date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekView {
    pub layout: Layout,
}

impl WeekView {
    pub fn build<I: Interval>(window: &Window, items: &[I], options: &ViewOptions) -> Self {
        Self {
            layout: layout_with(window, items, options.layout),
        }
    }

    /// The week containing `date`, starting on the configured week day.
    pub fn for_date<I: Interval>(date: NaiveDate, items: &[I], options: &ViewOptions) -> Self {
        let window = Window::week_containing(date, options.week_start);
        Self::build(&window, items, options)
    }

    /// A one-day view of `date`.
    pub fn for_day<I: Interval>(date: NaiveDate, items: &[I], options: &ViewOptions) -> Self {
        Self::build(&Window::day(date), items, options)
    }
}

/// Ids from several layouts' skipped lists, first occurrence order.
pub(crate) fn merge_skipped<'a>(layouts: impl Iterator<Item = &'a Layout>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for layout in layouts {
        for id in layout.skipped_ids() {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TimelineEvent;
    use chrono::Duration;

    #[test]
    fn test_week_view_for_date_uses_week_start() {
        let thursday = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let events = vec![TimelineEvent::all_day("monday", thursday - Duration::days(3), thursday - Duration::days(3))];

        let sunday_first = WeekView::for_date(thursday, &events, &ViewOptions::default());
        assert_eq!(sunday_first.layout.placement("monday").unwrap().start_offset, 1);

        let options = ViewOptions {
            week_start: WeekStart::Monday,
            ..ViewOptions::default()
        };
        let monday_first = WeekView::for_date(thursday, &events, &options);
        assert_eq!(monday_first.layout.placement("monday").unwrap().start_offset, 0);
    }

    #[test]
    fn test_day_view_clips_multi_day_event() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let events = vec![TimelineEvent::all_day("tour", day - Duration::days(2), day + Duration::days(2))];
        let view = WeekView::for_day(day, &events, &ViewOptions::default());
        let placement = view.layout.placement("tour").unwrap();
        assert_eq!((placement.start_offset, placement.span), (0, 1));
    }
}

//! Plain-text rendering of layouts.
//!
//! One line per lane: `#` cells where a bar covers the day, `.` where the
//! lane is free, followed by the titles of the bars in that lane.

use std::fmt::Write;

use stagecal_core::{Layout, ScheduleItem};

#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub day_width: usize,
    pub show_skipped: bool,
}

const LABEL_WIDTH: usize = 9;

fn header(out: &mut String, layout: &Layout, style: &TextStyle) {
    let _ = write!(out, "{:width$}", "", width = LABEL_WIDTH);
    for day in layout.window.days() {
        let _ = write!(out, "{:>width$}", day.format("%d").to_string(), width = style.day_width);
    }
    out.push('\n');
}

/// Render lanes below `max_lanes` (all lanes when `None`).
pub fn render_layout(
    layout: &Layout,
    items: &[ScheduleItem],
    style: &TextStyle,
    max_lanes: Option<usize>,
) -> String {
    let mut out = String::new();
    header(&mut out, layout, style);

    let cap = max_lanes.unwrap_or(usize::MAX);
    for (lane, placements) in layout.lanes().into_iter().enumerate().take(cap) {
        let _ = write!(out, "{:<width$}", format!("lane {lane}"), width = LABEL_WIDTH);
        for column in 0..layout.day_count() {
            let cell = if placements.iter().any(|p| p.covers(column)) { "#" } else { "." };
            out.push_str(&cell.repeat(style.day_width));
        }
        let titles: Vec<String> = placements
            .iter()
            .map(|p| format!("{} [{}]", items[p.index].title, p.event_id))
            .collect();
        let _ = writeln!(out, "  {}", titles.join(", "));
    }

    if style.show_skipped && !layout.skipped.is_empty() {
        let _ = writeln!(out, "skipped: {}", layout.skipped_ids().join(", "));
    }
    out
}

/// A "+N more" line for days with hidden placements.
pub fn render_hidden(hidden: &[usize], style: &TextStyle) -> Option<String> {
    if hidden.iter().all(|&count| count == 0) {
        return None;
    }
    let mut out = format!("{:<width$}", "more", width = LABEL_WIDTH);
    for &count in hidden {
        let cell = if count > 0 { format!("+{count}") } else { String::new() };
        let _ = write!(out, "{:>width$}", cell, width = style.day_width);
    }
    out.push('\n');
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stagecal_core::layout::{end_of_day, start_of_day};
    use stagecal_core::{layout, ItemKind, Window};

    fn oct(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn style() -> TextStyle {
        TextStyle {
            day_width: 3,
            show_skipped: true,
        }
    }

    fn items() -> Vec<ScheduleItem> {
        let mut bad = ScheduleItem::new(ItemKind::Pto, "bad", "Broken", start_of_day(oct(14)), start_of_day(oct(14)));
        bad.end = start_of_day(oct(12));
        vec![
            ScheduleItem::new(ItemKind::Project, "p-1", "Gala", start_of_day(oct(11)), end_of_day(oct(12))),
            ScheduleItem::new(ItemKind::Training, "t-1", "Rigging", start_of_day(oct(12)), end_of_day(oct(12))),
            bad,
        ]
    }

    #[test]
    fn test_render_lanes() {
        let items = items();
        let layout = layout(&Window::dates(oct(11), oct(13)).unwrap(), &items);
        let text = render_layout(&layout, &items, &style(), None);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "          11 12 13");
        assert_eq!(lines[1], "lane 0   ######...  Gala [p-1]");
        assert_eq!(lines[2], "lane 1   ...###...  Rigging [t-1]");
        assert_eq!(lines[3], "skipped: bad");
    }

    #[test]
    fn test_render_respects_lane_cap() {
        let items = items();
        let layout = layout(&Window::dates(oct(11), oct(13)).unwrap(), &items);
        let text = render_layout(&layout, &items, &style(), Some(1));
        assert!(!text.contains("lane 1"));
    }

    #[test]
    fn test_render_hidden() {
        assert_eq!(render_hidden(&[0, 0], &style()), None);
        assert_eq!(
            render_hidden(&[0, 2, 1], &style()).as_deref(),
            Some("more         +2 +1\n")
        );
    }
}

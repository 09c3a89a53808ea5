//! Month grid: one independent layout per week row.

use serde::Serialize;

use super::{merge_skipped, ViewOptions};
use crate::error::LayoutError;
use crate::layout::{layout_with, month_rows, Interval, LaidOutEvent, Layout, Window};

/// One week row of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthRow {
    pub window: Window,
    pub layout: Layout,
    pub max_lanes: Option<usize>,
    /// Per day-column count of placements beyond `max_lanes`
    pub hidden: Vec<usize>,
}

impl MonthRow {
    fn new(window: Window, layout: Layout, max_lanes: Option<usize>) -> Self {
        let mut hidden = vec![0; window.day_count()];
        if let Some(cap) = max_lanes {
            for placement in layout.placements.iter().filter(|p| p.lane >= cap) {
                for count in &mut hidden[placement.start_offset..placement.end_offset()] {
                    *count += 1;
                }
            }
        }
        Self {
            window,
            layout,
            max_lanes,
            hidden,
        }
    }

    /// Placements that fit under the lane cap.
    pub fn visible(&self) -> impl Iterator<Item = &LaidOutEvent> {
        let cap = self.max_lanes.unwrap_or(usize::MAX);
        self.layout.placements.iter().filter(move |p| p.lane < cap)
    }

    pub fn has_overflow(&self) -> bool {
        self.hidden.iter().any(|&count| count > 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub rows: Vec<MonthRow>,
}

impl MonthView {
    /// Lay out every week row of the given month.
    ///
    /// # Errors
    /// Returns [`LayoutError::InvalidMonth`] for an out-of-range month.
    pub fn build<I: Interval>(
        year: i32,
        month: u32,
        items: &[I],
        options: &ViewOptions,
    ) -> Result<Self, LayoutError> {
        let rows = month_rows(year, month, options.week_start)?
            .into_iter()
            .map(|window| {
                let layout = layout_with(&window, items, options.layout);
                MonthRow::new(window, layout, options.max_lanes)
            })
            .collect();
        Ok(Self { year, month, rows })
    }

    /// Malformed event ids across all rows, each reported once.
    pub fn skipped_ids(&self) -> Vec<&str> {
        merge_skipped(self.rows.iter().map(|row| &row.layout))
    }
}

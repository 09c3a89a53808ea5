//! Greedy lane packing.
//!
//! Events are clipped to the window, sorted by clipped start (stable, so
//! ties keep input order), then each one drops into the lowest lane whose
//! day-columns are free for its whole span. A new lane is opened only when
//! every existing lane collides. This is the usual interval-colouring
//! heuristic: earlier events sit higher, later ones fill gaps.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::interval::Interval;
use super::window::Window;
use crate::error::LayoutError;

/// What to do with an event whose end precedes its start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Leave it out and report it in [`Layout::skipped`]
    #[default]
    Skip,
    /// Treat it as a single-day event at its start and report it in
    /// [`Layout::clamped`]
    Clamp,
}

impl MalformedPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Clamp => "clamp",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    pub malformed: MalformedPolicy,
}

impl LayoutOptions {
    pub fn with_malformed(mut self, policy: MalformedPolicy) -> Self {
        self.malformed = policy;
        self
    }
}

/// One event placed in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaidOutEvent {
    pub event_id: String,
    /// Position of the event in the input slice
    pub index: usize,
    pub lane: usize,
    /// Whole days from the window's first day to the clipped start
    pub start_offset: usize,
    /// Whole days covered inside the window, at least 1
    pub span: usize,
}

impl LaidOutEvent {
    /// First column past the event.
    pub fn end_offset(&self) -> usize {
        self.start_offset + self.span
    }

    pub fn covers(&self, column: usize) -> bool {
        column >= self.start_offset && column < self.end_offset()
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_offset < other.end_offset() && other.start_offset < self.end_offset()
    }
}

/// An input event left out because its end precedes its start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MalformedEvent {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub window: Window,
    /// Placements in clipped-start order
    pub placements: Vec<LaidOutEvent>,
    pub skipped: Vec<MalformedEvent>,
    /// Ids of malformed events placed as single-day events
    pub clamped: Vec<String>,
    pub lane_count: usize,
}

impl Layout {
    pub fn day_count(&self) -> usize {
        self.window.day_count()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn skipped_ids(&self) -> Vec<&str> {
        self.skipped.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn placement(&self, event_id: &str) -> Option<&LaidOutEvent> {
        self.placements.iter().find(|p| p.event_id == event_id)
    }

    /// Placements grouped by lane, each lane ordered by start offset.
    pub fn lanes(&self) -> Vec<Vec<&LaidOutEvent>> {
        let mut lanes: Vec<Vec<&LaidOutEvent>> = vec![Vec::new(); self.lane_count];
        for placement in &self.placements {
            lanes[placement.lane].push(placement);
        }
        for lane in &mut lanes {
            lane.sort_by_key(|p| p.start_offset);
        }
        lanes
    }
}

/// Day-column occupancy of a single lane.
struct LaneOccupancy {
    columns: Vec<bool>,
}

impl LaneOccupancy {
    fn new(day_count: usize) -> Self {
        Self {
            columns: vec![false; day_count],
        }
    }

    fn is_free(&self, start: usize, span: usize) -> bool {
        self.columns[start..start + span].iter().all(|taken| !taken)
    }

    fn occupy(&mut self, start: usize, span: usize) {
        self.columns[start..start + span].fill(true);
    }
}

/// An event that survived validation and clipping.
struct Candidate {
    index: usize,
    first: NaiveDate,
    last: NaiveDate,
    clamped: bool,
}

/// Lay out `events` in `window` with default options.
pub fn layout<I: Interval>(window: &Window, events: &[I]) -> Layout {
    layout_with(window, events, LayoutOptions::default())
}

/// Lay out `events` between two raw instants.
///
/// # Errors
/// Returns [`LayoutError::InvalidWindow`] if `end < start`.
pub fn layout_between<I: Interval>(
    start: NaiveDateTime,
    end: NaiveDateTime,
    events: &[I],
    options: LayoutOptions,
) -> Result<Layout, LayoutError> {
    let window = Window::new(start, end)?;
    Ok(layout_with(&window, events, options))
}

/// Lay out `events` in `window`.
///
/// Every event intersecting the window yields exactly one placement; events
/// wholly outside are dropped. Malformed events are handled per
/// `options.malformed` and never abort the batch.
pub fn layout_with<I: Interval>(window: &Window, events: &[I], options: LayoutOptions) -> Layout {
    let window_first = window.first_day();
    let window_last = window.last_day();
    let day_count = window.day_count();

    let mut skipped = Vec::new();
    let mut clamped = Vec::new();
    let mut candidates = Vec::with_capacity(events.len());

    for (index, event) in events.iter().enumerate() {
        let (start, end) = (event.start(), event.end());
        let first = start.date();
        let mut was_clamped = false;
        let last = if end < start {
            match options.malformed {
                MalformedPolicy::Skip => {
                    warn!(event_id = event.id(), %start, %end, "skipping malformed event: end precedes start");
                    skipped.push(MalformedEvent {
                        id: event.id().to_string(),
                        start,
                        end,
                    });
                    continue;
                }
                MalformedPolicy::Clamp => {
                    was_clamped = true;
                    first
                }
            }
        } else {
            end.date()
        };

        let clipped_first = first.max(window_first);
        let clipped_last = last.min(window_last);
        if clipped_last < clipped_first {
            continue;
        }
        if was_clamped {
            warn!(event_id = event.id(), %start, %end, "clamping malformed event to its start day");
        }
        candidates.push(Candidate {
            index,
            first: clipped_first,
            last: clipped_last,
            clamped: was_clamped,
        });
    }

    candidates.sort_by_key(|c| c.first);

    let mut lanes: Vec<LaneOccupancy> = Vec::new();
    let mut placements = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let start_offset = (candidate.first - window_first).num_days() as usize;
        let span = (candidate.last - candidate.first).num_days() as usize + 1;

        let lane = match lanes.iter().position(|l| l.is_free(start_offset, span)) {
            Some(lane) => lane,
            None => {
                lanes.push(LaneOccupancy::new(day_count));
                lanes.len() - 1
            }
        };
        lanes[lane].occupy(start_offset, span);

        if candidate.clamped {
            clamped.push(events[candidate.index].id().to_string());
        }
        placements.push(LaidOutEvent {
            event_id: events[candidate.index].id().to_string(),
            index: candidate.index,
            lane,
            start_offset,
            span,
        });
    }

    debug!(
        days = day_count,
        placed = placements.len(),
        skipped = skipped.len(),
        lanes = lanes.len(),
        "layout computed"
    );

    Layout {
        window: *window,
        placements,
        skipped,
        clamped,
        lane_count: lanes.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::interval::TimelineEvent;
    use chrono::Duration;

    fn day0() -> NaiveDate {
        // A Sunday
        NaiveDate::from_ymd_opt(2026, 10, 11).unwrap()
    }

    fn week() -> Window {
        Window::dates(day0(), day0() + Duration::days(6)).unwrap()
    }

    fn event(id: &str, from: i64, to: i64) -> TimelineEvent {
        TimelineEvent::all_day(
            id,
            day0() + Duration::days(from),
            day0() + Duration::days(to),
        )
    }

    fn place(layout: &Layout, id: &str) -> (usize, usize, usize) {
        let p = layout.placement(id).unwrap();
        (p.start_offset, p.span, p.lane)
    }

    #[test]
    fn test_overlapping_events_stack() {
        let events = vec![event("a", 0, 2), event("b", 1, 3), event("c", 4, 6)];
        let layout = layout(&week(), &events);

        assert_eq!(place(&layout, "a"), (0, 3, 0));
        assert_eq!(place(&layout, "b"), (1, 3, 1));
        assert_eq!(place(&layout, "c"), (4, 3, 0));
        assert_eq!(layout.lane_count, 2);
    }

    #[test]
    fn test_event_starting_before_window_is_clipped() {
        let events = vec![event("a", 0, 2), event("d", -2, 1)];
        let layout = layout(&week(), &events);

        assert_eq!(place(&layout, "a"), (0, 3, 0));
        assert_eq!(place(&layout, "d"), (0, 2, 1));
    }

    #[test]
    fn test_malformed_event_skipped() {
        let mut bad = event("e", 5, 5);
        bad.end = bad.start - Duration::days(3);
        let events = vec![event("a", 0, 2), bad, event("c", 4, 6)];
        let layout = layout(&week(), &events);

        assert_eq!(layout.skipped_ids(), vec!["e"]);
        assert!(layout.placement("e").is_none());
        assert_eq!(place(&layout, "a"), (0, 3, 0));
        assert_eq!(place(&layout, "c"), (4, 3, 0));
    }

    #[test]
    fn test_malformed_event_clamped() {
        let mut bad = event("e", 5, 5);
        bad.end = bad.start - Duration::days(3);
        let options = LayoutOptions::default().with_malformed(MalformedPolicy::Clamp);
        let layout = layout_with(&week(), &[bad], options);

        assert!(layout.skipped.is_empty());
        assert_eq!(layout.clamped, vec!["e".to_string()]);
        assert_eq!(place(&layout, "e"), (5, 1, 0));
    }

    #[test]
    fn test_clamped_event_outside_window_not_reported() {
        let mut bad = event("late", 9, 9);
        bad.end = bad.start - Duration::days(4);
        let options = LayoutOptions::default().with_malformed(MalformedPolicy::Clamp);
        let layout = layout_with(&week(), &[event("a", 0, 1), bad], options);

        assert!(layout.clamped.is_empty());
        assert!(layout.placement("late").is_none());
        assert_eq!(layout.placements.len(), 1);
    }

    #[test]
    fn test_events_outside_window_dropped() {
        let events = vec![event("before", -5, -1), event("after", 7, 9)];
        let layout = layout(&week(), &events);
        assert!(layout.is_empty());
        assert!(layout.skipped.is_empty());
        assert_eq!(layout.lane_count, 0);
    }

    #[test]
    fn test_boundary_touching_events_included() {
        let window = week();
        let touches_start = TimelineEvent::new(
            "touch-start",
            window.start() - Duration::days(2),
            window.start(),
        );
        let touches_end = TimelineEvent::new(
            "touch-end",
            window.end(),
            window.end() + Duration::days(2),
        );
        let layout = layout(&window, &[touches_start, touches_end]);

        assert_eq!(place(&layout, "touch-start"), (0, 1, 0));
        assert_eq!(place(&layout, "touch-end"), (6, 1, 0));
    }

    #[test]
    fn test_same_day_hours_collapse_to_one_day() {
        let start = week().start() + Duration::hours(9);
        let events = vec![
            TimelineEvent::new("morning", start, start + Duration::hours(2)),
            TimelineEvent::new("instant", start, start),
        ];
        let layout = layout(&week(), &events);

        assert_eq!(place(&layout, "morning"), (0, 1, 0));
        assert_eq!(place(&layout, "instant"), (0, 1, 1));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let events = vec![event("first", 2, 3), event("second", 2, 3)];
        let layout = layout(&week(), &events);
        assert_eq!(place(&layout, "first").2, 0);
        assert_eq!(place(&layout, "second").2, 1);
    }

    #[test]
    fn test_layout_between_rejects_inverted_window() {
        let start = week().end();
        let end = week().start();
        let err = layout_between::<TimelineEvent>(start, end, &[], LayoutOptions::default())
            .unwrap_err();
        assert_eq!(err, LayoutError::InvalidWindow { start, end });
    }

    #[test]
    fn test_lanes_grouping() {
        let events = vec![event("a", 0, 2), event("b", 1, 3), event("c", 4, 6)];
        let layout = layout(&week(), &events);
        let lanes = layout.lanes();
        assert_eq!(lanes.len(), 2);
        let lane0: Vec<_> = lanes[0].iter().map(|p| p.event_id.as_str()).collect();
        assert_eq!(lane0, vec!["a", "c"]);
    }

    #[test]
    fn test_index_points_back_to_input() {
        let events = vec![event("x", 3, 3), event("y", 0, 0)];
        let layout = layout(&week(), &events);
        for p in &layout.placements {
            assert_eq!(events[p.index].id, p.event_id);
        }
    }
}

//! Timeline view: one row per group key, all rows over the same window.
//!
//! Rows are laid out independently, so lanes are only shared by items in
//! the same row. Placement indices are rewritten to point into the caller's
//! full item slice, not the per-row subset.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{merge_skipped, ViewOptions};
use crate::layout::{layout_with, Interval, Layout, MalformedEvent, MalformedPolicy, Window};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineRow {
    pub key: String,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineView {
    pub window: Window,
    /// Rows ordered by key
    pub rows: Vec<TimelineRow>,
    /// Malformed items that no row picked up
    pub ungrouped_skipped: Vec<MalformedEvent>,
}

impl TimelineView {
    /// Group items under at most one key each. Items mapped to `None` are
    /// left off the timeline.
    pub fn build<I, F>(window: &Window, items: &[I], group_by: F, options: &ViewOptions) -> Self
    where
        I: Interval,
        F: Fn(&I) -> Option<String>,
    {
        Self::build_multi(window, items, |item| group_by(item).into_iter().collect(), options)
    }

    /// Group items under any number of keys, e.g. every assigned team member.
    ///
    /// Items with no key are left off the timeline. Under the skip policy a
    /// malformed item with no key still lands in `ungrouped_skipped`.
    pub fn build_multi<I, F>(window: &Window, items: &[I], group_by: F, options: &ViewOptions) -> Self
    where
        I: Interval,
        F: Fn(&I) -> Vec<String>,
    {
        let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        let mut ungrouped_skipped = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let keys = group_by(item);
            if keys.is_empty() {
                if options.layout.malformed == MalformedPolicy::Skip && item.end() < item.start() {
                    ungrouped_skipped.push(MalformedEvent {
                        id: item.id().to_string(),
                        start: item.start(),
                        end: item.end(),
                    });
                }
                continue;
            }
            for key in keys {
                let members = groups.entry(key).or_default();
                // Indices arrive in order, so a repeated key shows up last.
                if members.last() != Some(&index) {
                    members.push(index);
                }
            }
        }

        let rows = groups
            .into_iter()
            .map(|(key, indices)| {
                let members: Vec<&I> = indices.iter().map(|&i| &items[i]).collect();
                let mut layout = layout_with(window, &members, options.layout);
                for placement in &mut layout.placements {
                    placement.index = indices[placement.index];
                }
                TimelineRow { key, layout }
            })
            .collect();

        Self {
            window: *window,
            rows,
            ungrouped_skipped,
        }
    }

    pub fn row(&self, key: &str) -> Option<&TimelineRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    /// Malformed event ids across all rows and ungrouped items, each
    /// reported once.
    pub fn skipped_ids(&self) -> Vec<&str> {
        let mut ids = merge_skipped(self.rows.iter().map(|row| &row.layout));
        for event in &self.ungrouped_skipped {
            if !ids.contains(&event.id.as_str()) {
                ids.push(event.id.as_str());
            }
        }
        ids
    }
}

//! Schedule items: the common shape every calendar source is reduced to.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::layout::Interval;

/// Source kind of a schedule item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Project,
    Training,
    Pto,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Training => "training",
            Self::Pto => "pto",
        }
    }
}

/// A single bar on a calendar or timeline.
///
/// Layout only reads `id`, `start` and `end`. Renderers branch on `kind`
/// and read whatever they need from `payload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub kind: ItemKind,
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Team members attached to the item
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl ScheduleItem {
    pub fn new(
        kind: ItemKind,
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            kind,
            id: id.into(),
            title: title.into(),
            start,
            end,
            assignees: Vec::new(),
            payload: serde_json::Value::Null,
        }
    }

    pub fn with_assignee(mut self, member: impl Into<String>) -> Self {
        self.assignees.push(member.into());
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

impl Interval for ScheduleItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

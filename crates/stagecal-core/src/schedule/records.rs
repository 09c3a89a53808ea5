//! Domain records that end up on the calendar.
//!
//! Projects span load-in to load-out; training sessions and PTO requests
//! span their own start and end. Each converts into a [`ScheduleItem`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::item::{ItemKind, ScheduleItem};

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// A single engagement tied to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub client: Option<String>,
    pub status: ProjectStatus,
    pub load_in: NaiveDateTime,
    pub load_out: NaiveDateTime,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub team: Vec<String>,
}

impl Project {
    pub fn to_item(&self) -> ScheduleItem {
        ScheduleItem {
            kind: ItemKind::Project,
            id: self.id.clone(),
            title: self.name.clone(),
            start: self.load_in,
            end: self.load_out,
            assignees: self.team.clone(),
            payload: json!({
                "client": self.client,
                "status": self.status.as_str(),
                "budget": self.budget,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl TrainingSession {
    pub fn to_item(&self) -> ScheduleItem {
        ScheduleItem {
            kind: ItemKind::Training,
            id: self.id.clone(),
            title: self.title.clone(),
            start: self.start,
            end: self.end,
            assignees: self.attendees.clone(),
            payload: serde_json::Value::Null,
        }
    }
}

/// Review status of a PTO request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PtoStatus {
    Pending,
    Approved,
    Denied,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PtoRequest {
    pub id: String,
    pub member: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: PtoStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

impl PtoRequest {
    /// Denied requests are not shown on the calendar.
    pub fn to_item(&self) -> Option<ScheduleItem> {
        if self.status == PtoStatus::Denied {
            return None;
        }
        Some(ScheduleItem {
            kind: ItemKind::Pto,
            id: self.id.clone(),
            title: format!("PTO: {}", self.member),
            start: self.start,
            end: self.end,
            assignees: vec![self.member.clone()],
            payload: json!({
                "pending": self.status == PtoStatus::Pending,
                "reason": self.reason,
            }),
        })
    }
}

/// Gather every calendar-visible record into one item list.
pub fn collect_items(
    projects: &[Project],
    training: &[TrainingSession],
    pto: &[PtoRequest],
) -> Vec<ScheduleItem> {
    projects
        .iter()
        .map(Project::to_item)
        .chain(training.iter().map(TrainingSession::to_item))
        .chain(pto.iter().filter_map(PtoRequest::to_item))
        .collect()
}

//! In-memory filtering and sorting of project records.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::records::{Project, ProjectStatus};

/// Criteria for narrowing a project list. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFilter {
    #[serde(default)]
    pub statuses: Vec<ProjectStatus>,
    /// Inclusive date range the project's load-in..load-out must overlap
    #[serde(default)]
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    #[serde(default)]
    pub budget_min: Option<f64>,
    #[serde(default)]
    pub budget_max: Option<f64>,
    #[serde(default)]
    pub search: Option<String>,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.statuses.push(status);
        self
    }

    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_range = Some((from, to));
        self
    }

    pub fn with_budget(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.budget_min = min;
        self.budget_max = max;
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.matches_status(project)
            && self.matches_dates(project)
            && self.matches_budget(project)
            && self.matches_search(project)
    }

    /// Matching projects, in input order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }

    fn matches_status(&self, project: &Project) -> bool {
        self.statuses.is_empty() || self.statuses.contains(&project.status)
    }

    fn matches_dates(&self, project: &Project) -> bool {
        match self.date_range {
            Some((from, to)) => project.load_in.date() <= to && project.load_out.date() >= from,
            None => true,
        }
    }

    fn matches_budget(&self, project: &Project) -> bool {
        if self.budget_min.is_none() && self.budget_max.is_none() {
            return true;
        }
        let Some(budget) = project.budget else {
            return false;
        };
        self.budget_min.map_or(true, |min| budget >= min)
            && self.budget_max.map_or(true, |max| budget <= max)
    }

    fn matches_search(&self, project: &Project) -> bool {
        let Some(text) = self.search.as_deref().map(str::trim) else {
            return true;
        };
        if text.is_empty() {
            return true;
        }
        let needle = text.to_lowercase();
        project.name.to_lowercase().contains(&needle)
            || project.id.to_lowercase().contains(&needle)
            || project
                .client
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&needle))
    }
}

/// Sort key for project lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectSort {
    LoadIn,
    Name,
    /// Ascending, projects without a budget last
    Budget,
}

/// Stable in-place sort.
pub fn sort_projects(projects: &mut [Project], sort: ProjectSort) {
    match sort {
        ProjectSort::LoadIn => projects.sort_by_key(|p| p.load_in),
        ProjectSort::Name => projects.sort_by_key(|p| p.name.to_lowercase()),
        ProjectSort::Budget => projects.sort_by(|a, b| match (a.budget, b.budget) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }),
    }
}

//! Schedule items, domain records, and record filtering.

mod filter;
mod item;
mod records;

pub use filter::{sort_projects, ProjectFilter, ProjectSort};
pub use item::{ItemKind, ScheduleItem};
pub use records::{
    collect_items, Project, ProjectStatus, PtoRequest, PtoStatus, TrainingSession,
};

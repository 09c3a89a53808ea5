//! # stagecal Core Library
//!
//! Calendar and timeline layout for event production schedules. Projects,
//! training sessions and PTO requests are reduced to date-ranged schedule
//! items, and every visible window is packed into non-overlapping lanes of
//! day-columns ready for rendering.
//!
//! ## Architecture
//!
//! - **Layout**: a pure, stateless greedy lane packer over one window
//! - **Views**: week/day, month (one layout per week row) and timeline
//!   (one layout per group) built on top of the packer
//! - **Schedule**: schedule items, domain records and project filtering
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`layout()`]: lane packing for one window
//! - [`Window`]: visible range, always `start <= end`
//! - [`MonthView`] / [`TimelineView`]: multi-window views
//! - [`Config`]: application configuration management

pub mod error;
pub mod layout;
pub mod schedule;
pub mod storage;
pub mod view;

pub use error::{ConfigError, CoreError, LayoutError};
pub use layout::{
    layout, layout_between, layout_with, Interval, LaidOutEvent, Layout, LayoutOptions,
    MalformedEvent, MalformedPolicy, TimelineEvent, WeekStart, Window,
};
pub use schedule::{
    ItemKind, Project, ProjectFilter, ProjectSort, ProjectStatus, PtoRequest, PtoStatus,
    ScheduleItem, TrainingSession,
};
pub use storage::Config;
pub use view::{BarGeometry, MonthRow, MonthView, TimelineRow, TimelineView, ViewOptions, WeekView};

pub mod config;
pub mod layout;
pub mod month;
pub mod timeline;
pub mod week;

use std::path::Path;

use stagecal_core::{Config, ScheduleItem};

use crate::render::TextStyle;

/// Read a JSON array of schedule items.
pub fn load_items(path: &Path) -> Result<Vec<ScheduleItem>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let items: Vec<ScheduleItem> = serde_json::from_str(&content)
        .map_err(|e| format!("cannot parse {}: {e}", path.display()))?;
    tracing::debug!(count = items.len(), path = %path.display(), "loaded schedule items");
    Ok(items)
}

pub fn text_style(config: &Config) -> TextStyle {
    TextStyle {
        day_width: config.display.day_width.max(1),
        show_skipped: config.display.show_skipped,
    }
}

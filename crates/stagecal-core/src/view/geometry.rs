//! Pixel geometry for a placed bar.

use serde::{Deserialize, Serialize};

use crate::layout::LaidOutEvent;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    pub fn from_placement(placement: &LaidOutEvent, day_width: f64, lane_height: f64) -> Self {
        Self {
            left: placement.start_offset as f64 * day_width,
            top: placement.lane as f64 * lane_height,
            width: placement.span as f64 * day_width,
            height: lane_height,
        }
    }
}

//! Radar chart geometry configuration

use serde::Deserialize;

use crate::domain::analysis::{Point, RadarLayout, DEFAULT_LABEL_RADIUS, MAX_ORDINAL};

use super::error::ValidationError;

/// Radar chart geometry, in chart coordinate units.
#[derive(Debug, Clone, Deserialize)]
pub struct RadarConfig {
    #[serde(default = "default_center")]
    pub center_x: f64,

    #[serde(default = "default_center")]
    pub center_y: f64,

    /// Radius of the outer ring (ordinal 5)
    #[serde(default = "default_max_radius")]
    pub max_radius: f64,

    /// Axis label distance, in ordinal units
    #[serde(default = "default_label_radius")]
    pub label_radius: f64,
}

impl RadarConfig {
    /// Converts to the layout used by the radar projector.
    pub fn to_layout(&self) -> RadarLayout {
        RadarLayout {
            center: Point {
                x: self.center_x,
                y: self.center_y,
            },
            max_radius: self.max_radius,
            label_radius: self.label_radius,
        }
    }

    /// Validate radar geometry
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.max_radius.is_finite() || self.max_radius <= 0.0 {
            return Err(ValidationError::InvalidRadarRadius);
        }
        if !self.label_radius.is_finite() || self.label_radius < MAX_ORDINAL {
            return Err(ValidationError::LabelInsideChart {
                min: MAX_ORDINAL,
                actual: self.label_radius,
            });
        }
        Ok(())
    }
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            center_x: default_center(),
            center_y: default_center(),
            max_radius: default_max_radius(),
            label_radius: default_label_radius(),
        }
    }
}

fn default_center() -> f64 {
    150.0
}

fn default_max_radius() -> f64 {
    100.0
}

fn default_label_radius() -> f64 {
    DEFAULT_LABEL_RADIUS
}

//! Radar Projector - polar projection of axis values for the comparison chart.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::domain::foundation::UserId;
use crate::domain::group::GroupSnapshot;
use crate::domain::preference::{Axis, ScaleNormalizer, AXIS_COUNT};

/// Highest ordinal on any axis.
pub const MAX_ORDINAL: f64 = 5.0;

/// Default distance of axis labels, in ordinal units (beyond the outer ring).
pub const DEFAULT_LABEL_RADIUS: f64 = 5.7;

/// A point in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Whether values are clamped to the outer ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Values are clamped to `[0, 5]`; used for data polygons.
    Clamped,
    /// Values are used as-is; used for label placement.
    Unclamped,
}

/// Geometry of the radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarLayout {
    pub center: Point,
    pub max_radius: f64,
    pub label_radius: f64,
}

impl Default for RadarLayout {
    fn default() -> Self {
        Self {
            center: Point { x: 150.0, y: 150.0 },
            max_radius: 100.0,
            label_radius: DEFAULT_LABEL_RADIUS,
        }
    }
}

impl RadarLayout {
    /// Angle of axis `index` out of `count`, in radians. Axis 0 points up
    /// and the rest follow clockwise.
    pub fn angle(index: usize, count: usize) -> f64 {
        -PI / 2.0 + 2.0 * PI * index as f64 / count.max(1) as f64
    }

    /// Projects a single value on one axis.
    pub fn project_value(&self, index: usize, count: usize, value: f64, mode: Projection) -> Point {
        let value = match mode {
            Projection::Clamped if value.is_nan() => 0.0,
            Projection::Clamped => value.clamp(0.0, MAX_ORDINAL),
            Projection::Unclamped => value,
        };
        let radius = self.max_radius * value / MAX_ORDINAL;
        let angle = Self::angle(index, count);
        Point {
            x: self.center.x + radius * angle.cos(),
            y: self.center.y + radius * angle.sin(),
        }
    }

    /// Projects a full value vector, one point per axis.
    pub fn project(&self, values: &[f64], mode: Projection) -> Vec<Point> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| self.project_value(i, values.len(), *v, mode))
            .collect()
    }

    /// Concentric grid ring at one ordinal level.
    pub fn ring(&self, level: f64) -> Vec<Point> {
        self.project(&[level; AXIS_COUNT], Projection::Clamped)
    }

    /// Axis label anchors, placed just outside the outer ring.
    pub fn labels(&self) -> Vec<AxisLabel> {
        Axis::ALL
            .iter()
            .map(|&axis| AxisLabel {
                axis,
                text: axis.label().to_string(),
                position: self.project_value(
                    axis.index(),
                    AXIS_COUNT,
                    self.label_radius,
                    Projection::Unclamped,
                ),
            })
            .collect()
    }
}

/// One axis label on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub axis: Axis,
    pub text: String,
    pub position: Point,
}

/// One polygon on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSeries {
    /// Member this series belongs to; `None` for the group average.
    pub user_id: Option<UserId>,
    pub is_self: bool,
    pub values: [f64; AXIS_COUNT],
    pub points: Vec<Point>,
}

/// Complete chart: grid, labels, per-member polygons, and group average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    pub grid: Vec<Vec<Point>>,
    pub labels: Vec<AxisLabel>,
    /// Ready members, viewer first.
    pub members: Vec<RadarSeries>,
    pub average: RadarSeries,
}

/// Builds radar charts from group snapshots.
pub struct RadarProjector;

impl RadarProjector {
    /// Builds the chart for the ready partition of a snapshot.
    ///
    /// `averages` are the per-axis means of the same partition.
    pub fn chart(
        layout: &RadarLayout,
        snapshot: &GroupSnapshot,
        averages: [f64; AXIS_COUNT],
        viewer: Option<&UserId>,
    ) -> RadarChart {
        let members = snapshot
            .ready_members_self_first(viewer)
            .into_iter()
            .map(|member| {
                let values = ScaleNormalizer::to_ordinal_vector(&member.condition()).map(f64::from);
                RadarSeries {
                    user_id: Some(member.user_id.clone()),
                    is_self: Some(&member.user_id) == viewer,
                    values,
                    points: layout.project(&values, Projection::Clamped),
                }
            })
            .collect();

        RadarChart {
            grid: (1..=MAX_ORDINAL as u8)
                .map(|level| layout.ring(f64::from(level)))
                .collect(),
            labels: layout.labels(),
            members,
            average: RadarSeries {
                user_id: None,
                is_self: false,
                values: averages,
                points: layout.project(&averages, Projection::Clamped),
            },
        }
    }
}

//! Axis definitions and the fixed vocabularies of the categorical axes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of condition axes.
pub const AXIS_COUNT: usize = 5;

/// An ordered five-label vocabulary; position 0 is ordinal 1.
pub type Scale = [&'static str; AXIS_COUNT];

/// How the member wants to spend the outing, calm to active.
pub const SPENDING_STYLE_SCALE: Scale = ["のんびり", "まったり", "バランス", "ややアクティブ", "アクティブ"];

/// How far the member is willing to travel.
pub const DISTANCE_SCALE: Scale = ["近場", "やや近場", "どこでも", "やや遠出", "遠出"];

/// Tolerated crowd level, quiet to busy.
pub const CROWD_SCALE: Scale = ["静か", "やや静か", "普通", "やや賑やか", "賑やか"];

/// Outing duration, shortest to longest.
pub const TIME_SCALE: Scale = ["1〜2時間", "半日", "1日", "1泊", "2泊以上"];

/// One of the five condition axes.
///
/// Declaration order is the canonical iteration order used by the ordinal
/// vector, mismatch tie-breaking, and the radar layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    SpendingStyle,
    Distance,
    Crowd,
    Budget,
    Time,
}

impl Axis {
    /// All axes in canonical order.
    pub const ALL: [Axis; AXIS_COUNT] = [
        Axis::SpendingStyle,
        Axis::Distance,
        Axis::Crowd,
        Axis::Budget,
        Axis::Time,
    ];

    /// Position of this axis in the canonical order.
    pub fn index(&self) -> usize {
        match self {
            Axis::SpendingStyle => 0,
            Axis::Distance => 1,
            Axis::Crowd => 2,
            Axis::Budget => 3,
            Axis::Time => 4,
        }
    }

    /// Label used in the stored string and on the chart.
    pub fn label(&self) -> &'static str {
        match self {
            Axis::SpendingStyle => "過ごし方",
            Axis::Distance => "距離",
            Axis::Crowd => "人の多さ",
            Axis::Budget => "予算",
            Axis::Time => "時間",
        }
    }

    /// Field name used in validation messages and JSON.
    pub fn field_name(&self) -> &'static str {
        match self {
            Axis::SpendingStyle => "spending_style",
            Axis::Distance => "distance",
            Axis::Crowd => "crowd",
            Axis::Budget => "budget",
            Axis::Time => "time",
        }
    }

    /// Vocabulary of a categorical axis; `None` for the numeric budget axis.
    pub fn scale(&self) -> Option<&'static Scale> {
        match self {
            Axis::SpendingStyle => Some(&SPENDING_STYLE_SCALE),
            Axis::Distance => Some(&DISTANCE_SCALE),
            Axis::Crowd => Some(&CROWD_SCALE),
            Axis::Time => Some(&TIME_SCALE),
            Axis::Budget => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_matches_index() {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn only_budget_lacks_a_vocabulary() {
        assert!(Axis::Budget.scale().is_none());
        assert_eq!(
            Axis::ALL.iter().filter(|a| a.scale().is_some()).count(),
            4
        );
    }

    #[test]
    fn vocabularies_have_distinct_labels() {
        for axis in Axis::ALL {
            if let Some(scale) = axis.scale() {
                for (i, a) in scale.iter().enumerate() {
                    for b in scale.iter().skip(i + 1) {
                        assert_ne!(a, b, "duplicate label on {:?}", axis);
                    }
                }
            }
        }
    }

    #[test]
    fn labels_contain_no_segment_separator() {
        for axis in Axis::ALL {
            assert!(!axis.label().contains('/'));
            for value in axis.scale().into_iter().flatten() {
                assert!(!value.contains('/'));
            }
        }
    }

    #[test]
    fn axis_serializes_snake_case() {
        let json = serde_json::to_string(&Axis::SpendingStyle).unwrap();
        assert_eq!(json, "\"spending_style\"");
    }
}

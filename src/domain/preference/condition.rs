//! Parsed five-axis condition.

use serde::{Deserialize, Serialize};

use super::Axis;

/// A member's condition as read back from storage.
///
/// Every field is independently nullable: absence is a valid state for a
/// member who has not finished selecting, or for corrupt/legacy rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedCondition {
    pub spending_style: Option<String>,
    pub distance: Option<String>,
    pub crowd: Option<String>,
    pub time: Option<String>,
    /// Budget in yen; no upper bound.
    pub budget: Option<u64>,
}

impl ParsedCondition {
    /// Creates a fully populated condition.
    pub fn new(
        spending_style: impl Into<String>,
        distance: impl Into<String>,
        crowd: impl Into<String>,
        time: impl Into<String>,
        budget: u64,
    ) -> Self {
        Self {
            spending_style: Some(spending_style.into()),
            distance: Some(distance.into()),
            crowd: Some(crowd.into()),
            time: Some(time.into()),
            budget: Some(budget),
        }
    }

    /// Returns the raw label chosen on a categorical axis.
    ///
    /// Always `None` for `Axis::Budget`; use [`ParsedCondition::budget`].
    pub fn categorical(&self, axis: Axis) -> Option<&str> {
        match axis {
            Axis::SpendingStyle => self.spending_style.as_deref(),
            Axis::Distance => self.distance.as_deref(),
            Axis::Crowd => self.crowd.as_deref(),
            Axis::Time => self.time.as_deref(),
            Axis::Budget => None,
        }
    }

    /// Returns true if the axis has a value.
    pub fn has(&self, axis: Axis) -> bool {
        match axis {
            Axis::Budget => self.budget.is_some(),
            other => self.categorical(other).is_some(),
        }
    }

    /// Axes without a value, in canonical order.
    pub fn missing_axes(&self) -> Vec<Axis> {
        Axis::ALL.into_iter().filter(|a| !self.has(*a)).collect()
    }

    /// Returns true if all five axes carry a value.
    pub fn is_complete(&self) -> bool {
        Axis::ALL.iter().all(|a| self.has(*a))
    }

    /// Returns true if no axis carries a value.
    pub fn is_empty(&self) -> bool {
        !Axis::ALL.iter().any(|a| self.has(*a))
    }
}

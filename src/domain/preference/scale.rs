//! Scale Normalizer - maps every axis onto a common ordinal 1-5 scale.
//!
//! Unknown preference is modeled as neutral: a missing value, or a value
//! outside the known vocabulary, maps to the midpoint 3 so it still takes
//! part in averaging without pulling toward either end.

use super::{Axis, ParsedCondition, Scale, AXIS_COUNT};

/// Ordinal used when a value is missing or unrecognized.
pub const NEUTRAL_ORDINAL: u8 = 3;

/// Inclusive upper bounds (yen) of budget buckets 1-4; anything above is 5.
pub const BUDGET_THRESHOLDS: [u64; 4] = [20_000, 40_000, 60_000, 80_000];

/// Five ordinals (1-5) in canonical axis order.
pub type OrdinalVector = [u8; AXIS_COUNT];

/// Axis scale normalization functions.
pub struct ScaleNormalizer;

impl ScaleNormalizer {
    /// Returns `1 + position` for an exact (case-sensitive) vocabulary match,
    /// otherwise [`NEUTRAL_ORDINAL`].
    pub fn index_from_scale(scale: &Scale, value: Option<&str>) -> u8 {
        value
            .and_then(|v| scale.iter().position(|label| *label == v))
            .map(|pos| pos as u8 + 1)
            .unwrap_or(NEUTRAL_ORDINAL)
    }

    /// Buckets a yen budget into 1-5; `None` maps to [`NEUTRAL_ORDINAL`].
    ///
    /// # Edge Cases
    /// - 20000 is bucket 1, 20001 is bucket 2
    /// - Anything above 80000 is bucket 5, with no upper bound
    pub fn budget_to_scale(budget: Option<u64>) -> u8 {
        let Some(budget) = budget else {
            return NEUTRAL_ORDINAL;
        };

        BUDGET_THRESHOLDS
            .iter()
            .position(|limit| budget <= *limit)
            .map(|pos| pos as u8 + 1)
            .unwrap_or(BUDGET_THRESHOLDS.len() as u8 + 1)
    }

    /// Display label for a budget bucket.
    pub fn budget_bucket_label(bucket: u8) -> &'static str {
        match bucket {
            0 | 1 => "〜2万円",
            2 => "〜4万円",
            3 => "〜6万円",
            4 => "〜8万円",
            _ => "8万円〜",
        }
    }

    /// Ordinal value of one axis.
    pub fn ordinal(condition: &ParsedCondition, axis: Axis) -> u8 {
        match axis.scale() {
            Some(scale) => Self::index_from_scale(scale, condition.categorical(axis)),
            None => Self::budget_to_scale(condition.budget),
        }
    }

    /// Ordinal vector in canonical order
    /// (spending style, distance, crowd, budget, time).
    pub fn to_ordinal_vector(condition: &ParsedCondition) -> OrdinalVector {
        Axis::ALL.map(|axis| Self::ordinal(condition, axis))
    }
}

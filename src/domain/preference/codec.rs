//! Preference Codec - string form of a condition stored in the member row.
//!
//! Grammar: five `label:value` segments joined by `" / "`, e.g.
//!
//! ```text
//! 過ごし方:のんびり / 距離:近場 / 人の多さ:静か / 時間:半日 / 予算:30000円
//! ```
//!
//! The writer always emits the order above. The reader looks each label up
//! independently, so segment order does not matter when parsing.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Axis, ParsedCondition, AXIS_COUNT};

/// Separator placed between segments.
pub const SEGMENT_SEPARATOR: &str = " / ";

/// Character that ends a segment value; values containing it cannot be stored.
pub const RESERVED_VALUE_CHAR: char = '/';

/// Currency suffix appended to the budget value.
pub const BUDGET_UNIT: &str = "円";

/// Segment order of the serialized form.
const SERIALIZED_ORDER: [Axis; AXIS_COUNT] = [
    Axis::SpendingStyle,
    Axis::Distance,
    Axis::Crowd,
    Axis::Time,
    Axis::Budget,
];

/// One pattern per axis: the label at a segment start, a colon (ASCII or
/// full-width), then everything up to the next `/` or end of input.
static LABEL_PATTERNS: Lazy<Vec<(Axis, Regex)>> = Lazy::new(|| {
    Axis::ALL
        .iter()
        .map(|axis| {
            let pattern = format!(r"(?:^|/)\s*{}\s*[:：]([^/]*)", regex::escape(axis.label()));
            let regex = Regex::new(&pattern).expect("label pattern is a valid regex");
            (*axis, regex)
        })
        .collect()
});

/// Serializer and parser for the stored condition string.
pub struct PreferenceCodec;

impl PreferenceCodec {
    /// Parses a stored condition string.
    ///
    /// Never fails: `None`, empty input, unmatched labels, empty values and
    /// unparseable budgets all come back as null fields.
    pub fn parse(raw: Option<&str>) -> ParsedCondition {
        let mut condition = ParsedCondition::default();

        let raw = match raw.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return condition,
        };

        for (axis, pattern) in LABEL_PATTERNS.iter() {
            let value = pattern
                .captures(raw)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim())
                .filter(|v| !v.is_empty());

            match axis {
                Axis::SpendingStyle => condition.spending_style = value.map(str::to_string),
                Axis::Distance => condition.distance = value.map(str::to_string),
                Axis::Crowd => condition.crowd = value.map(str::to_string),
                Axis::Time => condition.time = value.map(str::to_string),
                Axis::Budget => condition.budget = value.and_then(Self::parse_budget),
            }
        }

        condition
    }

    /// Serializes a condition into the canonical grammar.
    ///
    /// Null fields are written with an empty value, which parses back to null.
    pub fn serialize(condition: &ParsedCondition) -> String {
        SERIALIZED_ORDER
            .iter()
            .map(|axis| format!("{}:{}", axis.label(), Self::segment_value(condition, *axis)))
            .collect::<Vec<_>>()
            .join(SEGMENT_SEPARATOR)
    }

    /// Whether a categorical value survives a serialize/parse cycle unchanged.
    pub fn can_encode(value: &str) -> bool {
        !value.contains(RESERVED_VALUE_CHAR) && value.trim() == value
    }

    fn segment_value(condition: &ParsedCondition, axis: Axis) -> String {
        match axis {
            Axis::Budget => condition
                .budget
                .map(|b| format!("{}{}", b, BUDGET_UNIT))
                .unwrap_or_default(),
            other => condition.categorical(other).unwrap_or_default().to_string(),
        }
    }

    /// Drops every non-digit character, then parses what is left.
    ///
    /// `None` when no digits remain or the number does not fit in a u64.
    fn parse_budget(value: &str) -> Option<u64> {
        let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()
    }
}

//! Preference module - one member's five-axis outing condition.
//!
//! # Components
//!
//! - `Axis` / vocabularies - the fixed, ordered label sets per axis
//! - `ParsedCondition` - structured condition with independently nullable fields
//! - `PreferenceCodec` - `label:value / ...` string form stored in the member row
//! - `ScaleNormalizer` - maps every axis onto the common 1-5 ordinal scale
//!
//! All functions are pure; malformed input degrades to null fields and
//! then to the neutral ordinal, never to an error.

mod codec;
mod condition;
mod scale;
mod vocabulary;

pub use codec::{PreferenceCodec, BUDGET_UNIT, RESERVED_VALUE_CHAR, SEGMENT_SEPARATOR};
pub use condition::ParsedCondition;
pub use scale::{OrdinalVector, ScaleNormalizer, BUDGET_THRESHOLDS, NEUTRAL_ORDINAL};
pub use vocabulary::{
    Axis, Scale, AXIS_COUNT, CROWD_SCALE, DISTANCE_SCALE, SPENDING_STYLE_SCALE, TIME_SCALE,
};

//! Analysis module - group consensus, mismatch scoring, and chart geometry.
//!
//! All computations are pure functions of a [`GroupSnapshot`] or the
//! conditions drawn from it.
//!
//! [`GroupSnapshot`]: crate::domain::group::GroupSnapshot

mod aggregator;
mod group_type;
mod radar;
mod recommendation;
mod tally;

pub use aggregator::{Aggregator, AxisVerdict, GroupVerdict};
pub use group_type::{GroupType, GROUP_TYPE_BREAKPOINTS};
pub use radar::{
    AxisLabel, Point, Projection, RadarChart, RadarLayout, RadarProjector, RadarSeries,
    DEFAULT_LABEL_RADIUS, MAX_ORDINAL,
};
pub use recommendation::{Recommendation, RecommendationTagger, FALLBACK_EMOJI, MAX_TAGS};
pub use tally::{CategoryTally, TallyEntry};

//! Group Aggregator - consensus, mismatch, and group type from ready members.
//!
//! Every number here is a pure function of the conditions passed in. The
//! caller decides which members count (normally the ready partition of a
//! [`GroupSnapshot`]).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::group::GroupSnapshot;
use crate::domain::preference::{Axis, ParsedCondition, ScaleNormalizer, AXIS_COUNT};

use super::{CategoryTally, GroupType};

/// Result for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisVerdict {
    pub axis: Axis,
    /// Observed labels; budget is tallied on bucket labels.
    pub tally: CategoryTally,
    /// Most common label, if anyone answered this axis.
    pub consensus: Option<String>,
    /// 0 means everyone agrees, higher means more split.
    pub mismatch: Percentage,
    /// Mean ordinal (1-5) rounded to one decimal; 0.0 for an empty group.
    pub average: f64,
}

/// Everything the result page shows about a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupVerdict {
    /// Number of conditions aggregated.
    pub member_count: usize,
    /// One entry per axis, in canonical order.
    pub axes: Vec<AxisVerdict>,
    pub area: CategoryTally,
    pub purpose: CategoryTally,
    pub aggregate_mismatch: Percentage,
    pub confidence: Percentage,
    pub group_type: GroupType,
    pub max_mismatch_axis: Axis,
}

impl GroupVerdict {
    /// Returns the verdict for one axis.
    pub fn axis(&self, axis: Axis) -> &AxisVerdict {
        &self.axes[axis.index()]
    }

    /// Axis averages in canonical order, as plotted on the radar chart.
    pub fn axis_averages(&self) -> [f64; AXIS_COUNT] {
        Axis::ALL.map(|axis| self.axis(axis).average)
    }

    /// Per-axis mismatch scores in canonical order.
    pub fn mismatch_scores(&self) -> [Percentage; AXIS_COUNT] {
        Axis::ALL.map(|axis| self.axis(axis).mismatch)
    }

    /// Most common area, if any.
    pub fn area_consensus(&self) -> Option<&str> {
        self.area.top().map(|e| e.label.as_str())
    }

    /// Most common purpose, if any.
    pub fn purpose_consensus(&self) -> Option<&str> {
        self.purpose.top().map(|e| e.label.as_str())
    }
}

/// Aggregation functions.
pub struct Aggregator;

impl Aggregator {
    /// Aggregates a list of conditions.
    ///
    /// Area and purpose tallies are left empty; use
    /// [`Aggregator::aggregate_snapshot`] to fill them.
    ///
    /// # Edge Cases
    /// - An empty list yields all-zero mismatch, 0.0 averages, confidence 100,
    ///   and the first axis as max-mismatch axis
    pub fn aggregate(conditions: &[ParsedCondition]) -> GroupVerdict {
        let total = conditions.len();
        let averages = Self::axis_averages(conditions);

        let axes: Vec<AxisVerdict> = Axis::ALL
            .iter()
            .map(|&axis| {
                let tally = Self::tally_axis(conditions, axis);
                AxisVerdict {
                    axis,
                    consensus: tally.top().map(|e| e.label.clone()),
                    mismatch: Self::mismatch(&tally, total),
                    tally,
                    average: averages[axis.index()],
                }
            })
            .collect();

        let scores = Axis::ALL.map(|axis| axes[axis.index()].mismatch);
        let aggregate_mismatch = Self::aggregate_mismatch(&scores);

        GroupVerdict {
            member_count: total,
            axes,
            area: CategoryTally::default(),
            purpose: CategoryTally::default(),
            aggregate_mismatch,
            confidence: aggregate_mismatch.complement(),
            group_type: GroupType::from_mismatch(aggregate_mismatch),
            max_mismatch_axis: Self::max_mismatch_axis(&scores),
        }
    }

    /// Aggregates the ready partition of a snapshot, including area and
    /// purpose tallies.
    pub fn aggregate_snapshot(snapshot: &GroupSnapshot) -> GroupVerdict {
        let mut verdict = Self::aggregate(&snapshot.ready_conditions());
        verdict.area = CategoryTally::from_labels(
            snapshot.ready_members().map(|m| m.selected_area.as_deref()),
        );
        verdict.purpose = CategoryTally::from_labels(
            snapshot.ready_members().map(|m| m.selected_purpose.as_deref()),
        );
        verdict
    }

    /// Tallies one axis. Null values are skipped; budgets are counted by
    /// bucket label.
    pub fn tally_axis(conditions: &[ParsedCondition], axis: Axis) -> CategoryTally {
        match axis {
            Axis::Budget => CategoryTally::from_labels(conditions.iter().map(|c| {
                c.budget.map(|yen| {
                    ScaleNormalizer::budget_bucket_label(ScaleNormalizer::budget_to_scale(Some(yen)))
                })
            })),
            _ => CategoryTally::from_labels(conditions.iter().map(|c| c.categorical(axis))),
        }
    }

    /// `round(100 - top_count / total * 100)`, or 0 when `total` is 0.
    ///
    /// The denominator is the number of aggregated members, so members
    /// who left an axis blank count as disagreeing.
    pub fn mismatch(tally: &CategoryTally, total: usize) -> Percentage {
        if total == 0 {
            return Percentage::ZERO;
        }
        let agreement = f64::from(tally.top_count()) / total as f64 * 100.0;
        Percentage::from_f64_rounded(100.0 - agreement)
    }

    /// Rounded arithmetic mean of the per-axis scores.
    pub fn aggregate_mismatch(scores: &[Percentage; AXIS_COUNT]) -> Percentage {
        let sum: u32 = scores.iter().map(|s| u32::from(s.value())).sum();
        Percentage::from_f64_rounded(f64::from(sum) / AXIS_COUNT as f64)
    }

    /// Mean ordinal per axis, rounded to one decimal place.
    pub fn axis_averages(conditions: &[ParsedCondition]) -> [f64; AXIS_COUNT] {
        if conditions.is_empty() {
            return [0.0; AXIS_COUNT];
        }
        let mut sums = [0u32; AXIS_COUNT];
        for condition in conditions {
            let ordinals = ScaleNormalizer::to_ordinal_vector(condition);
            for (sum, ordinal) in sums.iter_mut().zip(ordinals) {
                *sum += u32::from(ordinal);
            }
        }
        let n = conditions.len() as f64;
        sums.map(|sum| round_one_decimal(f64::from(sum) / n))
    }

    /// Axis with the highest mismatch; the earliest axis wins a tie.
    pub fn max_mismatch_axis(scores: &[Percentage; AXIS_COUNT]) -> Axis {
        Axis::ALL
            .iter()
            .copied()
            .fold(Axis::ALL[0], |best, axis| {
                if scores[axis.index()] > scores[best.index()] {
                    axis
                } else {
                    best
                }
            })
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{GroupId, UserId};
    use crate::domain::group::MemberChoice;
    use crate::domain::preference::PreferenceCodec;
    use proptest::prelude::*;

    fn cond(style: &str, budget: Option<u64>) -> ParsedCondition {
        ParsedCondition {
            budget,
            ..ParsedCondition::new(style, "近場", "静か", "半日", 0)
        }
    }

    #[test]
    fn two_to_one_split_scores_thirty_three() {
        let conditions = vec![
            cond("のんびり", Some(10_000)),
            cond("のんびり", Some(10_000)),
            cond("アクティブ", Some(10_000)),
        ];
        let verdict = Aggregator::aggregate(&conditions);

        let style = verdict.axis(Axis::SpendingStyle);
        assert_eq!(style.mismatch.value(), 33);
        assert_eq!(style.consensus.as_deref(), Some("のんびり"));
        assert_eq!(verdict.axis(Axis::Distance).mismatch, Percentage::ZERO);
        assert_eq!(verdict.max_mismatch_axis, Axis::SpendingStyle);
    }

    #[test]
    fn identical_members_have_zero_mismatch() {
        let c = cond("バランス", Some(30_000));
        let verdict = Aggregator::aggregate(&[c.clone(), c.clone(), c]);

        assert_eq!(verdict.aggregate_mismatch, Percentage::ZERO);
        assert_eq!(verdict.confidence, Percentage::HUNDRED);
        assert_eq!(verdict.group_type, GroupType::InSync);
    }

    #[test]
    fn empty_group_is_neutral() {
        let verdict = Aggregator::aggregate(&[]);

        assert_eq!(verdict.member_count, 0);
        assert_eq!(verdict.aggregate_mismatch, Percentage::ZERO);
        assert_eq!(verdict.confidence, Percentage::HUNDRED);
        assert_eq!(verdict.axis_averages(), [0.0; AXIS_COUNT]);
        assert_eq!(verdict.max_mismatch_axis, Axis::SpendingStyle);
        assert!(verdict.axes.iter().all(|a| a.consensus.is_none()));
    }

    #[test]
    fn budget_is_tallied_by_bucket() {
        let conditions = vec![
            cond("のんびり", Some(15_000)),
            cond("のんびり", Some(20_000)),
            cond("のんびり", Some(50_000)),
        ];
        let verdict = Aggregator::aggregate(&conditions);
        let budget = verdict.axis(Axis::Budget);

        assert_eq!(budget.tally.count_of("〜2万円"), 2);
        assert_eq!(budget.consensus.as_deref(), Some("〜2万円"));
        assert_eq!(budget.mismatch.value(), 33);
    }

    #[test]
    fn blank_axis_counts_against_agreement() {
        let mut blank = cond("のんびり", None);
        blank.distance = None;
        let verdict = Aggregator::aggregate(&[cond("のんびり", None), blank]);

        assert_eq!(verdict.axis(Axis::Distance).mismatch.value(), 50);
        // no budgets at all: nobody agrees on anything
        assert_eq!(verdict.axis(Axis::Budget).mismatch, Percentage::HUNDRED);
    }

    #[test]
    fn averages_round_to_one_decimal() {
        let conditions = vec![
            cond("のんびり", Some(10_000)),
            cond("のんびり", Some(10_000)),
            cond("まったり", Some(90_000)),
        ];
        let averages = Aggregator::aggregate(&conditions).axis_averages();

        // (1 + 1 + 2) / 3 = 1.333...
        assert_eq!(averages[Axis::SpendingStyle.index()], 1.3);
        // (1 + 1 + 5) / 3 = 2.333...
        assert_eq!(averages[Axis::Budget.index()], 2.3);
        assert_eq!(averages[Axis::Distance.index()], 1.0);
    }

    #[test]
    fn max_mismatch_ties_go_to_earliest_axis() {
        let scores = [
            Percentage::new(10),
            Percentage::new(50),
            Percentage::new(50),
            Percentage::new(20),
            Percentage::new(50),
        ];
        assert_eq!(Aggregator::max_mismatch_axis(&scores), Axis::Distance);
    }

    #[test]
    fn aggregate_mismatch_is_rounded_mean() {
        let scores = [33, 0, 0, 0, 50].map(Percentage::new);
        // 83 / 5 = 16.6
        assert_eq!(Aggregator::aggregate_mismatch(&scores).value(), 17);
    }

    #[test]
    fn snapshot_aggregation_uses_ready_members_only() {
        let mut ready = MemberChoice::joined(UserId::new("u1").unwrap());
        ready.is_ready = true;
        ready.selected_area = Some("箱根".to_string());
        ready.selected_purpose = Some("温泉".to_string());
        ready.selected_value = Some(PreferenceCodec::serialize(&cond("のんびり", Some(30_000))));

        let mut pending = MemberChoice::joined(UserId::new("u2").unwrap());
        pending.selected_area = Some("鎌倉".to_string());
        pending.selected_value = Some(PreferenceCodec::serialize(&cond("アクティブ", None)));

        let group: GroupId = "trip".parse().unwrap();
        let verdict = Aggregator::aggregate_snapshot(&GroupSnapshot::new(group, vec![ready, pending]));

        assert_eq!(verdict.member_count, 1);
        assert_eq!(verdict.area_consensus(), Some("箱根"));
        assert_eq!(verdict.purpose_consensus(), Some("温泉"));
        assert_eq!(verdict.area.count_of("鎌倉"), 0);
        assert_eq!(verdict.aggregate_mismatch, Percentage::ZERO);
    }

    fn arb_condition() -> impl Strategy<Value = ParsedCondition> {
        let style = prop::sample::select(vec!["のんびり", "まったり", "バランス", "ややアクティブ", "アクティブ", "謎"]);
        (
            prop::option::of(style),
            prop::option::of(prop::sample::select(vec!["近場", "遠出"])),
            prop::option::of(0u64..150_000),
        )
            .prop_map(|(s, d, b)| ParsedCondition {
                spending_style: s.map(String::from),
                distance: d.map(String::from),
                crowd: None,
                time: None,
                budget: b,
            })
    }

    proptest! {
        #[test]
        fn scores_stay_in_range(conditions in prop::collection::vec(arb_condition(), 0..12)) {
            let verdict = Aggregator::aggregate(&conditions);
            for axis in &verdict.axes {
                prop_assert!(axis.mismatch.value() <= 100);
                if !conditions.is_empty() {
                    prop_assert!(axis.average >= 1.0 && axis.average <= 5.0);
                }
            }
            prop_assert_eq!(
                verdict.confidence.value(),
                100 - verdict.aggregate_mismatch.value()
            );
        }

        #[test]
        fn distinct_values_are_never_unanimous(n in 2usize..=5) {
            let styles = ["のんびり", "まったり", "バランス", "ややアクティブ", "アクティブ"];
            let conditions: Vec<ParsedCondition> =
                styles[..n].iter().map(|s| cond(s, None)).collect();
            let verdict = Aggregator::aggregate(&conditions);
            prop_assert!(verdict.axis(Axis::SpendingStyle).mismatch.value() > 0);
        }
    }
}

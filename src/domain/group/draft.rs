//! Local selection state of one member, checked before confirming.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::preference::{Axis, ParsedCondition, PreferenceCodec, RESERVED_VALUE_CHAR};

use super::{MemberChoice, MemberChoiceUpdate};

/// What a member has picked so far in the selection flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionDraft {
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub condition: ParsedCondition,
}

impl SelectionDraft {
    /// Rebuilds a draft from a stored row, e.g. when reopening editing.
    pub fn from_member(member: &MemberChoice) -> Self {
        Self {
            area: member.selected_area.clone(),
            purpose: member.selected_purpose.clone(),
            condition: member.condition(),
        }
    }

    /// Fields still missing, area and purpose first, then axes in
    /// canonical order. Blank strings count as missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.area) {
            missing.push("area");
        }
        if is_blank(&self.purpose) {
            missing.push("purpose");
        }
        for axis in Axis::ALL {
            let present = match axis {
                Axis::Budget => self.condition.budget.is_some(),
                other => self
                    .condition
                    .categorical(other)
                    .is_some_and(|v| !v.trim().is_empty()),
            };
            if !present {
                missing.push(axis.field_name());
            }
        }
        missing
    }

    /// Precondition for `collecting -> ready`: area, purpose and all five
    /// axes selected, with every categorical value storable as-is.
    pub fn complete(self) -> Result<CompleteSelection, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::incomplete_selection(missing));
        }
        let condition = self.storable_condition()?;

        Ok(CompleteSelection {
            area: self.area.unwrap_or_default().trim().to_string(),
            purpose: self.purpose.unwrap_or_default().trim().to_string(),
            condition,
        })
    }

    /// Partial write that keeps the member in the collecting state.
    pub fn to_progress_update(&self) -> Result<MemberChoiceUpdate, ValidationError> {
        let condition = self.storable_condition()?;
        Ok(MemberChoiceUpdate {
            selected_area: self.area.clone(),
            selected_purpose: self.purpose.clone(),
            selected_value: (!condition.is_empty())
                .then(|| PreferenceCodec::serialize(&condition)),
            is_ready: false,
        })
    }

    /// Trimmed copy of the condition, or the first axis whose value would
    /// not parse back from the stored string.
    fn storable_condition(&self) -> Result<ParsedCondition, ValidationError> {
        let mut condition = self.condition.clone();
        for axis in Axis::ALL {
            let slot = match axis {
                Axis::SpendingStyle => &mut condition.spending_style,
                Axis::Distance => &mut condition.distance,
                Axis::Crowd => &mut condition.crowd,
                Axis::Time => &mut condition.time,
                Axis::Budget => continue,
            };
            if let Some(value) = slot.take() {
                let value = value.trim();
                if !PreferenceCodec::can_encode(value) {
                    return Err(ValidationError::invalid_format(
                        axis.field_name(),
                        format!("must not contain '{}'", RESERVED_VALUE_CHAR),
                    ));
                }
                *slot = (!value.is_empty()).then(|| value.to_string());
            }
        }
        Ok(condition)
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// A draft that passed [`SelectionDraft::complete`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompleteSelection {
    area: String,
    purpose: String,
    condition: ParsedCondition,
}

impl CompleteSelection {
    /// Returns the chosen area.
    pub fn area(&self) -> &str {
        &self.area
    }

    /// Returns the chosen purpose.
    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    /// Returns the complete condition.
    pub fn condition(&self) -> &ParsedCondition {
        &self.condition
    }

    /// The write that marks the member ready.
    pub fn to_ready_update(&self) -> MemberChoiceUpdate {
        MemberChoiceUpdate {
            selected_area: Some(self.area.clone()),
            selected_purpose: Some(self.purpose.clone()),
            selected_value: Some(PreferenceCodec::serialize(&self.condition)),
            is_ready: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn full_draft() -> SelectionDraft {
        SelectionDraft {
            area: Some("渋谷".to_string()),
            purpose: Some("カフェ".to_string()),
            condition: ParsedCondition::new("のんびり", "近場", "静か", "半日", 30_000),
        }
    }

    #[test]
    fn full_draft_completes() {
        let selection = full_draft().complete().unwrap();
        assert_eq!(selection.area(), "渋谷");
        assert_eq!(selection.purpose(), "カフェ");
        assert!(selection.condition().is_complete());
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let err = SelectionDraft::default().complete().unwrap_err();
        assert_eq!(
            err,
            ValidationError::incomplete_selection(vec![
                "area",
                "purpose",
                "spending_style",
                "distance",
                "crowd",
                "budget",
                "time",
            ])
        );
    }

    #[test]
    fn blank_area_counts_as_missing() {
        let draft = SelectionDraft {
            area: Some("   ".to_string()),
            ..full_draft()
        };
        assert_eq!(draft.missing_fields(), vec!["area"]);
    }

    #[test]
    fn missing_single_axis_blocks_completion() {
        let mut draft = full_draft();
        draft.condition.crowd = None;
        assert_eq!(draft.missing_fields(), vec!["crowd"]);
        assert!(draft.complete().is_err());
    }

    #[test]
    fn separator_inside_value_is_rejected() {
        let mut draft = full_draft();
        draft.condition.spending_style = Some("のんびり / 距離:遠出".to_string());
        assert_eq!(
            draft.complete().unwrap_err(),
            ValidationError::invalid_format("spending_style", "must not contain '/'")
        );

        let mut draft = full_draft();
        draft.condition.time = Some("/".to_string());
        match draft.complete().unwrap_err() {
            ValidationError::InvalidFormat { field, .. } => assert_eq!(field, "time"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn completed_condition_parses_back_unchanged() {
        let mut draft = full_draft();
        draft.condition.crowd = Some("  静か ".to_string());
        let selection = draft.complete().unwrap();
        assert_eq!(selection.condition().crowd.as_deref(), Some("静か"));

        let stored = selection.to_ready_update().selected_value.unwrap();
        assert_eq!(PreferenceCodec::parse(Some(stored.as_str())), *selection.condition());
    }

    #[test]
    fn progress_with_separator_is_rejected() {
        let draft = SelectionDraft {
            condition: ParsedCondition {
                distance: Some("近場/遠出".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        match draft.to_progress_update().unwrap_err() {
            ValidationError::InvalidFormat { field, .. } => assert_eq!(field, "distance"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn ready_update_serializes_condition() {
        let update = full_draft().complete().unwrap().to_ready_update();
        assert!(update.is_ready);
        assert_eq!(
            update.selected_value.as_deref(),
            Some("過ごし方:のんびり / 距離:近場 / 人の多さ:静か / 時間:半日 / 予算:30000円")
        );
    }

    #[test]
    fn progress_update_is_never_ready() {
        let draft = SelectionDraft {
            area: Some("新宿".to_string()),
            ..Default::default()
        };
        let update = draft.to_progress_update().unwrap();
        assert!(!update.is_ready);
        assert_eq!(update.selected_area.as_deref(), Some("新宿"));
        assert!(update.selected_value.is_none());
    }

    #[test]
    fn draft_round_trips_through_member_row() {
        let mut member = MemberChoice::joined(UserId::new("alice").unwrap());
        member.apply(full_draft().complete().unwrap().to_ready_update());
        assert_eq!(SelectionDraft::from_member(&member), full_draft());
    }
}

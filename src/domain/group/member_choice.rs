//! Member choice row, owned by the member store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::preference::{ParsedCondition, PreferenceCodec};

/// One member's stored selection.
///
/// The core treats every instance as an immutable snapshot of the row at
/// read time.
///
/// # Invariants
///
/// - `is_ready` implies `selected_value` is present and parses to a complete
///   condition (enforced by the submit handler before the write)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberChoice {
    pub user_id: UserId,
    pub selected_area: Option<String>,
    pub selected_purpose: Option<String>,
    /// Serialized condition, see [`PreferenceCodec`].
    pub selected_value: Option<String>,
    pub is_ready: bool,
    pub updated_at: Timestamp,
}

impl MemberChoice {
    /// Creates the empty row of a member who just joined.
    pub fn joined(user_id: UserId) -> Self {
        Self {
            user_id,
            selected_area: None,
            selected_purpose: None,
            selected_value: None,
            is_ready: false,
            updated_at: Timestamp::now(),
        }
    }

    /// Parses the stored condition. Never fails.
    pub fn condition(&self) -> ParsedCondition {
        PreferenceCodec::parse(self.selected_value.as_deref())
    }

    /// True if this row belongs to the ready partition of a snapshot.
    pub fn counts_as_ready(&self) -> bool {
        self.is_ready && self.selected_value.is_some()
    }

    /// True if the member has touched any field.
    pub fn has_any_selection(&self) -> bool {
        [
            &self.selected_area,
            &self.selected_purpose,
            &self.selected_value,
        ]
        .iter()
        .any(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }

    /// Applies an upsert, leaving absent fields unchanged.
    pub fn apply(&mut self, update: MemberChoiceUpdate) {
        if let Some(area) = update.selected_area {
            self.selected_area = Some(area);
        }
        if let Some(purpose) = update.selected_purpose {
            self.selected_purpose = Some(purpose);
        }
        if let Some(value) = update.selected_value {
            self.selected_value = Some(value);
        }
        self.is_ready = update.is_ready;
        self.updated_at = Timestamp::now();
    }
}

/// Fields written by `MemberStore::upsert_member`.
///
/// `None` leaves the stored field as it is; `is_ready` is always written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberChoiceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_purpose: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_value: Option<String>,
    pub is_ready: bool,
}

impl MemberChoiceUpdate {
    /// Update that only flips the ready flag.
    pub fn readiness(is_ready: bool) -> Self {
        Self {
            is_ready,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserId {
        UserId::new("alice").unwrap()
    }

    #[test]
    fn joined_member_is_blank() {
        let m = MemberChoice::joined(alice());
        assert!(!m.is_ready);
        assert!(!m.has_any_selection());
        assert!(m.condition().is_empty());
    }

    #[test]
    fn ready_without_value_is_not_in_ready_partition() {
        let mut m = MemberChoice::joined(alice());
        m.is_ready = true;
        assert!(!m.counts_as_ready());

        m.selected_value = Some("過ごし方:のんびり".to_string());
        assert!(m.counts_as_ready());
    }

    #[test]
    fn blank_strings_do_not_count_as_selection() {
        let mut m = MemberChoice::joined(alice());
        m.selected_area = Some("  ".to_string());
        assert!(!m.has_any_selection());

        m.selected_purpose = Some("カフェ".to_string());
        assert!(m.has_any_selection());
    }

    #[test]
    fn apply_keeps_absent_fields() {
        let mut m = MemberChoice::joined(alice());
        m.apply(MemberChoiceUpdate {
            selected_area: Some("渋谷".to_string()),
            selected_purpose: Some("カフェ".to_string()),
            selected_value: None,
            is_ready: false,
        });
        m.apply(MemberChoiceUpdate::readiness(true));

        assert_eq!(m.selected_area.as_deref(), Some("渋谷"));
        assert_eq!(m.selected_purpose.as_deref(), Some("カフェ"));
        assert!(m.is_ready);
    }

    #[test]
    fn update_deserializes_with_missing_optionals() {
        let update: MemberChoiceUpdate = serde_json::from_str(r#"{"is_ready": true}"#).unwrap();
        assert_eq!(update, MemberChoiceUpdate::readiness(true));
    }
}

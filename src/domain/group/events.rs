//! Group domain events.
//!
//! `MemberChoiceChanged` is what the member store delivers to subscribers;
//! the other two are published by the command handlers for audit.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{domain_event, EventId, GroupId, Timestamp, UserId};

/// A member's row was inserted or updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberChoiceChanged {
    pub event_id: EventId,
    pub group_id: GroupId,
    pub user_id: UserId,
    pub is_ready: bool,
    pub changed_at: Timestamp,
}

domain_event!(
    MemberChoiceChanged,
    event_type = "member_choice.changed.v1",
    schema_version = 1,
    aggregate_id = group_id,
    aggregate_type = "Group",
    occurred_at = changed_at,
    event_id = event_id
);

/// A member confirmed a complete selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSubmitted {
    pub event_id: EventId,
    pub group_id: GroupId,
    pub user_id: UserId,
    pub area: String,
    pub purpose: String,
    pub selected_value: String,
    pub submitted_at: Timestamp,
}

domain_event!(
    SelectionSubmitted,
    event_type = "selection.submitted.v1",
    schema_version = 1,
    aggregate_id = group_id,
    aggregate_type = "Group",
    occurred_at = submitted_at,
    event_id = event_id
);

/// A ready member went back to editing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionReopened {
    pub event_id: EventId,
    pub group_id: GroupId,
    pub user_id: UserId,
    pub reopened_at: Timestamp,
}

domain_event!(
    SelectionReopened,
    event_type = "selection.reopened.v1",
    schema_version = 1,
    aggregate_id = group_id,
    aggregate_type = "Group",
    occurred_at = reopened_at,
    event_id = event_id
);

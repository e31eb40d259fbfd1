//! ReopenSelectionHandler - sends a ready member back to editing.

use std::sync::Arc;

use crate::domain::foundation::{
    EventId, GroupId, SerializableDomainEvent, StateMachine, Timestamp, UserId,
};
use crate::domain::group::{
    MemberChoice, MemberChoiceUpdate, SelectionDraft, SelectionReopened, SelectionStage,
};
use crate::ports::MemberStore;

use super::GroupError;

/// Command to reopen a member's selection.
#[derive(Debug, Clone)]
pub struct ReopenSelectionCommand {
    pub group_id: GroupId,
    pub user_id: UserId,
}

/// Result of a reopen.
#[derive(Debug, Clone)]
pub struct ReopenSelectionResult {
    pub member: MemberChoice,
    /// The stored selection, ready to edit.
    pub draft: SelectionDraft,
    /// `None` when the member was not ready and nothing changed.
    pub event: Option<SelectionReopened>,
}

/// Handler for reopening selections.
pub struct ReopenSelectionHandler {
    store: Arc<dyn MemberStore>,
}

impl ReopenSelectionHandler {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ReopenSelectionCommand) -> Result<ReopenSelectionResult, GroupError> {
        let snapshot = self.store.get_members(&cmd.group_id).await?;
        let Some(member) = snapshot.member(&cmd.user_id).cloned() else {
            return Err(GroupError::MemberNotFound(cmd.user_id));
        };

        let stage = SelectionStage::of(&member);
        if stage.is_collecting() {
            return Ok(ReopenSelectionResult {
                draft: SelectionDraft::from_member(&member),
                member,
                event: None,
            });
        }
        stage.transition_to(SelectionStage::Selecting)?;

        let member = self
            .store
            .upsert_member(&cmd.group_id, &cmd.user_id, MemberChoiceUpdate::readiness(false))
            .await?;

        let event = SelectionReopened {
            event_id: EventId::new(),
            group_id: cmd.group_id,
            user_id: cmd.user_id,
            reopened_at: Timestamp::now(),
        };
        let envelope = event.to_envelope().with_user_id(event.user_id.to_string());
        tracing::info!(
            group_id = %event.group_id,
            user_id = %event.user_id,
            event_type = %envelope.event_type,
            "selection reopened"
        );

        Ok(ReopenSelectionResult {
            draft: SelectionDraft::from_member(&member),
            member,
            event: Some(event),
        })
    }
}

//! SaveProgressHandler - stores a partial selection while collecting.

use std::sync::Arc;

use crate::domain::foundation::{GroupId, UserId};
use crate::domain::group::{MemberChoice, SelectionDraft, SelectionStage};
use crate::ports::MemberStore;

use super::GroupError;

/// Command to store an in-progress selection.
#[derive(Debug, Clone)]
pub struct SaveProgressCommand {
    pub group_id: GroupId,
    pub user_id: UserId,
    pub draft: SelectionDraft,
}

/// Result of saving progress.
#[derive(Debug, Clone)]
pub struct SaveProgressResult {
    pub member: MemberChoice,
    pub stage: SelectionStage,
    /// Fields still needed before the member can submit.
    pub missing: Vec<&'static str>,
}

/// Handler for saving partial selections.
pub struct SaveProgressHandler {
    store: Arc<dyn MemberStore>,
}

impl SaveProgressHandler {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SaveProgressCommand) -> Result<SaveProgressResult, GroupError> {
        let snapshot = self.store.get_members(&cmd.group_id).await?;
        let stage = snapshot
            .member(&cmd.user_id)
            .map(SelectionStage::of)
            .unwrap_or_default();
        if !stage.is_collecting() {
            tracing::warn!(group_id = %cmd.group_id, user_id = %cmd.user_id, "progress rejected for ready member");
            return Err(GroupError::AlreadyReady(cmd.user_id));
        }

        let update = cmd.draft.to_progress_update()?;
        let member = self
            .store
            .upsert_member(&cmd.group_id, &cmd.user_id, update)
            .await?;
        let stage = SelectionStage::of(&member);

        tracing::debug!(group_id = %cmd.group_id, user_id = %cmd.user_id, stage = %stage, "progress saved");

        Ok(SaveProgressResult {
            member,
            stage,
            missing: cmd.draft.missing_fields(),
        })
    }
}

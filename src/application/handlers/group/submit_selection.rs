//! SubmitSelectionHandler - confirms a member's complete selection.

use std::sync::Arc;

use crate::domain::foundation::{
    EventId, GroupId, SerializableDomainEvent, StateMachine, Timestamp, UserId,
};
use crate::domain::group::{MemberChoice, SelectionDraft, SelectionStage, SelectionSubmitted};
use crate::ports::MemberStore;

use super::GroupError;

/// Command to mark a member ready with the given selection.
#[derive(Debug, Clone)]
pub struct SubmitSelectionCommand {
    pub group_id: GroupId,
    pub user_id: UserId,
    pub draft: SelectionDraft,
}

/// Result of a successful submit.
#[derive(Debug, Clone)]
pub struct SubmitSelectionResult {
    pub member: MemberChoice,
    pub event: SelectionSubmitted,
}

/// Handler for submitting selections.
pub struct SubmitSelectionHandler {
    store: Arc<dyn MemberStore>,
}

impl SubmitSelectionHandler {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SubmitSelectionCommand) -> Result<SubmitSelectionResult, GroupError> {
        // 1. Every field must be chosen before the member can be ready
        let selection = cmd.draft.complete().map_err(|e| {
            tracing::warn!(group_id = %cmd.group_id, user_id = %cmd.user_id, error = %e, "submit rejected");
            GroupError::from(e)
        })?;

        // 2. Only a collecting member can become ready
        let snapshot = self.store.get_members(&cmd.group_id).await?;
        let stage = snapshot
            .member(&cmd.user_id)
            .map(SelectionStage::of)
            .unwrap_or_default();
        stage
            .transition_to(SelectionStage::Ready)
            .map_err(|_| GroupError::AlreadyReady(cmd.user_id.clone()))?;

        // 3. Persist
        let update = selection.to_ready_update();
        let selected_value = update.selected_value.clone().unwrap_or_default();
        let member = self
            .store
            .upsert_member(&cmd.group_id, &cmd.user_id, update)
            .await?;

        // 4. Record
        let event = SelectionSubmitted {
            event_id: EventId::new(),
            group_id: cmd.group_id,
            user_id: cmd.user_id,
            area: selection.area().to_string(),
            purpose: selection.purpose().to_string(),
            selected_value,
            submitted_at: Timestamp::now(),
        };
        let envelope = event.to_envelope().with_user_id(event.user_id.to_string());
        tracing::info!(
            group_id = %event.group_id,
            user_id = %event.user_id,
            event_type = %envelope.event_type,
            from = %stage,
            "selection submitted"
        );

        Ok(SubmitSelectionResult { member, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryMemberStore;
    use crate::application::handlers::group::test_support::{
        full_draft, group, user, UnavailableStore,
    };
    use crate::domain::group::MemberChoiceUpdate;
    use crate::domain::preference::PreferenceCodec;

    fn command(draft: SelectionDraft) -> SubmitSelectionCommand {
        SubmitSelectionCommand {
            group_id: group(),
            user_id: user("alice"),
            draft,
        }
    }

    #[tokio::test]
    async fn submit_marks_member_ready() {
        let store = Arc::new(InMemoryMemberStore::new());
        let handler = SubmitSelectionHandler::new(store.clone());

        let result = handler.handle(command(full_draft("のんびり"))).await.unwrap();

        assert!(result.member.is_ready);
        assert_eq!(result.member.selected_area.as_deref(), Some("箱根"));
        let stored = PreferenceCodec::parse(result.member.selected_value.as_deref());
        assert_eq!(stored.spending_style.as_deref(), Some("のんびり"));
        assert_eq!(result.event.purpose, "温泉");

        let snapshot = store.get_members(&group()).await.unwrap();
        assert!(snapshot.all_ready());
    }

    #[tokio::test]
    async fn incomplete_draft_is_rejected_without_write() {
        let store = Arc::new(InMemoryMemberStore::new());
        let handler = SubmitSelectionHandler::new(store.clone());
        let mut draft = full_draft("のんびり");
        draft.purpose = None;
        draft.condition.budget = None;

        let err = handler.handle(command(draft)).await.unwrap_err();

        assert_eq!(err, GroupError::IncompleteSelection(vec!["purpose", "budget"]));
        assert!(store.get_members(&group()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn value_with_separator_is_rejected_without_write() {
        let store = Arc::new(InMemoryMemberStore::new());
        let handler = SubmitSelectionHandler::new(store.clone());

        let err = handler
            .handle(command(full_draft("のんびり / 距離:遠出")))
            .await
            .unwrap_err();

        match err {
            GroupError::ValidationFailed { field, .. } => assert_eq!(field, "spending_style"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(store.get_members(&group()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn stored_value_parses_back_to_submitted_condition() {
        let store = Arc::new(InMemoryMemberStore::new());
        let handler = SubmitSelectionHandler::new(store);

        let result = handler.handle(command(full_draft(" まったり "))).await.unwrap();

        let stored = PreferenceCodec::parse(result.member.selected_value.as_deref());
        assert_eq!(stored.spending_style.as_deref(), Some("まったり"));
        assert_eq!(stored.distance.as_deref(), Some("近場"));
        assert!(stored.is_complete());
    }

    #[tokio::test]
    async fn submitting_twice_requires_reopen() {
        let store = Arc::new(InMemoryMemberStore::new());
        let handler = SubmitSelectionHandler::new(store.clone());
        handler.handle(command(full_draft("のんびり"))).await.unwrap();

        let err = handler.handle(command(full_draft("アクティブ"))).await.unwrap_err();

        assert_eq!(err, GroupError::AlreadyReady(user("alice")));
    }

    #[tokio::test]
    async fn member_in_progress_can_submit() {
        let store = Arc::new(InMemoryMemberStore::new());
        store
            .upsert_member(
                &group(),
                &user("alice"),
                MemberChoiceUpdate {
                    selected_area: Some("鎌倉".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let handler = SubmitSelectionHandler::new(store);

        let result = handler.handle(command(full_draft("バランス"))).await.unwrap();
        assert_eq!(result.member.selected_area.as_deref(), Some("箱根"));
    }

    #[tokio::test]
    async fn store_failure_is_infrastructure_error() {
        let handler = SubmitSelectionHandler::new(Arc::new(UnavailableStore));
        let err = handler.handle(command(full_draft("のんびり"))).await.unwrap_err();
        assert!(matches!(err, GroupError::Infrastructure(_)));
    }
}

//! In-memory member store.
//!
//! Rows live in a map keyed by group. Change notifications are delivered
//! inline after each upsert, once the write lock has been released, so a
//! subscriber may immediately read the group again.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    DomainError, EventId, GroupId, SerializableDomainEvent, Timestamp, UserId,
};
use crate::domain::group::{GroupSnapshot, MemberChoice, MemberChoiceChanged, MemberChoiceUpdate};
use crate::ports::{MemberChangeHandler, MemberStore, SubscriptionId};

#[derive(Default)]
struct GroupState {
    members: Vec<MemberChoice>,
    subscribers: Vec<(SubscriptionId, Arc<dyn MemberChangeHandler>)>,
}

/// Member store backed by process memory.
///
/// Handler failures are logged and do not fail the write; every handler
/// sees every change.
pub struct InMemoryMemberStore {
    groups: RwLock<HashMap<GroupId, GroupState>>,
    next_subscription: AtomicU64,
}

impl InMemoryMemberStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            groups: RwLock::new(HashMap::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    /// Number of live subscriptions for a group.
    pub async fn subscriber_count(&self, group_id: &GroupId) -> usize {
        self.groups
            .read()
            .await
            .get(group_id)
            .map_or(0, |g| g.subscribers.len())
    }

    async fn notify(&self, handlers: Vec<Arc<dyn MemberChangeHandler>>, row: &MemberChoice, group_id: &GroupId) {
        if handlers.is_empty() {
            return;
        }

        let event = MemberChoiceChanged {
            event_id: EventId::new(),
            group_id: group_id.clone(),
            user_id: row.user_id.clone(),
            is_ready: row.is_ready,
            changed_at: row.updated_at,
        };
        let envelope = event.to_envelope().with_user_id(row.user_id.to_string());

        for handler in handlers {
            if let Err(e) = handler.handle(envelope.clone()).await {
                tracing::warn!(
                    handler = handler.name(),
                    group_id = %group_id,
                    error = %e,
                    "member change handler failed"
                );
            }
        }
    }
}

impl Default for InMemoryMemberStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberStore for InMemoryMemberStore {
    async fn get_members(&self, group_id: &GroupId) -> Result<GroupSnapshot, DomainError> {
        let members = self
            .groups
            .read()
            .await
            .get(group_id)
            .map(|g| g.members.clone())
            .unwrap_or_default();
        Ok(GroupSnapshot::new(group_id.clone(), members))
    }

    async fn upsert_member(
        &self,
        group_id: &GroupId,
        user_id: &UserId,
        update: MemberChoiceUpdate,
    ) -> Result<MemberChoice, DomainError> {
        let (row, handlers) = {
            let mut groups = self.groups.write().await;
            let group = groups.entry(group_id.clone()).or_default();

            let index = match group.members.iter().position(|m| &m.user_id == user_id) {
                Some(index) => index,
                None => {
                    tracing::debug!(group_id = %group_id, user_id = %user_id, "member joined");
                    group.members.push(MemberChoice::joined(user_id.clone()));
                    group.members.len() - 1
                }
            };
            group.members[index].apply(update);

            let handlers: Vec<_> = group.subscribers.iter().map(|(_, h)| Arc::clone(h)).collect();
            (group.members[index].clone(), handlers)
        };

        tracing::debug!(
            group_id = %group_id,
            user_id = %user_id,
            is_ready = row.is_ready,
            subscribers = handlers.len(),
            "member row upserted"
        );

        self.notify(handlers, &row, group_id).await;
        Ok(row)
    }

    async fn subscribe(
        &self,
        group_id: &GroupId,
        handler: Arc<dyn MemberChangeHandler>,
    ) -> Result<SubscriptionId, DomainError> {
        let id = SubscriptionId::new(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        tracing::debug!(group_id = %group_id, handler = handler.name(), subscription = %id, "subscribed");
        self.groups
            .write()
            .await
            .entry(group_id.clone())
            .or_default()
            .subscribers
            .push((id, handler));
        Ok(id)
    }

    async fn unsubscribe(&self, group_id: &GroupId, id: SubscriptionId) -> Result<(), DomainError> {
        if let Some(group) = self.groups.write().await.get_mut(group_id) {
            group.subscribers.retain(|(sub, _)| *sub != id);
        }
        Ok(())
    }
}

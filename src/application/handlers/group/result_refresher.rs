//! ResultRefresher - keeps a group's result view current.
//!
//! Subscribes to the member store and recomputes the whole view from a fresh
//! snapshot on every change notification. There is no incremental update;
//! duplicate or reordered notifications just recompute the same view.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

use crate::domain::analysis::RadarLayout;
use crate::domain::foundation::{DomainError, EventEnvelope, GroupId};
use crate::ports::{IdentityProvider, MemberChangeHandler, MemberStore, SubscriptionId};

use super::{GroupError, GroupResultView};

/// Recomputes and publishes a group's result view.
pub struct ResultRefresher {
    store: Arc<dyn MemberStore>,
    identity: Arc<dyn IdentityProvider>,
    layout: RadarLayout,
    group_id: GroupId,
    sender: watch::Sender<GroupResultView>,
}

impl ResultRefresher {
    /// Computes the initial view and subscribes to changes.
    pub async fn start(
        store: Arc<dyn MemberStore>,
        identity: Arc<dyn IdentityProvider>,
        layout: RadarLayout,
        group_id: GroupId,
    ) -> Result<LiveResult, GroupError> {
        let snapshot = store.get_members(&group_id).await?;
        let viewer = identity.current_user_id();
        let initial = GroupResultView::from_snapshot(&snapshot, &layout, viewer.as_ref());
        let (sender, receiver) = watch::channel(initial);

        let refresher = Arc::new(Self {
            store: Arc::clone(&store),
            identity,
            layout,
            group_id: group_id.clone(),
            sender,
        });
        let subscription = store.subscribe(&group_id, refresher.clone()).await?;

        tracing::debug!(group_id = %group_id, subscription = %subscription, "result refresher started");

        Ok(LiveResult {
            store,
            group_id,
            subscription,
            receiver,
            _refresher: refresher,
        })
    }

    /// Re-reads the group and publishes the recomputed view.
    pub async fn refresh(&self) -> Result<(), DomainError> {
        let snapshot = self.store.get_members(&self.group_id).await?;
        let viewer = self.identity.current_user_id();
        let view = GroupResultView::from_snapshot(&snapshot, &self.layout, viewer.as_ref());

        tracing::debug!(
            group_id = %self.group_id,
            ready = snapshot.ready_count(),
            members = snapshot.len(),
            show_result = view.is_ready(),
            "group result recomputed"
        );

        self.sender.send_replace(view);
        Ok(())
    }
}

#[async_trait]
impl MemberChangeHandler for ResultRefresher {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        tracing::trace!(event_id = %event.event_id, event_type = %event.event_type, "member change received");
        self.refresh().await
    }

    fn name(&self) -> &'static str {
        "ResultRefresher"
    }
}

/// A running refresher and the channel it publishes on.
pub struct LiveResult {
    store: Arc<dyn MemberStore>,
    group_id: GroupId,
    subscription: SubscriptionId,
    receiver: watch::Receiver<GroupResultView>,
    _refresher: Arc<ResultRefresher>,
}

impl LiveResult {
    /// The latest published view.
    pub fn latest(&self) -> GroupResultView {
        self.receiver.borrow().clone()
    }

    /// A receiver that can await further updates.
    pub fn subscribe(&self) -> watch::Receiver<GroupResultView> {
        self.receiver.clone()
    }

    /// Unsubscribes from the store.
    pub async fn stop(self) -> Result<(), GroupError> {
        self.store.unsubscribe(&self.group_id, self.subscription).await?;
        tracing::debug!(group_id = %self.group_id, "result refresher stopped");
        Ok(())
    }
}

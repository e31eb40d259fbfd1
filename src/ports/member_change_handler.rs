//! MemberChangeHandler port - reacts to changes in a group's member rows.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler registered with [`MemberStore::subscribe`].
///
/// The envelope carries a `MemberChoiceChanged` payload, but handlers should
/// treat it only as a signal: re-fetch the snapshot and recompute everything.
/// Delivery is at-least-once with no ordering guarantee, so handling must be
/// idempotent.
///
/// [`MemberStore::subscribe`]: super::MemberStore::subscribe
#[async_trait]
pub trait MemberChangeHandler: Send + Sync {
    /// Process one change notification.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

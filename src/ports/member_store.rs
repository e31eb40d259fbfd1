//! MemberStore port - the external owner of member rows.
//!
//! The store is the only shared state between members. Each member writes
//! only its own row; there is no lock or transaction spanning members, and
//! the core never assumes a consistent moment beyond one `get_members` read.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, GroupId, UserId};
use crate::domain::group::{GroupSnapshot, MemberChoice, MemberChoiceUpdate};

use super::MemberChangeHandler;

/// Handle returned by [`MemberStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// CRUD and change subscription over the members of a group.
///
/// # Contract
///
/// Implementations must:
/// - Return the full set of rows for the group on every `get_members` call
///   (an unknown group is an empty snapshot, not an error)
/// - Make `upsert_member` idempotent per `(group_id, user_id)`, creating the
///   row on first write
/// - Notify every subscriber of the group after each successful upsert
/// - Return `ErrorCode::StoreUnavailable` for transport failures
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Reads every member row of a group.
    async fn get_members(&self, group_id: &GroupId) -> Result<GroupSnapshot, DomainError>;

    /// Creates or updates one member's row, returning the stored row.
    async fn upsert_member(
        &self,
        group_id: &GroupId,
        user_id: &UserId,
        update: MemberChoiceUpdate,
    ) -> Result<MemberChoice, DomainError>;

    /// Registers a handler for changes to a group's members.
    async fn subscribe(
        &self,
        group_id: &GroupId,
        handler: Arc<dyn MemberChangeHandler>,
    ) -> Result<SubscriptionId, DomainError>;

    /// Removes a subscription. Unknown IDs are ignored.
    async fn unsubscribe(&self, group_id: &GroupId, id: SubscriptionId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_store_object_safe(_: &dyn MemberStore) {}

    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn member_store_is_send_sync() {
        fn check<T: MemberStore>() {
            assert_send_sync::<T>();
        }
    }

    #[test]
    fn subscription_id_displays_with_prefix() {
        assert_eq!(SubscriptionId::new(7).to_string(), "sub-7");
        assert_eq!(SubscriptionId::new(7).value(), 7);
    }
}

//! Shared fixtures for group handler tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, GroupId, UserId};
use crate::domain::group::{GroupSnapshot, MemberChoice, MemberChoiceUpdate, SelectionDraft};
use crate::domain::preference::ParsedCondition;
use crate::ports::{MemberChangeHandler, MemberStore, SubscriptionId};

pub fn group() -> GroupId {
    "trip".parse().unwrap()
}

pub fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

pub fn condition(style: &str) -> ParsedCondition {
    ParsedCondition::new(style, "近場", "静か", "半日", 30_000)
}

pub fn full_draft(style: &str) -> SelectionDraft {
    SelectionDraft {
        area: Some("箱根".to_string()),
        purpose: Some("温泉".to_string()),
        condition: condition(style),
    }
}

/// Store whose every call fails.
pub struct UnavailableStore;

#[async_trait]
impl MemberStore for UnavailableStore {
    async fn get_members(&self, _: &GroupId) -> Result<GroupSnapshot, DomainError> {
        Err(DomainError::store_unavailable("connection refused"))
    }

    async fn upsert_member(
        &self,
        _: &GroupId,
        _: &UserId,
        _: MemberChoiceUpdate,
    ) -> Result<MemberChoice, DomainError> {
        Err(DomainError::store_unavailable("connection refused"))
    }

    async fn subscribe(
        &self,
        _: &GroupId,
        _: Arc<dyn MemberChangeHandler>,
    ) -> Result<SubscriptionId, DomainError> {
        Err(DomainError::store_unavailable("connection refused"))
    }

    async fn unsubscribe(&self, _: &GroupId, _: SubscriptionId) -> Result<(), DomainError> {
        Err(DomainError::store_unavailable("connection refused"))
    }
}

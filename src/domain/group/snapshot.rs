//! Group snapshot: every member row of one group at one read.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GroupId, UserId};
use crate::domain::preference::ParsedCondition;

use super::MemberChoice;

/// All member rows of a group as returned by one `get_members` call.
///
/// Never cached across calls; every aggregation is a pure function of the
/// snapshot it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSnapshot {
    group_id: GroupId,
    members: Vec<MemberChoice>,
}

impl GroupSnapshot {
    /// Wraps the rows of one read.
    pub fn new(group_id: GroupId, members: Vec<MemberChoice>) -> Self {
        Self { group_id, members }
    }

    /// Returns the group ID.
    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    /// Returns all member rows, in store order.
    pub fn members(&self) -> &[MemberChoice] {
        &self.members
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Finds one member's row.
    pub fn member(&self, user_id: &UserId) -> Option<&MemberChoice> {
        self.members.iter().find(|m| &m.user_id == user_id)
    }

    /// Members that are ready and have a stored condition.
    pub fn ready_members(&self) -> impl Iterator<Item = &MemberChoice> + '_ {
        self.members.iter().filter(|m| m.counts_as_ready())
    }

    /// Members outside the ready partition.
    pub fn pending_members(&self) -> impl Iterator<Item = &MemberChoice> + '_ {
        self.members.iter().filter(|m| !m.counts_as_ready())
    }

    /// Number of members in the ready partition.
    pub fn ready_count(&self) -> usize {
        self.ready_members().count()
    }

    /// Parsed conditions of the ready partition.
    pub fn ready_conditions(&self) -> Vec<ParsedCondition> {
        self.ready_members().map(MemberChoice::condition).collect()
    }

    /// Group-level gate: at least one member, and every member ready.
    pub fn all_ready(&self) -> bool {
        !self.members.is_empty() && self.members.iter().all(|m| m.is_ready)
    }

    /// Ready members with the viewer first, others in store order.
    pub fn ready_members_self_first(&self, viewer: Option<&UserId>) -> Vec<&MemberChoice> {
        let (mut ordered, others): (Vec<&MemberChoice>, Vec<&MemberChoice>) = self
            .ready_members()
            .partition(|m| Some(&m.user_id) == viewer);
        ordered.extend(others);
        ordered
    }
}

//! Readiness Coordinator - per-member selection stage and the group gate.
//!
//! ```text
//! NotStarted ──► Selecting ──► Ready
//!      │                ▲        │
//!      └───────► Ready  └────────┘ (reopen)
//! ```
//!
//! NotStarted and Selecting are both "collecting". Results are only shown
//! while every member of the group is Ready, and the decision is re-derived
//! from the latest snapshot on every read.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{StateMachine, UserId};

use super::{GroupSnapshot, MemberChoice};

/// Where a member is in the selection flow for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStage {
    #[default]
    NotStarted,
    Selecting,
    Ready,
}

impl SelectionStage {
    /// Derives the stage of a stored row.
    pub fn of(member: &MemberChoice) -> Self {
        if member.is_ready {
            SelectionStage::Ready
        } else if member.has_any_selection() {
            SelectionStage::Selecting
        } else {
            SelectionStage::NotStarted
        }
    }

    /// True while the member has not confirmed a full selection.
    pub fn is_collecting(&self) -> bool {
        !matches!(self, SelectionStage::Ready)
    }
}

impl StateMachine for SelectionStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SelectionStage::*;
        matches!(
            (self, target),
            (NotStarted, Selecting) | (NotStarted, Ready) | (Selecting, Ready) | (Ready, Selecting)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SelectionStage::*;
        match self {
            NotStarted => vec![Selecting, Ready],
            Selecting => vec![Ready],
            Ready => vec![Selecting],
        }
    }
}

impl fmt::Display for SelectionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SelectionStage::NotStarted => "NotStarted",
            SelectionStage::Selecting => "Selecting",
            SelectionStage::Ready => "Ready",
        };
        write!(f, "{}", s)
    }
}

/// Page a member's view should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageRoute {
    /// Keep collecting this member's selection.
    Collecting,
    /// This member is ready; others are not.
    Waiting,
    /// Everyone is ready; the group result may be rendered.
    ShowResult,
}

/// Group-level readiness decisions.
pub struct ReadinessCoordinator;

impl ReadinessCoordinator {
    /// `size(members) > 0 AND every member.is_ready`.
    pub fn all_ready(snapshot: &GroupSnapshot) -> bool {
        snapshot.all_ready()
    }

    /// Route for one viewer against a fresh snapshot.
    ///
    /// A viewer missing from the snapshot has not started and is collecting.
    pub fn route_for(snapshot: &GroupSnapshot, viewer: &UserId) -> PageRoute {
        let stage = snapshot
            .member(viewer)
            .map(SelectionStage::of)
            .unwrap_or_default();

        if stage.is_collecting() {
            PageRoute::Collecting
        } else if Self::all_ready(snapshot) {
            PageRoute::ShowResult
        } else {
            PageRoute::Waiting
        }
    }

    /// Re-evaluates a page that is already on screen.
    ///
    /// Returns the new route when the page must move; a result page whose
    /// gate closed again goes back to waiting rather than showing stale output.
    pub fn recheck(
        current: PageRoute,
        snapshot: &GroupSnapshot,
        viewer: &UserId,
    ) -> Option<PageRoute> {
        let next = Self::route_for(snapshot, viewer);
        (next != current).then_some(next)
    }
}

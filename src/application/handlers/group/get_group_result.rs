//! GetGroupResultHandler - the comparison result for one group.
//!
//! Results are recomputed from a fresh snapshot on every call. While any
//! member is still collecting, only a waiting summary is returned.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::analysis::{
    Aggregator, GroupVerdict, RadarChart, RadarLayout, RadarProjector, Recommendation,
    RecommendationTagger,
};
use crate::domain::foundation::{GroupId, UserId};
use crate::domain::group::{GroupSnapshot, ReadinessCoordinator};
use crate::ports::{IdentityProvider, MemberStore};

use super::GroupError;

/// Query for a group's result.
#[derive(Debug, Clone)]
pub struct GetGroupResultQuery {
    pub group_id: GroupId,
}

/// Tags for one ready member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRecommendation {
    pub user_id: UserId,
    pub is_self: bool,
    #[serde(flatten)]
    pub recommendation: Recommendation,
}

/// Full result once every member is ready.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupResult {
    pub group_id: GroupId,
    pub verdict: GroupVerdict,
    pub chart: RadarChart,
    /// Viewer first, then store order.
    pub recommendations: Vec<MemberRecommendation>,
}

/// What a result page should render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GroupResultView {
    Waiting {
        group_id: GroupId,
        ready_count: usize,
        member_count: usize,
        /// Members still collecting.
        pending: Vec<UserId>,
    },
    Ready(GroupResult),
}

impl GroupResultView {
    /// Derives the view from one snapshot.
    pub fn from_snapshot(snapshot: &GroupSnapshot, layout: &RadarLayout, viewer: Option<&UserId>) -> Self {
        if !ReadinessCoordinator::all_ready(snapshot) {
            return GroupResultView::Waiting {
                group_id: snapshot.group_id().clone(),
                ready_count: snapshot.ready_count(),
                member_count: snapshot.len(),
                pending: snapshot.pending_members().map(|m| m.user_id.clone()).collect(),
            };
        }

        let verdict = Aggregator::aggregate_snapshot(snapshot);
        let chart = RadarProjector::chart(layout, snapshot, verdict.axis_averages(), viewer);
        let recommendations = snapshot
            .ready_members_self_first(viewer)
            .into_iter()
            .map(|member| MemberRecommendation {
                user_id: member.user_id.clone(),
                is_self: Some(&member.user_id) == viewer,
                recommendation: RecommendationTagger::for_member(member),
            })
            .collect();

        GroupResultView::Ready(GroupResult {
            group_id: snapshot.group_id().clone(),
            verdict,
            chart,
            recommendations,
        })
    }

    /// True once results may be shown.
    pub fn is_ready(&self) -> bool {
        matches!(self, GroupResultView::Ready(_))
    }
}

/// Handler for group result queries.
pub struct GetGroupResultHandler {
    store: Arc<dyn MemberStore>,
    layout: RadarLayout,
}

impl GetGroupResultHandler {
    pub fn new(store: Arc<dyn MemberStore>, layout: RadarLayout) -> Self {
        Self { store, layout }
    }

    pub async fn handle(
        &self,
        query: GetGroupResultQuery,
        identity: &dyn IdentityProvider,
    ) -> Result<GroupResultView, GroupError> {
        let snapshot = self.store.get_members(&query.group_id).await?;
        let viewer = identity.current_user_id();
        let view = GroupResultView::from_snapshot(&snapshot, &self.layout, viewer.as_ref());

        tracing::debug!(
            group_id = %query.group_id,
            members = snapshot.len(),
            ready = snapshot.ready_count(),
            show_result = view.is_ready(),
            "group result computed"
        );

        Ok(view)
    }
}

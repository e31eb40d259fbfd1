//! GetPageRouteHandler - which page a member should be on.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::foundation::{GroupId, UserId};
use crate::domain::group::{PageRoute, ReadinessCoordinator};
use crate::ports::MemberStore;

use super::GroupError;

/// Query for a member's page route.
#[derive(Debug, Clone)]
pub struct GetPageRouteQuery {
    pub group_id: GroupId,
    pub user_id: UserId,
    /// Page currently on screen, if any.
    pub current: Option<PageRoute>,
}

/// Route decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRouteResult {
    pub route: PageRoute,
    /// True when the page on screen must move to `route`.
    pub redirect: bool,
}

/// Handler for page route queries.
pub struct GetPageRouteHandler {
    store: Arc<dyn MemberStore>,
}

impl GetPageRouteHandler {
    pub fn new(store: Arc<dyn MemberStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetPageRouteQuery) -> Result<PageRouteResult, GroupError> {
        let snapshot = self.store.get_members(&query.group_id).await?;

        let result = match query.current {
            Some(current) => match ReadinessCoordinator::recheck(current, &snapshot, &query.user_id) {
                Some(route) => PageRouteResult { route, redirect: true },
                None => PageRouteResult { route: current, redirect: false },
            },
            None => PageRouteResult {
                route: ReadinessCoordinator::route_for(&snapshot, &query.user_id),
                redirect: false,
            },
        };

        if result.redirect {
            tracing::info!(
                group_id = %query.group_id,
                user_id = %query.user_id,
                route = ?result.route,
                "page redirected"
            );
        }

        Ok(result)
    }
}

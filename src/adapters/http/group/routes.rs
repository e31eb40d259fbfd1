//! Route configuration for group endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    get_result, get_route, reopen_selection, save_progress, submit_selection, GroupAppState,
};

/// Creates the group router with all endpoints.
///
/// Routes:
/// - `GET /api/groups/:code/result` - Waiting summary or comparison result
/// - `PUT /api/groups/:code/members/:user_id/selection` - Submit a complete selection
/// - `PUT /api/groups/:code/members/:user_id/draft` - Save a partial selection
/// - `POST /api/groups/:code/members/:user_id/reopen` - Reopen a submitted selection
/// - `GET /api/groups/:code/members/:user_id/route` - Page route (`?current=` to recheck)
pub fn group_router() -> Router<GroupAppState> {
    Router::new()
        .route("/api/groups/:code/result", get(get_result))
        .route("/api/groups/:code/members/:user_id/selection", put(submit_selection))
        .route("/api/groups/:code/members/:user_id/draft", put(save_progress))
        .route("/api/groups/:code/members/:user_id/reopen", post(reopen_selection))
        .route("/api/groups/:code/members/:user_id/route", get(get_route))
}

//! HTTP handlers for group endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::Viewer;
use crate::application::handlers::group::{
    GetGroupResultHandler, GetGroupResultQuery, GetPageRouteHandler, GetPageRouteQuery,
    GroupError, ReopenSelectionCommand, ReopenSelectionHandler, SaveProgressCommand,
    SaveProgressHandler, SubmitSelectionCommand, SubmitSelectionHandler,
};
use crate::domain::foundation::{GroupId, UserId};

use super::dto::{
    ErrorResponse, MemberResponse, ReopenResponse, RouteQuery, SaveProgressResponse,
    SelectionRequest, SubmitResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct GroupAppState {
    submit_handler: Arc<SubmitSelectionHandler>,
    save_progress_handler: Arc<SaveProgressHandler>,
    reopen_handler: Arc<ReopenSelectionHandler>,
    result_handler: Arc<GetGroupResultHandler>,
    route_handler: Arc<GetPageRouteHandler>,
}

impl GroupAppState {
    pub fn new(
        submit_handler: Arc<SubmitSelectionHandler>,
        save_progress_handler: Arc<SaveProgressHandler>,
        reopen_handler: Arc<ReopenSelectionHandler>,
        result_handler: Arc<GetGroupResultHandler>,
        route_handler: Arc<GetPageRouteHandler>,
    ) -> Self {
        Self {
            submit_handler,
            save_progress_handler,
            reopen_handler,
            result_handler,
            route_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/groups/:code/result - Waiting summary or full comparison result
pub async fn get_result(
    State(state): State<GroupAppState>,
    Viewer(identity): Viewer,
    Path(code): Path<String>,
) -> Response {
    let group_id = match parse_group(&code) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state
        .result_handler
        .handle(GetGroupResultQuery { group_id }, &identity)
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_group_error(e),
    }
}

/// PUT /api/groups/:code/members/:user_id/selection - Submit a complete selection
pub async fn submit_selection(
    State(state): State<GroupAppState>,
    Path((code, user_id)): Path<(String, String)>,
    Json(req): Json<SelectionRequest>,
) -> Response {
    let (group_id, user_id) = match parse_member(&code, &user_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = SubmitSelectionCommand {
        group_id,
        user_id,
        draft: req.into(),
    };

    match state.submit_handler.handle(cmd).await {
        Ok(result) => {
            let response = SubmitResponse {
                event_id: result.event.event_id.to_string(),
                member: result.member.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_group_error(e),
    }
}

/// PUT /api/groups/:code/members/:user_id/draft - Save a partial selection
pub async fn save_progress(
    State(state): State<GroupAppState>,
    Path((code, user_id)): Path<(String, String)>,
    Json(req): Json<SelectionRequest>,
) -> Response {
    let (group_id, user_id) = match parse_member(&code, &user_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let cmd = SaveProgressCommand {
        group_id,
        user_id,
        draft: req.into(),
    };

    match state.save_progress_handler.handle(cmd).await {
        Ok(result) => {
            let response = SaveProgressResponse {
                member: result.member.into(),
                missing: result.missing,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_group_error(e),
    }
}

/// POST /api/groups/:code/members/:user_id/reopen - Go back to editing
pub async fn reopen_selection(
    State(state): State<GroupAppState>,
    Path((code, user_id)): Path<(String, String)>,
) -> Response {
    let (group_id, user_id) = match parse_member(&code, &user_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    match state
        .reopen_handler
        .handle(ReopenSelectionCommand { group_id, user_id })
        .await
    {
        Ok(result) => {
            let response = ReopenResponse {
                reopened: result.event.is_some(),
                member: MemberResponse::from(result.member),
                draft: result.draft,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_group_error(e),
    }
}

/// GET /api/groups/:code/members/:user_id/route - Page the member should be on
pub async fn get_route(
    State(state): State<GroupAppState>,
    Path((code, user_id)): Path<(String, String)>,
    Query(query): Query<RouteQuery>,
) -> Response {
    let (group_id, user_id) = match parse_member(&code, &user_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };

    let query = GetPageRouteQuery {
        group_id,
        user_id,
        current: query.current,
    };

    match state.route_handler.handle(query).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => handle_group_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

#[allow(clippy::result_large_err)]
fn parse_group(code: &str) -> Result<GroupId, Response> {
    code.parse::<GroupId>().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!("Invalid group code: {}", e))),
        )
            .into_response()
    })
}

#[allow(clippy::result_large_err)]
fn parse_member(code: &str, user_id: &str) -> Result<(GroupId, UserId), Response> {
    let group_id = parse_group(code)?;
    let user_id = user_id.parse::<UserId>().map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!("Invalid user ID: {}", e))),
        )
            .into_response()
    })?;
    Ok((group_id, user_id))
}

fn handle_group_error(error: GroupError) -> Response {
    let code = error.code();
    let message = error.to_string();
    match error {
        GroupError::IncompleteSelection(missing) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::new(code, message).with_details(serde_json::json!({ "missing": missing }))),
        )
            .into_response(),
        GroupError::AlreadyReady(_) => {
            (StatusCode::CONFLICT, Json(ErrorResponse::new(code, message))).into_response()
        }
        GroupError::MemberNotFound(_) => {
            (StatusCode::NOT_FOUND, Json(ErrorResponse::new(code, message))).into_response()
        }
        GroupError::ValidationFailed { .. } => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(code, message))).into_response()
        }
        GroupError::Infrastructure(_) => {
            tracing::error!(error = %message, "group request failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new(code, "Member store unavailable")),
            )
                .into_response()
        }
    }
}

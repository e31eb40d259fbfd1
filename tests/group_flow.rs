//! End-to-end group flow through the in-memory member store.
//!
//! Three members join, submit, and one reopens. The live refresher and the
//! HTTP API must both reflect each step.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use outing_match::adapters::http::{api_router, GroupAppState};
use outing_match::adapters::{InMemoryMemberStore, StaticIdentity};
use outing_match::application::{
    GetGroupResultHandler, GetPageRouteHandler, GroupResultView, ReopenSelectionCommand,
    ReopenSelectionHandler, ResultRefresher, SaveProgressHandler, SubmitSelectionCommand,
    SubmitSelectionHandler,
};
use outing_match::domain::analysis::{GroupType, RadarLayout};
use outing_match::domain::foundation::{GroupId, Percentage, UserId};
use outing_match::domain::group::SelectionDraft;
use outing_match::domain::preference::{Axis, ParsedCondition};
use outing_match::ports::MemberStore;

fn group() -> GroupId {
    "weekend-trip".parse().unwrap()
}

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

fn draft(style: &str, budget: u64) -> SelectionDraft {
    SelectionDraft {
        area: Some("箱根".to_string()),
        purpose: Some("温泉".to_string()),
        condition: ParsedCondition::new(style, "近場", "静か", "半日", budget),
    }
}

fn submit(id: &str, style: &str, budget: u64) -> SubmitSelectionCommand {
    SubmitSelectionCommand {
        group_id: group(),
        user_id: user(id),
        draft: draft(style, budget),
    }
}

#[tokio::test]
async fn live_result_follows_the_group() {
    let store = Arc::new(InMemoryMemberStore::new());
    let dyn_store: Arc<dyn MemberStore> = store.clone();
    let submit_handler = SubmitSelectionHandler::new(dyn_store.clone());
    let reopen_handler = ReopenSelectionHandler::new(dyn_store.clone());

    submit_handler.handle(submit("aki", "のんびり", 30_000)).await.unwrap();

    let live = ResultRefresher::start(
        dyn_store.clone(),
        Arc::new(StaticIdentity::new(user("aki"))),
        RadarLayout::default(),
        group(),
    )
    .await
    .unwrap();
    // A lone ready member already satisfies the gate
    assert!(live.latest().is_ready());

    submit_handler.handle(submit("ben", "のんびり", 30_000)).await.unwrap();
    submit_handler.handle(submit("chie", "アクティブ", 90_000)).await.unwrap();

    let GroupResultView::Ready(result) = live.latest() else {
        panic!("expected a result once everyone is ready");
    };
    let verdict = &result.verdict;
    assert_eq!(verdict.member_count, 3);
    assert_eq!(verdict.axis(Axis::SpendingStyle).mismatch, Percentage::new(33));
    assert_eq!(verdict.axis(Axis::Budget).mismatch, Percentage::new(33));
    assert_eq!(verdict.axis(Axis::Distance).mismatch, Percentage::ZERO);
    // (33 + 0 + 0 + 33 + 0) / 5 = 13.2
    assert_eq!(verdict.aggregate_mismatch, Percentage::new(13));
    assert_eq!(verdict.confidence, Percentage::new(87));
    assert_eq!(verdict.group_type, GroupType::InSync);
    assert_eq!(verdict.max_mismatch_axis, Axis::SpendingStyle);
    assert_eq!(verdict.area_consensus(), Some("箱根"));
    assert_eq!(result.chart.members[0].user_id, Some(user("aki")));

    reopen_handler
        .handle(ReopenSelectionCommand {
            group_id: group(),
            user_id: user("ben"),
        })
        .await
        .unwrap();

    match live.latest() {
        GroupResultView::Waiting { ready_count, pending, .. } => {
            assert_eq!(ready_count, 2);
            assert_eq!(pending, vec![user("ben")]);
        }
        other => panic!("expected waiting after reopen, got {:?}", other),
    }

    live.stop().await.unwrap();
    assert_eq!(store.subscriber_count(&group()).await, 0);
}

#[tokio::test]
async fn http_api_serves_the_same_flow() {
    let store: Arc<dyn MemberStore> = Arc::new(InMemoryMemberStore::new());
    let state = GroupAppState::new(
        Arc::new(SubmitSelectionHandler::new(store.clone())),
        Arc::new(SaveProgressHandler::new(store.clone())),
        Arc::new(ReopenSelectionHandler::new(store.clone())),
        Arc::new(GetGroupResultHandler::new(store.clone(), RadarLayout::default())),
        Arc::new(GetPageRouteHandler::new(store)),
    );
    let app = api_router(state);

    let save = Request::builder()
        .method("PUT")
        .uri("/api/groups/weekend-trip/members/aki/draft")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"area":"箱根","purpose":"温泉"}"#))
        .unwrap();
    let response = app.clone().oneshot(save).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let result = Request::builder()
        .uri("/api/groups/weekend-trip/result")
        .header("x-user-id", "aki")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(result).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "waiting");
    assert_eq!(body["ready_count"], 0);
    assert_eq!(body["member_count"], 1);

    let health = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(health).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

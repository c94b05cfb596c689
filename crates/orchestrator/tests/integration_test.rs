//! End-to-end tests: orchestrator + HTTP client against an in-process
//! recommendation service.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use orchestrator::{RecommendationOrchestrator, ResultView};
use rec_client::ServiceConfig;
use request::{InputState, Mode};

#[derive(Clone, Default)]
struct ServiceLog {
    paths: Arc<Mutex<Vec<String>>>,
}

async fn by_tags(State(log): State<ServiceLog>, Json(body): Json<Value>) -> Json<Value> {
    log.paths.lock().unwrap().push("/recommend_by_tags".to_string());
    if body["tags"] == json!("") {
        return Json(json!({ "error": "No tags given" }));
    }
    Json(json!([
        {
            "business_id": "t-1",
            "name": "Bangkok Garden",
            "full_address": "22 Scottsdale Rd, Scottsdale, AZ",
            "categories": "thai",
            "avg_rating": 4.333,
            "review_count": 140
        },
        {
            "business_id": "t-2",
            "name": "Siam Kitchen",
            "full_address": "9 Main St, Mesa, AZ",
            "categories": "thai, noodles",
            "avg_rating": 3.9,
            "review_count": 58
        }
    ]))
}

async fn by_user(State(log): State<ServiceLog>, Json(_body): Json<Value>) -> Json<Value> {
    log.paths.lock().unwrap().push("/recommend".to_string());
    Json(json!([
        {
            "business_id": "u-1",
            "name": "Green Fork",
            "full_address": "5 Roosevelt St, Phoenix, AZ",
            "categories": "vegan",
            "avg_rating": 4.7,
            "review_count": 12
        }
    ]))
}

async fn user_features(
    State(log): State<ServiceLog>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    log.paths.lock().unwrap().push("/user_features".to_string());
    let user = query.get("user_index").cloned().unwrap_or_default();
    if user == "7" {
        // Known user, but the feature list is missing from the record
        return Json(json!({ "user_name": "Kim" }));
    }
    Json(json!({
        "user_name": format!("User {}", user),
        "user_features": [user, "reserved", "vegan", "salad"]
    }))
}

async fn spawn_service() -> (String, ServiceLog) {
    unsafe { std::env::set_var("NO_PROXY", "127.0.0.1,localhost") };
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let log = ServiceLog::default();
    let app = Router::new()
        .route("/recommend_by_tags", post(by_tags))
        .route("/recommend", post(by_user))
        .route("/user_features", get(user_features))
        .with_state(log.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{}", addr), log)
}

#[tokio::test]
async fn test_tag_then_user_session() {
    let (base, log) = spawn_service().await;
    let orchestrator =
        RecommendationOrchestrator::from_config(ServiceConfig::new(&base).unwrap()).unwrap();

    let mut input = InputState::new();
    input.set_tags_text("thai , noodles");
    input.set_city_name("Scottsdale");
    orchestrator.submit(&input).await;

    let state = orchestrator.snapshot();
    match state.view() {
        ResultView::Results(results) => {
            assert_eq!(results.len(), 2);
            assert_eq!(results[0].display_rating(), 4.33);
        }
        other => panic!("expected results, got {:?}", other),
    }
    assert!(state.user_profile.is_none());

    input.select_mode(Mode::UserBased);
    input.set_user_id("42");
    orchestrator.submit(&input).await;

    let state = orchestrator.snapshot();
    assert!(!state.error);
    assert_eq!(state.results[0].business_id, "u-1");
    let profile = state.user_profile.expect("profile after user submission");
    assert_eq!(profile.user_name, "User 42");
    assert_eq!(profile.features, vec!["vegan".to_string(), "salad".to_string()]);

    assert_eq!(
        *log.paths.lock().unwrap(),
        vec!["/recommend_by_tags", "/recommend", "/user_features"]
    );
}

#[tokio::test]
async fn test_service_error_marker_surfaces_as_failed_view() {
    let (base, _log) = spawn_service().await;
    let orchestrator =
        RecommendationOrchestrator::from_config(ServiceConfig::new(&base).unwrap()).unwrap();

    orchestrator.submit(&InputState::new()).await;

    let state = orchestrator.snapshot();
    assert!(!state.loading);
    assert!(state.error);
    assert_eq!(state.view(), ResultView::Failed);
}

#[tokio::test]
async fn test_unreachable_service_surfaces_as_failed_view() {
    unsafe { std::env::set_var("NO_PROXY", "127.0.0.1,localhost") };
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ServiceConfig::new(&format!("http://{}", addr)).unwrap();
    let orchestrator = RecommendationOrchestrator::from_config(config).unwrap();

    let mut input = InputState::new();
    input.select_mode(Mode::UserBased);
    input.set_user_id("1");
    orchestrator.submit(&input).await;

    let state = orchestrator.snapshot();
    assert!(!state.loading);
    assert!(state.error);
    assert!(state.results.is_empty());
    assert!(state.user_profile.is_none());
}

#[tokio::test]
async fn test_feature_lookup_without_list_fails_submission() {
    let (base, log) = spawn_service().await;
    let orchestrator =
        RecommendationOrchestrator::from_config(ServiceConfig::new(&base).unwrap()).unwrap();

    let mut input = InputState::new();
    input.select_mode(Mode::UserBased);
    input.set_user_id("7");
    orchestrator.submit(&input).await;

    let state = orchestrator.snapshot();
    assert!(!state.loading);
    assert!(state.error);
    assert!(state.results.is_empty());
    assert!(state.user_profile.is_none());
    assert_eq!(state.view(), ResultView::Failed);
    assert_eq!(
        *log.paths.lock().unwrap(),
        vec!["/recommend", "/user_features"]
    );
}

#[tokio::test]
async fn test_subscriber_observes_loading_then_settled() {
    let (base, _log) = spawn_service().await;
    let orchestrator =
        RecommendationOrchestrator::from_config(ServiceConfig::new(&base).unwrap()).unwrap();
    let mut rx = orchestrator.subscribe();

    let mut input = InputState::new();
    input.set_tags_text("thai");

    let watcher = async {
        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            seen.push(state.loading);
            if !state.loading {
                break;
            }
        }
        seen
    };

    let (_, seen) = tokio::join!(orchestrator.submit(&input), watcher);
    assert_eq!(seen.last(), Some(&false));
    assert!(seen.len() <= 2);
}

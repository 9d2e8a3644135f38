use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

mod common;
use common::{create_test_app, event, list_add};

async fn post_consolidate(payload: Value) -> (StatusCode, Value) {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/feed/consolidate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, value)
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], "ok");
}

#[tokio::test]
async fn test_consolidate_list_additions() {
    let (status, body) = post_consolidate(json!({
        "events": [
            list_add("p1", "u1", "Want To", "Dune", "2026-03-10T10:00:00Z"),
            list_add("p2", "u1", "Want To", "Arrival", "2026-03-10T10:05:00Z"),
            list_add("p3", "u1", "Want To", "Sicario", "2026-03-10T10:10:00Z"),
            list_add("p4", "u1", "Want To", "Heat", "2026-03-10T10:15:00Z"),
        ],
        "engagement": {
            "p4": { "likes": 3, "comments": 1, "likedByCurrentUser": true }
        }
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let groups = body["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);

    let card = &groups[0];
    assert_eq!(card["header"], "added to → Want To");
    assert_eq!(card["icon"], "plus");
    assert_eq!(card["totalItems"], 4);
    assert_eq!(card["totalLists"], 1);
    assert_eq!(card["remainingCount"], 1);
    assert_eq!(card["inlineItems"].as_array().unwrap().len(), 3);
    assert_eq!(card["inlineItems"][0]["title"], "Heat");
    assert_eq!(card["likes"], 3);
    assert_eq!(card["comments"], 1);
    assert_eq!(card["likedByCurrentUser"], true);
    assert_eq!(card["originalPostIds"][0], "p4");
    assert!(card["dateLabel"].is_string());
}

#[tokio::test]
async fn test_consolidate_skips_malformed_events() {
    let (status, body) = post_consolidate(json!({
        "events": [
            event("p1", "u1", "finished", "Dune", "2026-03-10T10:00:00Z"),
            event("p2", "u1", "finished", "Heat", "not-a-timestamp"),
            { "id": "p3", "actionType": "finished" },
        ]
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    let groups = body["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["totalItems"], 1);
    assert_eq!(groups[0]["header"], "finished");
}

#[tokio::test]
async fn test_consolidate_respects_window_override() {
    let events = json!([
        event("p1", "u1", "finished", "Dune", "2026-03-10T10:00:00Z"),
        event("p2", "u1", "finished", "Heat", "2026-03-10T12:00:00Z"),
    ]);

    let (_, merged) = post_consolidate(json!({ "events": events })).await;
    assert_eq!(merged["groups"].as_array().unwrap().len(), 1);

    let (_, split) = post_consolidate(json!({ "events": events, "windowSeconds": 3600 })).await;
    assert_eq!(split["groups"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_consolidate_rejects_zero_window() {
    let (status, body) = post_consolidate(json!({ "events": [], "windowSeconds": 0 })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_consolidate_empty_feed() {
    let (status, body) = post_consolidate(json!({ "events": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["groups"], json!([]));
}

#[tokio::test]
async fn test_consolidate_rejects_invalid_json() {
    let response = create_test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/feed/consolidate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"events\": 42}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

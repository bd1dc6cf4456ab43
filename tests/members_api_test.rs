mod common;

use axum::http::StatusCode;
use common::{delete, get, post, put, test_app};
use pretty_assertions::assert_eq;
use serde_json::json;

fn member_body() -> serde_json::Value {
    json!({
        "name": "Avery Stone",
        "age": 29,
        "email": "avery@example.com",
        "phone": "555-0101"
    })
}

#[tokio::test]
async fn test_add_member_then_get_lists_it() {
    let app = test_app().await;

    let (status, body) = post(&app, "/members", member_body()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "New member added successfully");

    let (status, body) = get(&app, "/members").await;
    assert_eq!(status, StatusCode::OK);

    let members = body.as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["name"], "Avery Stone");
    assert_eq!(members[0]["age"], 29);
    assert_eq!(members[0]["email"], "avery@example.com");
    assert_eq!(members[0]["phone"], "555-0101");
    assert!(members[0]["id"].as_i64().unwrap() >= 1);
}

#[tokio::test]
async fn test_add_member_without_optional_fields() {
    let app = test_app().await;

    let (status, _) = post(&app, "/members", json!({ "name": "Kim", "age": 40 })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, "/members").await;
    assert_eq!(body[0]["email"], serde_json::Value::Null);
    assert_eq!(body[0]["phone"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_add_member_rejects_underage() {
    let app = test_app().await;

    let (status, body) = post(&app, "/members", json!({ "name": "Robin", "age": 12 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["age"][0].as_str().unwrap().contains("13"));
}

#[tokio::test]
async fn test_add_member_requires_name() {
    let app = test_app().await;

    let (status, body) = post(&app, "/members", json!({ "age": 30 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["name"][0].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn test_add_member_rejects_wrong_typed_age() {
    let app = test_app().await;

    // A wrong-typed field must come back as a per-field message, not a
    // body-level deserialization failure
    let (status, body) = post(&app, "/members", json!({ "name": "Pat", "age": "thirty" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["age"][0].as_str().unwrap().contains("integer"));
}

#[tokio::test]
async fn test_add_member_rejects_wrong_typed_phone() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/members",
        json!({ "name": "Pat", "age": 30, "phone": 5550101 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["phone"][0].as_str().unwrap().contains("string"));
}

#[tokio::test]
async fn test_add_member_ignores_unknown_fields() {
    let app = test_app().await;

    let (status, _) = post(
        &app,
        "/members",
        json!({ "name": "Noor", "age": 22, "membership_tier": "gold" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, "/members").await;
    assert!(body[0].get("membership_tier").is_none());
}

#[tokio::test]
async fn test_update_member_replaces_all_fields() {
    let app = test_app().await;
    post(&app, "/members", member_body()).await;

    // No email or phone in the PUT body: full replacement writes them as null
    let (status, body) = put(&app, "/members/1", json!({ "name": "Avery Park", "age": 30 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Member details updated successfully");

    let (_, body) = get(&app, "/members").await;
    assert_eq!(body[0]["name"], "Avery Park");
    assert_eq!(body[0]["age"], 30);
    assert_eq!(body[0]["email"], serde_json::Value::Null);
    assert_eq!(body[0]["phone"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_update_member_validates_body() {
    let app = test_app().await;
    post(&app, "/members", member_body()).await;

    let (status, body) = put(&app, "/members/1", json!({ "name": "Avery", "age": 10 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["age"][0].as_str().unwrap().contains("13"));
}

#[tokio::test]
async fn test_update_member_unknown_id_is_not_found() {
    let app = test_app().await;

    let (status, body) = put(&app, "/members/42", json!({ "name": "Ghost", "age": 50 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("42"));
}

#[tokio::test]
async fn test_delete_member_removes_record() {
    let app = test_app().await;
    post(&app, "/members", member_body()).await;

    let (status, body) = delete(&app, "/members/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Member removed successfully");

    let (_, body) = get(&app, "/members").await;
    assert_eq!(body.as_array().unwrap().len(), 0);

    let (status, _) = delete(&app, "/members/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_member_orphans_its_sessions() {
    let app = test_app().await;
    post(&app, "/members", member_body()).await;
    post(
        &app,
        "/workout-sessions",
        json!({ "member_id": 1, "session_date": "2026-05-02" }),
    )
    .await;

    let (status, _) = delete(&app, "/members/1").await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/workout-sessions").await;
    let sessions = body.as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["member_id"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_duplicate_email_is_a_datastore_error() {
    let app = test_app().await;

    let (status, _) = post(&app, "/members", member_body()).await;
    assert_eq!(status, StatusCode::CREATED);

    // Uniqueness is enforced by the store, not pre-validated
    let (status, body) = post(
        &app,
        "/members",
        json!({ "name": "Other", "age": 35, "email": "avery@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "fitness-center-api");
}

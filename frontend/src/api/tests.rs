use super::*;
use crate::{
    state::session::SESSION_STORAGE_KEY,
    utils::storage::{KeyValueStore, MemoryStorage},
};
use httpmock::prelude::*;
use serde_json::json;
use std::rc::Rc;

fn habit_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "name": name,
        "type": "daily",
        "createdAt": "2025-01-02T10:00:00.000Z",
        "completions": []
    })
}

fn session_json(token: &str) -> serde_json::Value {
    json!({
        "_id": "u1",
        "name": "Ana",
        "email": "ana@example.com",
        "token": token
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

fn signed_in_client(server: &MockServer, token: &str) -> ApiClient {
    let storage = MemoryStorage::with_entry(SESSION_STORAGE_KEY, &session_json(token).to_string());
    api_client(server).with_storage(Rc::new(storage))
}

#[tokio::test]
async fn auth_endpoints_return_sessions() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/users/register").json_body(json!({
                "name": "Ana",
                "email": "ana@example.com",
                "password": "secret1"
            }));
            then.status(201).json_body(session_json("a.b.c"));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/users/login");
            then.status(200).json_body(session_json("d.e.f"));
        })
        .await;

    let client = api_client(&server);
    let registered = client
        .register(&RegisterRequest {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();
    assert_eq!(registered.id, "u1");
    assert_eq!(registered.token, "a.b.c");

    let logged_in = client
        .login(&LoginRequest {
            email: "ana@example.com".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();
    assert_eq!(logged_in.token, "d.e.f");
}

#[tokio::test]
async fn requests_carry_bearer_token_from_stored_session() {
    let server = MockServer::start_async().await;
    let authorized = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/habits")
                .header("authorization", "Bearer tok.en.x");
            then.status(200)
                .json_body(json!([habit_json("h1", "Read"), habit_json("h2", "Run")]));
        })
        .await;

    let habits = signed_in_client(&server, "tok.en.x").get_habits().await.unwrap();
    assert_eq!(habits.len(), 2);
    assert_eq!(habits[1].id, "h2");
    authorized.assert_async().await;
}

#[tokio::test]
async fn requests_without_session_omit_authorization() {
    let server = MockServer::start_async().await;
    let with_header = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/habits").header_exists("authorization");
            then.status(500);
        })
        .await;
    let anonymous = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/habits");
            then.status(200).json_body(json!([]));
        })
        .await;

    let habits = api_client(&server).get_habits().await.unwrap();
    assert!(habits.is_empty());
    assert_eq!(with_header.hits_async().await, 0);
    assert_eq!(anonymous.hits_async().await, 1);
}

#[tokio::test]
async fn token_is_read_at_send_time() {
    let server = MockServer::start_async().await;
    let fresh = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/habits")
                .header("authorization", "Bearer second");
            then.status(200).json_body(json!([]));
        })
        .await;

    let storage = MemoryStorage::with_entry(SESSION_STORAGE_KEY, &session_json("first").to_string());
    let client = api_client(&server).with_storage(Rc::new(storage.clone()));
    storage
        .set(SESSION_STORAGE_KEY, &session_json("second").to_string())
        .unwrap();

    client.get_habits().await.unwrap();
    fresh.assert_async().await;
}

#[tokio::test]
async fn habit_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/habits")
                .json_body(json!({ "name": "Run", "type": "weekly", "frequency": 3 }));
            then.status(201).json_body(json!({
                "_id": "h9",
                "name": "Run",
                "type": "weekly",
                "frequency": 3,
                "createdAt": "2025-01-05T10:00:00Z",
                "completions": []
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/habits/h1/track");
            then.status(200).json_body(json!({
                "_id": "h1",
                "name": "Read",
                "type": "daily",
                "createdAt": "2025-01-02T10:00:00Z",
                "completions": [{ "date": "2025-01-06T07:00:00Z" }]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/habits/h1");
            then.status(200).json_body(habit_json("h1", "Read"));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/habits/h1/stats");
            then.status(200).json_body(json!({
                "currentStreak": 2,
                "longestStreak": 5,
                "completionPercentage": 66.7,
                "totalCompletions": 8
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/habits/migrate-completions");
            then.status(200).json_body(json!({ "migratedCompletions": 14 }));
        })
        .await;

    let client = signed_in_client(&server, "a.b.c");
    let created = client
        .create_habit(&CreateHabitRequest {
            name: "Run".into(),
            habit_type: HabitType::Weekly,
            goal: None,
            frequency: Some(3),
        })
        .await
        .unwrap();
    assert_eq!(created.id, "h9");
    assert_eq!(created.weekly_frequency(), Some(3));

    let tracked = client.track_habit("h1").await.unwrap();
    assert_eq!(tracked.completions.len(), 1);

    assert_eq!(client.get_habit("h1").await.unwrap().name, "Read");
    assert_eq!(client.get_habit_stats("h1").await.unwrap().longest_streak, 5);
    assert_eq!(
        client.migrate_completions().await.unwrap().migrated_completions,
        14
    );
}

#[tokio::test]
async fn chart_data_sends_period_query() {
    let server = MockServer::start_async().await;
    let week = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/habits/chart-data")
                .query_param("period", "7d");
            then.status(200).json_body(json!([
                { "date": "Mon", "completions": 2 },
                { "date": "Tue", "completions": 0 }
            ]));
        })
        .await;

    let points = api_client(&server)
        .get_chart_data(ChartPeriod::Week)
        .await
        .unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].completions, 2);
    week.assert_async().await;
}

#[tokio::test]
async fn delete_accepts_empty_success_body() {
    let server = MockServer::start_async().await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/habits/h1");
            then.status(204);
        })
        .await;

    api_client(&server).delete_habit("h1").await.unwrap();
    delete.assert_async().await;
}

#[tokio::test]
async fn failures_surface_body_message_or_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/habits");
            then.status(400)
                .json_body(json!({ "message": "Please provide a habit name" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/habits/h1");
            then.status(500).body("Internal Server Error");
        })
        .await;

    let client = api_client(&server);
    let err = client
        .create_habit(&CreateHabitRequest {
            name: String::new(),
            habit_type: HabitType::Daily,
            goal: None,
            frequency: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Please provide a habit name");
    assert_eq!(err.code, "HTTP_400");

    let err = client.delete_habit("h1").await.unwrap_err();
    assert_eq!(err.error, "Request failed with status code 500");
}

#[tokio::test]
async fn unreachable_server_is_a_request_failure() {
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
    let err = client.get_habits().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
    assert!(!err.error.is_empty());
}

#[tokio::test]
async fn malformed_success_body_is_a_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/habits/h1/stats");
            then.status(200).body("not json");
        })
        .await;

    let err = api_client(&server).get_habit_stats("h1").await.unwrap_err();
    assert_eq!(err.code, "PARSE_ERROR");
}

//! GraphQL Client Tests
//!
//! Exercises the wire format and error mapping against a mock HTTP server.

use std::time::{Duration, Instant};

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use task_board_core::{
    BoardConfig, GraphQlClient, NewTask, TaskApi, TaskError, TaskId, TaskPatch, TaskStatus,
};

fn client(server: &ServerGuard, list_retries: u32) -> GraphQlClient {
    client_with_backoff(server, list_retries, 1)
}

fn client_with_backoff(server: &ServerGuard, list_retries: u32, backoff_ms: u64) -> GraphQlClient {
    let config = BoardConfig {
        endpoint: format!("{}/graphql", server.url()),
        list_retries,
        list_retry_backoff_ms: backoff_ms,
        ..Default::default()
    };
    GraphQlClient::new(&config).expect("client builds")
}

#[tokio::test]
async fn test_list_tasks() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(json!({ "operationName": "GetTasks" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({ "data": { "getTasks": [
                { "_id": "1", "title": "A", "description": "d1", "status": "Pending" },
                { "_id": "2", "title": "B", "description": "d2", "status": "Completed" }
            ] } })
            .to_string(),
        )
        .create_async()
        .await;

    let tasks = client(&server, 0).list_tasks().await.unwrap();
    mock.assert_async().await;
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[1].status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_create_sends_all_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(json!({
            "operationName": "CreateTask",
            "variables": { "title": "Buy milk", "description": "2%", "status": "Pending" }
        })))
        .with_status(200)
        .with_body(
            json!({ "data": { "createTask": {
                "_id": "abc", "title": "Buy milk", "description": "2%", "status": "Pending"
            } } })
            .to_string(),
        )
        .create_async()
        .await;

    let task = client(&server, 0)
        .create_task(&NewTask::new("Buy milk", "2%", TaskStatus::Pending))
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(task.id, TaskId::new("abc"));
}

#[tokio::test]
async fn test_update_sends_only_supplied_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql")
        .match_body(Matcher::PartialJson(json!({
            "operationName": "UpdateTask",
            "variables": { "id": "abc", "status": "Completed" }
        })))
        .with_status(200)
        .with_body(
            json!({ "data": { "updateTask": {
                "_id": "abc", "title": "Buy milk", "description": "2%", "status": "Completed"
            } } })
            .to_string(),
        )
        .create_async()
        .await;

    let task = client(&server, 0)
        .update_task(&TaskId::new("abc"), &TaskPatch::status(TaskStatus::Completed))
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(task.title, "Buy milk");
    assert_eq!(task.status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_delete_returns_id() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_body(json!({ "data": { "deleteTask": { "_id": "abc" } } }).to_string())
        .create_async()
        .await;

    let id = client(&server, 0).delete_task(&TaskId::new("abc")).await.unwrap();
    assert_eq!(id, TaskId::new("abc"));
}

#[tokio::test]
async fn test_validation_error_on_400_envelope() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/graphql")
        .with_status(400)
        .with_body(
            json!({ "errors": [{
                "message": "Variable \"$title\" of required type \"String!\" was not provided.",
                "extensions": { "code": "BAD_USER_INPUT" }
            }] })
            .to_string(),
        )
        .create_async()
        .await;

    let err = client(&server, 0)
        .create_task(&NewTask::new("", "", TaskStatus::Pending))
        .await
        .unwrap_err();
    assert!(matches!(err, TaskError::Validation(_)));
}

#[tokio::test]
async fn test_null_delete_is_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_body(json!({ "data": { "deleteTask": null } }).to_string())
        .create_async()
        .await;

    let err = client(&server, 0).delete_task(&TaskId::new("gone")).await.unwrap_err();
    assert!(matches!(err, TaskError::NotFound(_)));
}

#[tokio::test]
async fn test_list_retries_on_server_unavailable() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql")
        .with_status(503)
        .with_body("upstream unavailable")
        .expect(3)
        .create_async()
        .await;

    let err = client(&server, 2).list_tasks().await.unwrap_err();
    mock.assert_async().await;
    assert!(matches!(err, TaskError::Network(_)));
}

#[tokio::test]
async fn test_list_retries_back_off() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql")
        .with_status(503)
        .expect(3)
        .create_async()
        .await;

    // 40ms before the first retry, 80ms before the second
    let started = Instant::now();
    let err = client_with_backoff(&server, 2, 40).list_tasks().await.unwrap_err();
    mock.assert_async().await;
    assert!(err.is_retryable());
    assert!(started.elapsed() >= Duration::from_millis(120));
}

#[tokio::test]
async fn test_mutations_are_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/graphql")
        .with_status(502)
        .expect(1)
        .create_async()
        .await;

    let err = client(&server, 2)
        .create_task(&NewTask::new("A", "d", TaskStatus::Pending))
        .await
        .unwrap_err();
    mock.assert_async().await;
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_garbage_body_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/graphql")
        .with_status(200)
        .with_body("<html>not graphql</html>")
        .create_async()
        .await;

    let err = client(&server, 2).list_tasks().await.unwrap_err();
    assert!(matches!(err, TaskError::Decode(_)));
}

use super::test_utilities::{MockQueueServer, no_stdin};
use axum::http::{Method, StatusCode};
use restq::EMPTY_QUEUE_MARKER;
use restq_cli::{DispatchOptions, dispatch};

fn get_options(quiet: bool) -> DispatchOptions {
    DispatchOptions {
        queue: Some("a-long-queue-name-123".to_string()),
        get: true,
        quiet,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_get_item() {
    let server = MockQueueServer::start().await.expect("start mock server");
    server.respond_with(Method::GET, StatusCode::OK, r#"{"Queue": "1"}"#);

    let outcome = dispatch(&server.client(), &get_options(false), no_stdin).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.status, 200);
    assert_eq!(outcome.output, r#"{"Queue": "1"}"#);
}

#[tokio::test]
async fn test_get_empty_queue() {
    let server = MockQueueServer::start().await.expect("start mock server");
    server.respond_with(Method::GET, StatusCode::NO_CONTENT, "");

    let outcome = dispatch(&server.client(), &get_options(false), no_stdin).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.status, 204);
    assert_eq!(outcome.output, EMPTY_QUEUE_MARKER);
}

#[tokio::test]
async fn test_quiet_leaves_empty_queue_output_unchanged() {
    let server = MockQueueServer::start().await.expect("start mock server");
    server.respond_with(Method::GET, StatusCode::NO_CONTENT, "");

    let outcome = dispatch(&server.client(), &get_options(true), no_stdin).await;

    assert_eq!(outcome.status, 204);
    assert_eq!(outcome.output, EMPTY_QUEUE_MARKER);
}

#[tokio::test]
async fn test_get_server_error() {
    let server = MockQueueServer::start().await.expect("start mock server");
    server.respond_with(Method::GET, StatusCode::INTERNAL_SERVER_ERROR, "");

    let outcome = dispatch(&server.client(), &get_options(false), no_stdin).await;

    assert!(outcome.error.is_some());
    assert!(![0, 200, 204].contains(&outcome.status));
    assert_eq!(outcome.status, 1);
    assert_eq!(outcome.output, "");
}

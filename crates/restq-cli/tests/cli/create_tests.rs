use super::test_utilities::{MockQueueServer, client_for, no_stdin, unreachable_base_url};
use axum::http::{Method, StatusCode};
use restq::RestqError;
use restq_cli::{DispatchOptions, dispatch};

fn create_options() -> DispatchOptions {
    DispatchOptions {
        create: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_alone_succeeds() {
    let server = MockQueueServer::start().await.expect("start mock server");
    server.respond_with(Method::POST, StatusCode::OK, r#"{"Queue": "1"}"#);

    let outcome = dispatch(&server.client(), &create_options(), no_stdin).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.output, r#"{"Queue": "1"}"#);
    assert_eq!(outcome.status, 0);
}

#[tokio::test]
async fn test_create_wins_over_put() {
    let server = MockQueueServer::start().await.expect("start mock server");
    let options = DispatchOptions {
        create: true,
        put: true,
        queue: Some("a-long-queue-name-123".to_string()),
        message: Some("message".to_string()),
        ..Default::default()
    };

    let outcome = dispatch(&server.client(), &options, no_stdin).await;

    assert!(outcome.is_success());
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
}

#[tokio::test]
async fn test_create_failure_reports_http_status() {
    let server = MockQueueServer::start().await.expect("start mock server");
    server.respond_with(Method::POST, StatusCode::NOT_FOUND, "");

    let outcome = dispatch(&server.client(), &create_options(), no_stdin).await;

    assert_eq!(outcome.error, Some(RestqError::service("create", 404)));
    assert_eq!(outcome.status, 404);
    assert_eq!(outcome.output, "");
}

#[tokio::test]
async fn test_create_transport_failure_reports_one() {
    let client = client_for(&unreachable_base_url());

    let outcome = dispatch(&client, &create_options(), no_stdin).await;

    assert!(matches!(outcome.error, Some(RestqError::Transport { .. })));
    assert_eq!(outcome.status, 1);
}

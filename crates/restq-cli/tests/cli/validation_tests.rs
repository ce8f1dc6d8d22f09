use super::test_utilities::{MockQueueServer, no_stdin};
use restq::RestqError;
use restq_cli::{DispatchOptions, dispatch};

#[tokio::test]
async fn test_no_flags_is_invalid_input() {
    let server = MockQueueServer::start().await.expect("start mock server");

    let outcome = dispatch(&server.client(), &DispatchOptions::default(), no_stdin).await;

    assert!(matches!(outcome.error, Some(RestqError::InvalidInput { .. })));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_put_without_queue_source_is_invalid_input() {
    let server = MockQueueServer::start().await.expect("start mock server");
    let options = DispatchOptions {
        put: true,
        ..Default::default()
    };

    let outcome = dispatch(&server.client(), &options, no_stdin).await;

    assert!(matches!(outcome.error, Some(RestqError::InvalidInput { .. })));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_get_without_queue_source_is_invalid_input() {
    let server = MockQueueServer::start().await.expect("start mock server");
    let options = DispatchOptions {
        get: true,
        quiet: true,
        ..Default::default()
    };

    let outcome = dispatch(&server.client(), &options, no_stdin).await;

    assert!(matches!(outcome.error, Some(RestqError::InvalidInput { .. })));
    assert_eq!(outcome.status, 0);
}

//! Error surfacing tests.

use httpmock::prelude::*;
use serde_json::json;
use skybet_client::{ClientConfig, Error, QueryParams, RequestBuilder};
use skybet_tests::{create_builder_with_params, create_test_builder};

#[tokio::test]
async fn test_not_found_is_request_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/sportsapi/v2/event/404");
            then.status(404).body("not found");
        })
        .await;

    let api = create_test_builder(&server).expect("Failed to create builder");
    let err = api.event("404", false).get().await.unwrap_err();

    match err {
        Error::Request { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("expected request error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_is_request_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/sportsapi/v2/a-z");
            then.status(500).body("upstream exploded");
        })
        .await;

    let api = create_test_builder(&server).expect("Failed to create builder");
    let err = api.classes().get().await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("upstream exploded"));
}

#[tokio::test]
async fn test_missing_api_user_sends_nothing() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({}));
        })
        .await;

    let api = create_builder_with_params(&server, QueryParams::from([("lang", "en")]))
        .expect("Failed to create builder");
    let err = api.classes().get().await.unwrap_err();

    assert!(matches!(err, Error::MissingParameter(_)));
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_invalid_json_is_json_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/sportsapi/v2/a-z");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let api = create_test_builder(&server).expect("Failed to create builder");
    let err = api.classes().get().await.unwrap_err();

    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let api = RequestBuilder::create(
        ClientConfig::new("http://127.0.0.1:1"),
        QueryParams::from([("api_user", "test")]),
        None,
    )
    .expect("Failed to create builder")
    .with_timeout(1);

    let err = api.classes().get().await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
}

#[test]
fn test_chain_error_does_not_need_runtime() {
    let server = MockServer::start();
    let api = create_test_builder(&server).expect("Failed to create builder");

    let result = api.classes().set_request_url("/sportsapi/v2/football", None);

    assert!(matches!(result, Err(Error::Chain(_))));
}

#[test]
fn test_missing_api_user_blocking() {
    let server = MockServer::start();
    let api = create_builder_with_params(&server, QueryParams::new())
        .expect("Failed to create builder");

    let result = tokio_test::block_on(api.event("1", false).get());

    assert!(matches!(result, Err(Error::MissingParameter(_))));
}

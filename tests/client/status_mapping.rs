use esg_dashboard::{EsgError, MetricsBuilder, ValidationBuilder};
use httpmock::Method::GET;

use crate::common;

#[tokio::test]
async fn not_found_maps_to_not_found() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/company-metrics")
            .query_param("company", "Missing Co");
        then.status(404).body("no such company");
    });
    let client = common::client_for(&server);

    let err = MetricsBuilder::new(&client, "Missing Co")
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    match err {
        EsgError::NotFound { url } => {
            assert!(url.contains("/company-metrics"));
            assert!(url.contains("company=Missing+Co"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/validation-company");
        then.status(500).body("boom");
    });
    let client = common::client_for(&server);

    let err = ValidationBuilder::new(&client).fetch().await.unwrap_err();

    mock.assert();
    match err {
        EsgError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/validation-company"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_json_error() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/validation-company");
        then.status(200).body("<html>gateway</html>");
    });
    let client = common::client_for(&server);

    let err = ValidationBuilder::new(&client).fetch().await.unwrap_err();
    assert!(matches!(err, EsgError::Json(_)), "got {err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn scalar_body_is_a_data_error() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/validation-company");
        then.status(200).body("42");
    });
    let client = common::client_for(&server);

    let err = ValidationBuilder::new(&client).fetch().await.unwrap_err();
    assert!(matches!(err, EsgError::Data(_)), "got {err:?}");
}

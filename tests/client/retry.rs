use std::time::Duration;

use esg_dashboard::core::client::Backoff;
use esg_dashboard::{CompaniesBuilder, EsgClient, EsgError, RetryConfig};
use httpmock::Method::GET;
use url::Url;

use crate::common;

fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        enabled: true,
        max_retries,
        backoff: Backoff::Fixed(Duration::from_millis(5)),
        retry_on_status: vec![503],
        retry_on_timeout: false,
        retry_on_connect: false,
    }
}

#[tokio::test]
async fn retries_are_off_by_default() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/companies");
        then.status(503);
    });
    let client = common::client_for(&server);

    let err = CompaniesBuilder::new(&client).fetch().await.unwrap_err();

    mock.assert_calls(1);
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn retryable_status_is_retried_up_to_the_limit() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/companies");
        then.status(503);
    });
    let client = EsgClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .retry_config(fast_retry(2))
        .build()
        .unwrap();

    let err = CompaniesBuilder::new(&client).fetch().await.unwrap_err();

    mock.assert_calls(3);
    assert!(matches!(err, EsgError::Status { status: 503, .. }), "got {err:?}");
}

#[tokio::test]
async fn non_retryable_status_is_returned_immediately() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/companies");
        then.status(500);
    });
    let client = EsgClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .retry_config(fast_retry(3))
        .build()
        .unwrap();

    let err = CompaniesBuilder::new(&client).fetch().await.unwrap_err();

    mock.assert_calls(1);
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn per_call_policy_overrides_the_client() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/companies");
        then.status(503);
    });
    let client = common::client_for(&server);

    let _ = CompaniesBuilder::new(&client)
        .retry_policy(Some(fast_retry(1)))
        .fetch()
        .await
        .unwrap_err();

    mock.assert_calls(2);
}

#[test]
fn standard_policy_retries_transient_statuses() {
    let cfg = RetryConfig::standard();
    assert!(cfg.enabled);
    assert_eq!(cfg.max_retries, 4);
    for code in [429, 500, 502, 503, 504] {
        assert!(cfg.retry_on_status.contains(&code), "{code} should be retried");
    }
    assert!(!RetryConfig::default().enabled);
}

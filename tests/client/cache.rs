use std::time::Duration;

use esg_dashboard::{CacheMode, CompaniesBuilder, EsgClient, ScoresBuilder};
use url::Url;

use crate::common;

#[tokio::test]
async fn cached_client_hits_the_backend_once() {
    let server = common::setup_server();
    let mock = common::mock_collection(&server, "companies");
    let client = common::cached_client_for(&server);
    assert!(client.cache_enabled());

    let first = CompaniesBuilder::new(&client).fetch().await.unwrap();
    let second = CompaniesBuilder::new(&client).fetch().await.unwrap();

    assert_eq!(first, second);
    mock.assert_calls(1);
}

#[tokio::test]
async fn clones_share_the_cache() {
    let server = common::setup_server();
    let mock = common::mock_collection(&server, "companies");
    let client = common::cached_client_for(&server);
    let sibling = client.clone();

    CompaniesBuilder::new(&client).fetch().await.unwrap();
    CompaniesBuilder::new(&sibling).fetch().await.unwrap();

    mock.assert_calls(1);
}

#[tokio::test]
async fn refresh_and_bypass_go_to_the_network() {
    let server = common::setup_server();
    let mock = common::mock_collection(&server, "companies");
    let client = common::cached_client_for(&server);

    CompaniesBuilder::new(&client).fetch().await.unwrap();
    CompaniesBuilder::new(&client)
        .cache_mode(CacheMode::Refresh)
        .fetch()
        .await
        .unwrap();
    CompaniesBuilder::new(&client)
        .cache_mode(CacheMode::Bypass)
        .fetch()
        .await
        .unwrap();
    mock.assert_calls(3);

    // Refresh wrote the entry back, so a normal read is served from memory.
    CompaniesBuilder::new(&client).fetch().await.unwrap();
    mock.assert_calls(3);
}

#[tokio::test]
async fn clear_cache_forces_a_refetch() {
    let server = common::setup_server();
    let mock = common::mock_collection(&server, "companies");
    let client = common::cached_client_for(&server);

    CompaniesBuilder::new(&client).fetch().await.unwrap();
    client.clear_cache().await;
    CompaniesBuilder::new(&client).fetch().await.unwrap();

    mock.assert_calls(2);
}

#[tokio::test]
async fn cache_is_keyed_by_company() {
    let server = common::setup_server();
    let acme = common::mock_company_endpoint(&server, "score-data", common::ACME);
    let other = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/score-data")
            .query_param("company", "Globex");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });
    let client = common::cached_client_for(&server);

    let a = esg_dashboard::ScoresBuilder::new(&client, common::ACME)
        .fetch()
        .await
        .unwrap();
    let g = esg_dashboard::ScoresBuilder::new(&client, "Globex")
        .fetch()
        .await
        .unwrap();

    assert_eq!(a.len(), 2);
    assert!(g.is_empty());
    acme.assert_calls(1);
    other.assert_calls(1);
}

#[tokio::test]
async fn uncached_client_always_fetches() {
    let server = common::setup_server();
    let mock = common::mock_collection(&server, "companies");
    let client = common::client_for(&server);
    assert!(!client.cache_enabled());

    CompaniesBuilder::new(&client).fetch().await.unwrap();
    CompaniesBuilder::new(&client).fetch().await.unwrap();

    mock.assert_calls(2);
}

#[tokio::test]
async fn concurrent_misses_share_one_request() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/companies");
        then.status(200)
            .delay(std::time::Duration::from_millis(100))
            .body(common::fixture("companies", "all", "json"));
    });
    let client = common::cached_client_for(&server);

    let (a, b) = futures::join!(
        CompaniesBuilder::new(&client).fetch(),
        CompaniesBuilder::new(&client).fetch()
    );

    assert_eq!(a.unwrap(), b.unwrap());
    mock.assert_calls(1);
}

#[tokio::test]
async fn expired_entries_are_evicted_on_insert() {
    let server = common::setup_server();
    common::mock_collection(&server, "companies");
    common::mock_company_endpoint(&server, "score-data", common::ACME);
    let client = EsgClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .cache_ttl(Duration::from_millis(50))
        .build()
        .unwrap();

    CompaniesBuilder::new(&client).fetch().await.unwrap();
    assert_eq!(client.cache_len().await, 1);

    tokio::time::sleep(Duration::from_millis(120)).await;
    ScoresBuilder::new(&client, common::ACME).fetch().await.unwrap();

    assert_eq!(client.cache_len().await, 1);
}

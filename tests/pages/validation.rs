use esg_dashboard::pages::{LoadState, ValidationPage};
use httpmock::Method::GET;

use crate::common;

#[tokio::test]
async fn loaded_reports_fill_the_table() {
    let server = common::setup_server();
    common::mock_collection(&server, "validation-company");
    let client = common::client_for(&server);

    let mut page = ValidationPage::new(&client);
    assert!(page.view().rows.is_empty());
    page.load().await;

    let view = page.view();
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.rows[0].company, "Acme Corp");
    assert_eq!(view.rows[1].missing_value, 12);
    assert_eq!(view.chart.rows.len(), 2);
}

#[tokio::test]
async fn failed_load_shows_an_empty_table() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/validation-company");
        then.status(503);
    });
    let client = common::client_for(&server);

    let mut page = ValidationPage::new(&client);
    page.load().await;

    assert!(matches!(page.state(), LoadState::Failed(_)));
    let view = page.view();
    assert!(view.rows.is_empty());
    assert_eq!(view.headers.len(), 5);
}

use chrono::{TimeZone, Utc};
use esg_dashboard::InsightsBuilder;

use crate::common;

#[tokio::test]
async fn blank_items_are_dropped_and_order_is_kept() {
    let server = common::setup_server();
    let mock = common::mock_company_endpoint(&server, "realtime-data", common::ACME);
    let client = common::client_for(&server);

    let items = InsightsBuilder::new(&client, common::ACME)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title.as_deref(), Some("Acme expands solar capacity"));
    assert!(items[0].markdown.starts_with("**Acme**"));
    assert_eq!(
        items[0].published_at,
        Some(Utc.with_ymd_and_hms(2024, 5, 2, 9, 30, 0).unwrap())
    );
    assert_eq!(
        items[1].published_at,
        Some(Utc.with_ymd_and_hms(2024, 4, 15, 8, 0, 0).unwrap())
    );
    assert_eq!(items[1].timestamp_text.as_deref(), Some("2024-04-15T08:00:00Z"));
}

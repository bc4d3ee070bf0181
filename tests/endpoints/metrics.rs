use esg_dashboard::{MetricValue, MetricsBuilder};
use httpmock::Method::GET;

use crate::common;

#[tokio::test]
async fn metric_map_decodes_values_and_units() {
    let server = common::setup_server();
    let mock = common::mock_company_endpoint(&server, "company-metrics", common::ACME);
    let client = common::client_for(&server);

    let metrics = MetricsBuilder::new(&client, common::ACME).fetch().await.unwrap();

    mock.assert();
    assert_eq!(
        metrics.get("ENV_GHG_Total"),
        Some(&MetricValue::new("1,250", "tCO2e"))
    );
    assert_eq!(metrics.value("ENV_GHG_Total"), Some(1250.0));
    assert_eq!(metrics.value("ENV_Energy_Renewable_Pct"), Some(60.0));
    // Numeric JSON values are rendered as text.
    assert_eq!(metrics.get("ENV_Water").map(|m| m.value.as_str()), Some("80"));
    assert_eq!(metrics.value("GOV_Framework_TCFD"), None);
    assert_eq!(metrics.value_or_zero("GOV_Framework_TCFD"), 0.0);
    assert_eq!(metrics.value_or_zero("ENV_Waste"), 0.0);
    assert_eq!(metrics.unit("ENV_Waste"), "");
    assert_eq!(metrics.with_prefix("SOC_").count(), 8);
}

#[tokio::test]
async fn bare_scalars_and_row_envelopes() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET)
            .path("/company-metrics")
            .query_param("company", "Globex");
        then.status(200)
            .body(r#"[[{"ENV_GHG": 40, "SOC_Female_Pct": "51%", "GOV_Notes": null}], []]"#);
    });
    let client = common::client_for(&server);

    let metrics = MetricsBuilder::new(&client, "Globex").fetch().await.unwrap();

    assert_eq!(metrics.len(), 2);
    assert_eq!(metrics.value("ENV_GHG"), Some(40.0));
    assert_eq!(metrics.value("SOC_Female_Pct"), Some(51.0));
    assert!(metrics.get("GOV_Notes").is_none());
}

#[tokio::test]
async fn empty_envelope_is_an_empty_map() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/company-metrics");
        then.status(200).body("[]");
    });
    let client = common::client_for(&server);

    let metrics = MetricsBuilder::new(&client, "Nobody").fetch().await.unwrap();
    assert!(metrics.is_empty());
}

use esg_dashboard::ValidationBuilder;
use serde_json::json;

use crate::common;

#[tokio::test]
async fn reports_decode_embedded_json_and_blank_paths() {
    let server = common::setup_server();
    let mock = common::mock_collection(&server, "validation-company");
    let client = common::client_for(&server);

    let reports = ValidationBuilder::new(&client).fetch().await.unwrap();

    mock.assert();
    assert_eq!(reports.len(), 2);

    let acme = &reports[0];
    assert_eq!(acme.report, "Acme Corp");
    assert_eq!(acme.missing_fields, 3);
    assert!((acme.final_score - 82.5).abs() < 1e-9);
    assert_eq!(acme.completeness_score, Some(0.91));
    assert_eq!(acme.file_path.as_deref(), Some("/reports/acme_2023.pdf"));
    assert_eq!(acme.json, Some(json!({ "ENV_GHG": 75 })));

    let globex = &reports[1];
    assert_eq!(globex.missing_fields, 12);
    assert_eq!(globex.final_score, 61.0);
    assert_eq!(globex.quality_score, None);
    assert_eq!(globex.file_path, None);
    assert_eq!(globex.json, None);
}

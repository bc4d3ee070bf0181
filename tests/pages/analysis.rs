use esg_dashboard::pages::{AnalysisPage, DashboardTab, LoadState, TabView, load_snapshot};
use esg_dashboard::views::ComplementPolicy;
use httpmock::Method::GET;

use crate::common;

#[tokio::test]
async fn company_selector_loads_names() {
    let server = common::setup_server();
    common::mock_collection(&server, "companies");
    let client = common::client_for(&server);

    let mut page = AnalysisPage::new(&client);
    assert!(page.companies().is_empty());
    page.load_companies().await;

    assert_eq!(page.companies(), ["Acme Corp", "Globex", "Initech"]);
}

#[tokio::test]
async fn selecting_a_company_builds_every_tab() {
    let server = common::setup_server();
    common::mock_snapshot(&server, common::ACME);
    let client = common::client_for(&server);

    let mut page = AnalysisPage::new(&client);
    assert!(page.view().is_none());
    assert_eq!(page.tab(), DashboardTab::Overall);

    page.select_company(common::ACME).await;
    assert_eq!(page.selected(), Some("Acme Corp"));
    assert!(page.snapshot().is_some());

    match page.view() {
        Some(TabView::Overall(view)) => {
            assert_eq!(view.headline.unwrap().score, 7.2);
            assert_eq!(view.highlights[0].value, Some(1250.0));
        }
        other => panic!("expected the overall tab, got {other:?}"),
    }

    for tab in DashboardTab::ALL {
        page.select_tab(tab);
        let view = page.view().unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["tab"], tab.label());
    }

    page.select_tab(DashboardTab::Environmental);
    let Some(TabView::Environmental(env)) = page.view() else {
        panic!("expected the environmental tab");
    };
    assert_eq!(env.overview.value("Waste", "score"), Some(0.0));
}

#[tokio::test]
async fn score_failure_leaves_the_page_empty() {
    let server = common::setup_server();
    server.mock(|when, then| {
        when.method(GET).path("/score-data");
        then.status(500);
    });
    common::mock_company_endpoint(&server, "company-metrics", common::ACME);
    common::mock_company_endpoint(&server, "realtime-data", common::ACME);
    common::mock_company_endpoint(&server, "greenwash-data", common::ACME);
    let client = common::client_for(&server);

    let mut page = AnalysisPage::new(&client);
    page.select_company(common::ACME).await;

    assert!(matches!(page.snapshot_state(), LoadState::Failed(msg) if msg.contains("500")));
    assert!(page.view().is_none());
    page.select_tab(DashboardTab::Greenwash);
    assert!(page.view().is_none());
}

#[tokio::test]
async fn views_are_deterministic_across_reloads() {
    let server = common::setup_server();
    common::mock_snapshot(&server, common::ACME);
    let client = common::client_for(&server);

    let mut page = AnalysisPage::new(&client).with_policy(ComplementPolicy::Clamp);
    let mut rendered = Vec::new();
    for _ in 0..2 {
        page.select_company(common::ACME).await;
        for tab in DashboardTab::ALL {
            page.select_tab(tab);
            rendered.push(serde_json::to_string(&page.view().unwrap()).unwrap());
        }
    }

    let (first, second) = rendered.split_at(DashboardTab::ALL.len());
    assert_eq!(first, second);
}

#[tokio::test]
async fn stale_selection_is_dropped() {
    let server = common::setup_server();
    common::mock_snapshot(&server, common::ACME);
    let client = common::client_for(&server);

    let mut page = AnalysisPage::new(&client);
    let stale = page.begin_selection(common::ACME);
    let current = page.begin_selection("Globex");
    assert_eq!(page.selected(), Some("Globex"));

    let acme = load_snapshot(&client, common::ACME).await;
    assert!(!page.apply(stale, acme));
    assert!(matches!(page.snapshot_state(), LoadState::Loading));
    assert!(page.view().is_none());

    let acme_again = load_snapshot(&client, common::ACME).await;
    assert!(page.apply(current, acme_again));
    assert!(page.view().is_some());
}

#[test]
fn tabs_parse_from_labels() {
    assert_eq!("greenwash".parse::<DashboardTab>(), Ok(DashboardTab::Greenwash));
    assert_eq!(" Social ".parse::<DashboardTab>(), Ok(DashboardTab::Social));
    assert!("finance".parse::<DashboardTab>().is_err());
    assert_eq!(DashboardTab::default(), DashboardTab::Overall);
    assert_eq!(DashboardTab::ALL.len(), 6);
}

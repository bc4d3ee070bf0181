//! esg-dashboard: typed client and view models for an ESG scoring dashboard.
//!
//! The crate talks to an ESG backend over HTTP (company list, scores, metric maps,
//! news insights, greenwashing findings, report validation, document evaluation) and
//! folds the results into chart-ready view models for each dashboard page.
//!
//! ```no_run
//! # use esg_dashboard::{EsgClient, pages::{AnalysisPage, DashboardTab}};
//! # #[tokio::main]
//! # async fn main() {
//! let client = EsgClient::default();
//! let mut page = AnalysisPage::new(&client);
//! page.select_company("Acme Corp").await;
//! page.select_tab(DashboardTab::Environmental);
//! if let Some(view) = page.view() {
//!     println!("{}", serde_json::to_string_pretty(&view).unwrap());
//! }
//! # }
//! ```

pub mod companies;
pub mod company;
pub mod core;
pub mod evaluate;
pub mod greenwash;
pub mod insights;
pub mod metrics;
pub mod pages;
pub mod render;
pub mod scores;
pub mod shell;
pub mod validation;
pub mod views;

#[cfg(feature = "cli")]
pub mod telemetry;

pub use companies::{CompaniesBuilder, companies};
pub use company::{Company, CompanySnapshot};
pub use crate::core::{
    CacheMode, ConfigError, DashboardConfig, EsgClient, EsgClientBuilder, EsgError, RetryConfig,
};
pub use evaluate::{AnalysisJob, DocumentKind, EvaluateBuilder, UploadReceipt};
pub use greenwash::{GreenwashBuilder, GreenwashFinding};
pub use insights::{InsightsBuilder, NewsInsight};
pub use metrics::{CompanyMetrics, MetricValue, MetricsBuilder};
pub use scores::{EsgScoreRecord, Pillar, Rating, ScoresBuilder};
pub use shell::{Route, Shell};
pub use validation::{ValidationBuilder, ValidationReport};

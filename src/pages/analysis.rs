//! The analysis dashboard: pick a company, then browse its tabs.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::company::{Company, CompanySnapshot};
use crate::companies::CompaniesBuilder;
use crate::core::{EsgClient, EsgError};
use crate::views::{
    ComplementPolicy, EnvironmentalView, GovernanceView, GreenwashView, InsightsView,
    OverallView, SocialView, environmental_view, governance_view, greenwash_view,
    insights_view, overall_view, social_view,
};

use super::{LoadState, LoadTicket, Loadable};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum DashboardTab {
    #[default]
    Overall,
    Environmental,
    Social,
    Governance,
    Insights,
    Greenwash,
}

impl DashboardTab {
    pub const ALL: [Self; 6] = [
        Self::Overall,
        Self::Environmental,
        Self::Social,
        Self::Governance,
        Self::Insights,
        Self::Greenwash,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overall => "Overall",
            Self::Environmental => "Environmental",
            Self::Social => "Social",
            Self::Governance => "Governance",
            Self::Insights => "Insights",
            Self::Greenwash => "Greenwash",
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DashboardTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tab `{s}`"))
    }
}

/// The rendered content of one tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", content = "view")]
pub enum TabView {
    Overall(OverallView),
    Environmental(EnvironmentalView),
    Social(SocialView),
    Governance(GovernanceView),
    Insights(InsightsView),
    Greenwash(GreenwashView),
}

impl TabView {
    pub fn build(tab: DashboardTab, snapshot: &CompanySnapshot, policy: ComplementPolicy) -> Self {
        match tab {
            DashboardTab::Overall => Self::Overall(overall_view(
                &snapshot.company,
                &snapshot.scores,
                &snapshot.metrics,
            )),
            DashboardTab::Environmental => {
                Self::Environmental(environmental_view(&snapshot.metrics, policy))
            }
            DashboardTab::Social => Self::Social(social_view(&snapshot.metrics, policy)),
            DashboardTab::Governance => {
                Self::Governance(governance_view(&snapshot.metrics, policy))
            }
            DashboardTab::Insights => Self::Insights(insights_view(&snapshot.insights)),
            DashboardTab::Greenwash => {
                Self::Greenwash(greenwash_view(&snapshot.greenwash, policy))
            }
        }
    }
}

/// Fetches everything the dashboard needs for `company` behind one loading boundary.
///
/// # Errors
///
/// Returns an error if the company's score data cannot be fetched.
pub async fn load_snapshot(client: &EsgClient, company: &str) -> Result<CompanySnapshot, EsgError> {
    Company::new(client, company).snapshot().await
}

/// State of the analysis page.
pub struct AnalysisPage {
    client: EsgClient,
    policy: ComplementPolicy,
    companies: Loadable<Vec<String>>,
    selected: Option<String>,
    snapshot: Loadable<CompanySnapshot>,
    tab: DashboardTab,
}

impl AnalysisPage {
    pub fn new(client: &EsgClient) -> Self {
        Self {
            client: client.clone(),
            policy: ComplementPolicy::default(),
            companies: Loadable::new(),
            selected: None,
            snapshot: Loadable::new(),
            tab: DashboardTab::default(),
        }
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: ComplementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Loads the company selector.
    pub async fn load_companies(&mut self) {
        let ticket = self.companies.begin("companies");
        let result = CompaniesBuilder::new(&self.client).fetch().await;
        self.companies.finish(ticket, result);
    }

    pub fn companies(&self) -> &[String] {
        self.companies.value().map_or(&[][..], Vec::as_slice)
    }

    pub const fn companies_state(&self) -> &LoadState<Vec<String>> {
        self.companies.state()
    }

    /// Marks `company` as selected and starts its load. The tab is kept.
    pub fn begin_selection(&mut self, company: impl Into<String>) -> LoadTicket {
        let company = company.into();
        self.selected = Some(company.clone());
        self.snapshot.begin(company)
    }

    /// Applies a snapshot load; results for a superseded selection are dropped.
    pub fn apply(&mut self, ticket: LoadTicket, result: Result<CompanySnapshot, EsgError>) -> bool {
        self.snapshot.finish(ticket, result)
    }

    /// Selects `company` and loads its snapshot.
    pub async fn select_company(&mut self, company: &str) {
        let ticket = self.begin_selection(company);
        let result = load_snapshot(&self.client, company).await;
        self.apply(ticket, result);
    }

    /// Switching tabs only re-derives views from the loaded snapshot.
    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.tab = tab;
    }

    pub const fn tab(&self) -> DashboardTab {
        self.tab
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub const fn snapshot_state(&self) -> &LoadState<CompanySnapshot> {
        self.snapshot.state()
    }

    pub const fn snapshot(&self) -> Option<&CompanySnapshot> {
        self.snapshot.value()
    }

    /// The current tab's view, or `None` while loading, after a failure, or before a
    /// company is selected (the page renders empty).
    pub fn view(&self) -> Option<TabView> {
        self.snapshot
            .value()
            .map(|s| TabView::build(self.tab, s, self.policy))
    }
}

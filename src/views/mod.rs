//! View-model reducers: pure functions folding backend records into chart-ready shapes.
//!
//! The same input always produces the same output, down to the serialized bytes.

pub mod assessment;
pub mod chart;
pub mod codes;
pub mod complement;
pub mod environmental;
pub mod feed;
pub mod governance;
pub mod greenwash;
pub mod overall;
pub mod social;
pub mod validation;

pub use assessment::{Assessment, DimensionAssessment, DimensionLevel, assess};
pub use chart::{Chart, ChartKind, ChartRow, ChartSeries, SeriesPoint, format_value};
pub use complement::{ComplementPolicy, complement_pair};
pub use environmental::{EnvironmentalView, environmental_overview, environmental_view};
pub use feed::{InsightCard, InsightsView, insights_view};
pub use governance::{GovernanceView, governance_view};
pub use greenwash::{GreenwashView, greenwash_view};
pub use overall::{Headline, Kpi, OverallView, ScoreCard, overall_view, score_breakdown};
pub use social::{SocialView, social_view};
pub use validation::{VALIDATION_HEADERS, ValidationRowView, ValidationView, validation_view};

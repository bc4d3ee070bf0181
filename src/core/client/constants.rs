//! Centralized constants for default endpoints and UA.

/// User agent sent with every backend request.
pub(crate) const USER_AGENT: &str = concat!("esg-dashboard/", env!("CARGO_PKG_VERSION"));

/// Default backend base URL (the development server the dashboard talks to).
pub const DEFAULT_BASE_URL: &str = "http://localhost:3002/";

/// Endpoint paths, relative to the base URL.
pub(crate) const PATH_COMPANIES: &str = "companies";
pub(crate) const PATH_SCORE_DATA: &str = "score-data";
pub(crate) const PATH_COMPANY_METRICS: &str = "company-metrics";
pub(crate) const PATH_REALTIME_DATA: &str = "realtime-data";
pub(crate) const PATH_GREENWASH_DATA: &str = "greenwash-data";
pub(crate) const PATH_VALIDATION_COMPANY: &str = "validation-company";
pub(crate) const PATH_UPLOAD: &str = "upload";
pub(crate) const PATH_START_ANALYSIS: &str = "start-analysis";
pub(crate) const PATH_READ_FILE: &str = "read-file";

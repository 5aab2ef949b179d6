use log::debug;
use serde_json::Value;
use shared::dto::reports::{AggregateReport, RunReportRequest};
use shared::{DerivedMetrics, InstagramReport, MetricsInput, Platform, SavedReport};

use crate::api::client::{ApiClient, ApiResult};
use crate::api::http::HttpClient;
use crate::api::session::TokenStorage;

pub fn report_path(platform: Platform) -> String {
    format!("/api/company/reports/{}/", platform.slug())
}

pub fn run_report_path(platform: Platform) -> String {
    format!("/api/company/reports/{}/run/", platform.slug())
}

pub fn saved_report_path(platform: Platform, report_type: &str) -> String {
    format!(
        "/api/company/reports/saved/?source={}&report_type={}",
        platform.slug(),
        urlencoding::encode(report_type)
    )
}

/// Typed Instagram report together with the metrics shown on its cards
#[derive(Debug, Clone, PartialEq)]
pub struct InstagramReportView {
    pub report: InstagramReport,
    pub metrics: DerivedMetrics,
}

impl InstagramReportView {
    pub fn new(report: InstagramReport) -> Self {
        let metrics = DerivedMetrics::derive(&MetricsInput::from_report(&report));
        Self { report, metrics }
    }
}

impl<H: HttpClient, S: TokenStorage> ApiClient<H, S> {
    /// Raw report payload of a platform
    pub async fn fetch_report(&self, platform: Platform) -> ApiResult<Value> {
        debug!("Fetching {} report", platform.display_name());
        self.get_data(&report_path(platform)).await
    }

    pub async fn instagram_report(&self) -> ApiResult<InstagramReportView> {
        self.get_data::<InstagramReport>(&report_path(Platform::Instagram))
            .await
            .map(InstagramReportView::new)
    }

    /// Asks the backend to pull a fresh GA4 or YouTube report
    pub async fn run_report(&self, platform: Platform, request: &RunReportRequest) -> ApiResult<AggregateReport> {
        debug!("Running {} report {}", platform.display_name(), request.report_type);
        self.post(&run_report_path(platform), request).await
    }

    pub async fn saved_report(&self, platform: Platform, report_type: &str) -> ApiResult<SavedReport> {
        self.get(&saved_report_path(platform, report_type)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_paths() {
        assert_eq!(report_path(Platform::Instagram), "/api/company/reports/instagram/");
        assert_eq!(run_report_path(Platform::Ga4), "/api/company/reports/ga4/run/");
        assert_eq!(
            saved_report_path(Platform::Youtube, "trafficSource"),
            "/api/company/reports/saved/?source=youtube&report_type=trafficSource"
        );
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SharedError};
use crate::models::media::MediaItem;

/// Connected data sources
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Ga4,
    Youtube,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::Ga4, Platform::Youtube];

    /// Path segment used by the report and OAuth endpoints
    pub fn slug(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Ga4 => "ga4",
            Platform::Youtube => "youtube",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Ga4 => "Google Analytics 4",
            Platform::Youtube => "YouTube",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl std::str::FromStr for Platform {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "ga4" => Ok(Platform::Ga4),
            "youtube" => Ok(Platform::Youtube),
            other => Err(SharedError::UnknownPlatform(other.to_string())),
        }
    }
}

/// Instagram account report as returned by `/api/company/reports/instagram/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InstagramReport {
    #[serde(default)]
    pub basic_info: Option<BasicInfo>,
    #[serde(default)]
    pub media_data: Option<MediaPage>,
    #[serde(default)]
    pub demographics: Option<InstagramDemographics>,
    #[serde(default)]
    pub user_insights: Option<BTreeMap<String, GraphMetric>>,
    #[serde(default)]
    pub calculated_metrics: Option<CalculatedMetrics>,
}

impl InstagramReport {
    pub fn followers_count(&self) -> Option<u64> {
        self.basic_info.as_ref().and_then(|info| info.followers_count)
    }

    /// All media returned by the report, newest first as delivered
    pub fn media(&self) -> Option<&[MediaItem]> {
        self.media_data.as_ref().map(|page| page.data.as_slice())
    }

    /// 28-day account insights as `(metric name, total)` pairs
    pub fn insight_totals(&self) -> Vec<(String, u64)> {
        self.user_insights
            .iter()
            .flatten()
            .map(|(name, metric)| (name.replacen('_', " ", 1), metric.total_value()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BasicInfo {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub followers_count: Option<u64>,
    #[serde(default)]
    pub follows_count: Option<u64>,
    #[serde(default)]
    pub media_count: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MediaPage {
    #[serde(default)]
    pub data: Vec<MediaItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InstagramDemographics {
    #[serde(default)]
    pub follower_demographics_age: Option<GraphMetric>,
    #[serde(default)]
    pub follower_demographics_city: Option<GraphMetric>,
    #[serde(default)]
    pub follower_demographics_gender: Option<GraphMetric>,
    #[serde(default)]
    pub follower_demographics_country: Option<GraphMetric>,
}

/// Graph API insight metric: `{ data: [ { total_value: { value, breakdowns } } ] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphMetric {
    #[serde(default)]
    pub data: Vec<GraphMetricEntry>,
}

impl GraphMetric {
    pub fn total_value(&self) -> u64 {
        self.data
            .first()
            .and_then(|entry| entry.total_value.as_ref())
            .and_then(|total| total.value)
            .unwrap_or(0)
    }

    /// Results of the first breakdown of the first entry
    pub fn breakdown_results(&self) -> &[BreakdownResult] {
        self.data
            .first()
            .and_then(|entry| entry.total_value.as_ref())
            .and_then(|total| total.breakdowns.first())
            .map(|breakdown| breakdown.results.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphMetricEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub total_value: Option<GraphTotalValue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphTotalValue {
    #[serde(default)]
    pub value: Option<u64>,
    #[serde(default)]
    pub breakdowns: Vec<GraphBreakdown>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GraphBreakdown {
    #[serde(default)]
    pub results: Vec<BreakdownResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BreakdownResult {
    #[serde(default)]
    pub dimension_values: Vec<String>,
    #[serde(default)]
    pub value: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CalculatedMetrics {
    /// Posts per day over the sampled period
    #[serde(default)]
    pub posting_frequency: Option<f64>,
}

/// GA4 report families the backend can pull
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Ga4ReportType {
    UserAcquisitionSource,
    SessionSourceMedium,
    OperatingSystem,
    UserGender,
    DeviceCategory,
    Country,
    City,
    Age,
}

impl Ga4ReportType {
    pub const ALL: [Ga4ReportType; 8] = [
        Ga4ReportType::UserAcquisitionSource,
        Ga4ReportType::SessionSourceMedium,
        Ga4ReportType::OperatingSystem,
        Ga4ReportType::UserGender,
        Ga4ReportType::DeviceCategory,
        Ga4ReportType::Country,
        Ga4ReportType::City,
        Ga4ReportType::Age,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Ga4ReportType::UserAcquisitionSource => "userAcquisitionSource",
            Ga4ReportType::SessionSourceMedium => "sessionSourceMedium",
            Ga4ReportType::OperatingSystem => "operatingSystem",
            Ga4ReportType::UserGender => "userGender",
            Ga4ReportType::DeviceCategory => "deviceCategory",
            Ga4ReportType::Country => "country",
            Ga4ReportType::City => "city",
            Ga4ReportType::Age => "age",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Ga4ReportType::UserAcquisitionSource => "User Acquisition",
            Ga4ReportType::SessionSourceMedium => "Session Source",
            Ga4ReportType::OperatingSystem => "Operating System",
            Ga4ReportType::UserGender => "User Gender",
            Ga4ReportType::DeviceCategory => "Device Category",
            Ga4ReportType::Country => "Country",
            Ga4ReportType::City => "City",
            Ga4ReportType::Age => "Age Demographics",
        }
    }
}

/// YouTube report families the backend can pull
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum YoutubeReportType {
    TrafficSource,
    AgeGroup,
    DeviceType,
    TopSubscribers,
}

impl YoutubeReportType {
    pub const ALL: [YoutubeReportType; 4] = [
        YoutubeReportType::TrafficSource,
        YoutubeReportType::AgeGroup,
        YoutubeReportType::DeviceType,
        YoutubeReportType::TopSubscribers,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            YoutubeReportType::TrafficSource => "trafficSource",
            YoutubeReportType::AgeGroup => "ageGroup",
            YoutubeReportType::DeviceType => "deviceType",
            YoutubeReportType::TopSubscribers => "topSubscribers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            YoutubeReportType::TrafficSource => "Traffic Source",
            YoutubeReportType::AgeGroup => "Age Groups",
            YoutubeReportType::DeviceType => "Device Types",
            YoutubeReportType::TopSubscribers => "Top Subscribers",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunReportRequest {
    pub report_type: String,
}

impl From<Ga4ReportType> for RunReportRequest {
    fn from(report_type: Ga4ReportType) -> Self {
        Self {
            report_type: report_type.key().to_string(),
        }
    }
}

impl From<YoutubeReportType> for RunReportRequest {
    fn from(report_type: YoutubeReportType) -> Self {
        Self {
            report_type: report_type.key().to_string(),
        }
    }
}

/// Rows stored by a previous report run; row shape depends on the report
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SavedReport {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub report_type: Option<String>,
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub record_count: Option<u64>,
}

impl SavedReport {
    pub fn record_count(&self) -> u64 {
        self.record_count.unwrap_or(self.data.len() as u64)
    }
}

/// Aggregate GA4 or YouTube report: metric name to number
pub type AggregateReport = BTreeMap<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_report() -> InstagramReport {
        serde_json::from_value(json!({
            "basic_info": { "username": "acme", "followers_count": 1200, "media_count": 48 },
            "media_data": { "data": [
                { "id": "1", "like_count": 10, "comments_count": 2 },
                { "id": "2", "like_count": 20, "comments_count": 4 }
            ]},
            "demographics": {
                "follower_demographics_age": { "data": [ { "total_value": { "breakdowns": [ { "results": [
                    { "dimension_values": ["18-24"], "value": 300 },
                    { "dimension_values": ["25-34"], "value": 500 }
                ]}]}}]}
            },
            "user_insights": {
                "profile_views": { "data": [ { "total_value": { "value": 77 } } ] }
            },
            "calculated_metrics": { "posting_frequency": 0.42 }
        }))
        .unwrap()
    }

    #[test]
    fn test_instagram_report_accessors() {
        let report = sample_report();
        assert_eq!(report.followers_count(), Some(1200));
        assert_eq!(report.media().map(|m| m.len()), Some(2));
        assert_eq!(report.insight_totals(), vec![("profile views".to_string(), 77)]);
    }

    #[test]
    fn test_breakdown_results_of_missing_metric_are_empty() {
        let metric = GraphMetric::default();
        assert!(metric.breakdown_results().is_empty());
        assert_eq!(metric.total_value(), 0);
    }

    #[test]
    fn test_platform_round_trip_through_str() {
        for platform in Platform::ALL {
            assert_eq!(platform.slug().parse::<Platform>().unwrap(), platform);
        }
        assert!("tiktok".parse::<Platform>().is_err());
    }

    #[test]
    fn test_run_report_request_uses_camel_case_keys() {
        let request = RunReportRequest::from(Ga4ReportType::UserAcquisitionSource);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "report_type": "userAcquisitionSource" })
        );
        assert_eq!(
            serde_json::to_value(YoutubeReportType::TopSubscribers).unwrap(),
            json!("topSubscribers")
        );
    }
}

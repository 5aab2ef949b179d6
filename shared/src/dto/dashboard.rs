use serde::{Deserialize, Serialize};

use crate::demographics::AudienceRow;

/// Summary cards on the overview tab
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewDto {
    #[serde(default)]
    pub total_sessions: u64,
    #[serde(default)]
    pub active_users: u64,
    #[serde(default)]
    pub engagement_rate: f64,
    #[serde(default)]
    pub bounce_rate: f64,
    #[serde(default)]
    pub session_growth: Option<f64>,
    #[serde(default)]
    pub user_growth: Option<f64>,
    #[serde(default)]
    pub engagement_growth: Option<f64>,
    #[serde(default)]
    pub bounce_growth: Option<f64>,
}

/// Audience breakdowns, each row normalized at deserialization time
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AudienceDto {
    #[serde(default)]
    pub age_distribution: Vec<AudienceRow>,
    #[serde(default)]
    pub gender_distribution: Vec<AudienceRow>,
    #[serde(default)]
    pub geographic_distribution: Vec<AudienceRow>,
    #[serde(default)]
    pub city_distribution: Vec<AudienceRow>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrafficDto {
    #[serde(default)]
    pub acquisition_channels: Vec<AcquisitionChannel>,
    #[serde(default)]
    pub session_sources: Vec<SessionSource>,
    #[serde(default)]
    pub technology_breakdown: TechnologyBreakdown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AcquisitionChannel {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub new_users: u64,
    #[serde(default)]
    pub sessions: u64,
    #[serde(default)]
    pub engagement_rate: f64,
    #[serde(default)]
    pub conversions: f64,
    #[serde(default)]
    pub user_engagement_duration: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionSource {
    #[serde(default)]
    pub source_medium: String,
    #[serde(default)]
    pub sessions: u64,
    #[serde(default)]
    pub conversions: f64,
    #[serde(default)]
    pub engagement_rate: f64,
    #[serde(default)]
    pub bounce_rate: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TechnologyBreakdown {
    #[serde(default)]
    pub devices: Vec<DeviceUsage>,
    #[serde(default)]
    pub operating_systems: Vec<OperatingSystemUsage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeviceUsage {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub users: u64,
    #[serde(default)]
    pub sessions: u64,
    #[serde(default)]
    pub bounce_rate: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OperatingSystemUsage {
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub users: u64,
    #[serde(default)]
    pub sessions: u64,
    #[serde(default)]
    pub engagement_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_overview_uses_camel_case() {
        let overview: OverviewDto = serde_json::from_value(json!({
            "totalSessions": 1500,
            "activeUsers": 900,
            "engagementRate": 61.3,
            "bounceRate": 65.0,
            "sessionGrowth": 12.5
        }))
        .unwrap();
        assert_eq!(overview.total_sessions, 1500);
        assert_eq!(overview.session_growth, Some(12.5));
        assert_eq!(overview.user_growth, None);
    }

    #[test]
    fn test_traffic_tolerates_missing_operating_systems() {
        let traffic: TrafficDto = serde_json::from_value(json!({
            "acquisition_channels": [ { "source": "google", "new_users": 10, "sessions": 30 } ],
            "technology_breakdown": { "devices": [ { "category": "mobile", "users": 70 } ] }
        }))
        .unwrap();
        assert_eq!(traffic.acquisition_channels[0].sessions, 30);
        assert_eq!(traffic.technology_breakdown.devices[0].users, 70);
        assert!(traffic.technology_breakdown.operating_systems.is_empty());
        assert!(traffic.session_sources.is_empty());
    }
}

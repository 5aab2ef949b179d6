pub mod models {
    pub mod media;
    pub mod user;
}

pub mod dto {
    pub mod auth;
    pub mod common;
    pub mod connections;
    pub mod dashboard;
    pub mod reports;
    pub mod settings;
}

pub mod demographics;
pub mod error;
pub mod format;
pub mod metrics;
pub mod validation;

#[cfg(test)]
mod demographics_tests;
#[cfg(test)]
mod metrics_tests;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{
    media::{CommentText, CommentsAnalysis, MediaItem},
    user::{User, UserType},
};

// Re-export DTOs
pub use dto::{
    auth::{
        CompanyRegisterRequest, InfluencerRegisterRequest, LoginRequest, LogoutRequest,
        RefreshRequest, RefreshResponse, TokenResponse,
    },
    common::{Acknowledgement, ApiEnvelope, ErrorBody},
    connections::{AuthStartResponse, Connections, ConnectionsResponse, PropertyIdRequest},
    dashboard::{AudienceDto, OverviewDto, TrafficDto},
    reports::{Ga4ReportType, InstagramReport, Platform, SavedReport, YoutubeReportType},
    settings::{AccountInfo, ApiConnectionSetting, BillingInfo, NotificationPreferences, SecuritySettings},
};

pub use demographics::{AudienceRow, DemographicBreakdown};
pub use metrics::{DerivedMetrics, MetricsInput};
pub use validation::{validate_company_email, EmailCheck};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_to_metrics() {
        let report: InstagramReport = serde_json::from_value(serde_json::json!({
            "basic_info": { "username": "acme", "followers_count": 1000 },
            "media_data": { "data": [
                { "id": "1", "like_count": 80, "comments_count": 20 },
                { "id": "2", "like_count": 120, "comments_count": 30 }
            ]}
        }))
        .unwrap();

        let derived = DerivedMetrics::derive(&MetricsInput::from_report(&report));
        // 250 / (1000 * 2) * 100
        assert_eq!(derived.engagement_rate, Some(12.5));
        assert_eq!(derived.comment_like_ratio, Some(0.25));
    }

    #[test]
    fn test_user_creation() {
        let user = User::new("ops@acme.io".to_string(), UserType::Company).unwrap();
        assert_eq!(user.email, "ops@acme.io");
        assert_eq!(user.user_type, UserType::Company);
    }

    #[test]
    fn test_platform_slugs() {
        let slugs: Vec<&str> = Platform::ALL.iter().map(|p| p.slug()).collect();
        assert_eq!(slugs, vec!["instagram", "ga4", "youtube"]);
    }
}

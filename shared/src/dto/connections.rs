use serde::{Deserialize, Serialize};

use crate::dto::reports::Platform;

/// Which data sources the company has linked
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Connections {
    #[serde(default)]
    pub ga4: bool,
    #[serde(default)]
    pub youtube: bool,
    #[serde(default)]
    pub instagram: bool,
}

impl Connections {
    pub fn is_connected(&self, platform: Platform) -> bool {
        match platform {
            Platform::Ga4 => self.ga4,
            Platform::Youtube => self.youtube,
            Platform::Instagram => self.instagram,
        }
    }

    pub fn any(&self) -> bool {
        self.ga4 || self.youtube || self.instagram
    }

    /// Audience and traffic analyses need GA4 or YouTube
    pub fn has_analytics_source(&self) -> bool {
        self.ga4 || self.youtube
    }
}

/// Response of `/api/company/analytics/connections/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConnectionsResponse {
    #[serde(default)]
    pub connections: Connections,
    #[serde(default)]
    pub ga4_property_id: Option<String>,
}

impl ConnectionsResponse {
    pub fn property_id(&self) -> Option<&str> {
        self.ga4_property_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// GA4 is linked but reports cannot run until a property is chosen
    pub fn needs_property_id(&self) -> bool {
        self.connections.ga4 && self.property_id().is_none()
    }
}

/// Where to send the browser to grant access to a provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthStartResponse {
    #[serde(alias = "auth_url")]
    pub authorization_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyIdRequest {
    pub property_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertyIdResponse {
    #[serde(default)]
    pub property_id: Option<String>,
}

/// Per-provider status from `/api/company/auth/{platform}/connection/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConnectionStatus {
    #[serde(default, alias = "is_connected")]
    pub connected: bool,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub last_connected: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_connections_response_property_id() {
        let response: ConnectionsResponse = serde_json::from_value(json!({
            "connections": { "ga4": true, "youtube": false },
            "ga4_property_id": "  "
        }))
        .unwrap();
        assert!(response.connections.is_connected(Platform::Ga4));
        assert!(!response.connections.instagram);
        assert_eq!(response.property_id(), None);
        assert!(response.needs_property_id());
    }

    #[test]
    fn test_connections_any() {
        assert!(!Connections::default().any());
        let instagram_only = Connections { instagram: true, ..Default::default() };
        assert!(instagram_only.any());
        assert!(!instagram_only.has_analytics_source());
    }

    #[test]
    fn test_auth_start_accepts_either_url_key() {
        let ga4: AuthStartResponse =
            serde_json::from_value(json!({ "authorization_url": "https://accounts.google.com/o" }))
                .unwrap();
        let instagram: AuthStartResponse =
            serde_json::from_value(json!({ "auth_url": "https://api.instagram.com/oauth" })).unwrap();
        assert_eq!(ga4.authorization_url, "https://accounts.google.com/o");
        assert_eq!(instagram.authorization_url, "https://api.instagram.com/oauth");
    }
}

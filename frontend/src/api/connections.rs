use log::debug;
use shared::dto::connections::{ConnectionStatus, PropertyIdResponse};
use shared::{Acknowledgement, AuthStartResponse, ConnectionsResponse, Platform, PropertyIdRequest};

use crate::api::client::{ApiClient, ApiResult};
use crate::api::http::HttpClient;
use crate::api::session::TokenStorage;

pub const CONNECTIONS_PATH: &str = "/api/company/analytics/connections/";
pub const GA4_PROPERTY_PATH: &str = "/api/company/auth/ga4/property/";
pub const GA4_PROPERTY_GET_PATH: &str = "/api/company/auth/ga4/property/get/";

fn auth_path(platform: Platform, action: &str) -> String {
    format!("/api/company/auth/{}/{}/", platform.slug(), action)
}

/// Path that starts the provider's consent flow. Instagram uses a GET on
/// its simple-connect endpoint, the Google providers a POST on `start/`.
pub fn start_auth_path(platform: Platform) -> String {
    match platform {
        Platform::Instagram => auth_path(platform, "simple-connect"),
        Platform::Ga4 | Platform::Youtube => auth_path(platform, "start"),
    }
}

impl<H: HttpClient, S: TokenStorage> ApiClient<H, S> {
    pub async fn check_connections(&self) -> ApiResult<ConnectionsResponse> {
        self.get(CONNECTIONS_PATH).await
    }

    /// Returns the URL the browser must visit to grant access
    pub async fn start_auth(&self, platform: Platform) -> ApiResult<AuthStartResponse> {
        debug!("Starting {} authorization", platform.display_name());
        let path = start_auth_path(platform);
        match platform {
            Platform::Instagram => self.get(&path).await,
            Platform::Ga4 | Platform::Youtube => self.post_empty(&path).await,
        }
    }

    pub async fn save_ga4_property_id(&self, property_id: &str) -> ApiResult<Acknowledgement> {
        let request = PropertyIdRequest {
            property_id: property_id.trim().to_string(),
        };
        self.post(GA4_PROPERTY_PATH, &request).await
    }

    pub async fn ga4_property_id(&self) -> ApiResult<PropertyIdResponse> {
        self.get(GA4_PROPERTY_GET_PATH).await
    }

    pub async fn connection_status(&self, platform: Platform) -> ApiResult<ConnectionStatus> {
        self.get(&auth_path(platform, "connection")).await
    }

    pub async fn disconnect(&self, platform: Platform) -> ApiResult<Acknowledgement> {
        debug!("Disconnecting {}", platform.display_name());
        self.post_empty(&auth_path(platform, "disconnect")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_auth_paths() {
        assert_eq!(
            start_auth_path(Platform::Instagram),
            "/api/company/auth/instagram/simple-connect/"
        );
        assert_eq!(start_auth_path(Platform::Ga4), "/api/company/auth/ga4/start/");
        assert_eq!(start_auth_path(Platform::Youtube), "/api/company/auth/youtube/start/");
    }

    #[test]
    fn test_provider_paths() {
        assert_eq!(
            auth_path(Platform::Youtube, "disconnect"),
            "/api/company/auth/youtube/disconnect/"
        );
    }
}

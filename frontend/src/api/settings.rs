use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    AccountInfo, Acknowledgement, ApiConnectionSetting, BillingInfo, NotificationPreferences,
    SecuritySettings,
};

use crate::api::client::{ApiClient, ApiResult};
use crate::api::http::HttpClient;
use crate::api::session::TokenStorage;

/// One settings panel; each is read and written on its own endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsPanel {
    Account,
    ApiConnections,
    Notifications,
    Security,
    Billing,
}

impl SettingsPanel {
    pub const ALL: [SettingsPanel; 5] = [
        SettingsPanel::Account,
        SettingsPanel::ApiConnections,
        SettingsPanel::Notifications,
        SettingsPanel::Security,
        SettingsPanel::Billing,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            SettingsPanel::Account => "/api/company/settings/account/",
            SettingsPanel::ApiConnections => "/api/company/settings/api-connections/",
            SettingsPanel::Notifications => "/api/company/settings/notifications/",
            SettingsPanel::Security => "/api/company/settings/security/",
            SettingsPanel::Billing => "/api/company/settings/billing/",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SettingsPanel::Account => "Account",
            SettingsPanel::ApiConnections => "API Connections",
            SettingsPanel::Notifications => "Notifications",
            SettingsPanel::Security => "Security",
            SettingsPanel::Billing => "Billing",
        }
    }
}

impl<H: HttpClient, S: TokenStorage> ApiClient<H, S> {
    async fn read_settings<T: DeserializeOwned>(&self, panel: SettingsPanel) -> ApiResult<T> {
        self.get_data(panel.path()).await
    }

    async fn write_settings<B: Serialize>(&self, panel: SettingsPanel, body: &B) -> ApiResult<Acknowledgement> {
        self.post(panel.path(), body).await
    }

    pub async fn account_info(&self) -> ApiResult<AccountInfo> {
        self.read_settings(SettingsPanel::Account).await
    }

    pub async fn update_account_info(&self, info: &AccountInfo) -> ApiResult<Acknowledgement> {
        self.write_settings(SettingsPanel::Account, info).await
    }

    pub async fn api_connections(&self) -> ApiResult<Vec<ApiConnectionSetting>> {
        self.read_settings(SettingsPanel::ApiConnections).await
    }

    pub async fn update_api_connection(&self, connection: &ApiConnectionSetting) -> ApiResult<Acknowledgement> {
        self.write_settings(SettingsPanel::ApiConnections, connection).await
    }

    pub async fn notification_preferences(&self) -> ApiResult<NotificationPreferences> {
        self.read_settings(SettingsPanel::Notifications).await
    }

    pub async fn update_notification_preferences(
        &self,
        preferences: &NotificationPreferences,
    ) -> ApiResult<Acknowledgement> {
        self.write_settings(SettingsPanel::Notifications, preferences).await
    }

    pub async fn security_settings(&self) -> ApiResult<SecuritySettings> {
        self.read_settings(SettingsPanel::Security).await
    }

    pub async fn update_security_settings(&self, settings: &SecuritySettings) -> ApiResult<Acknowledgement> {
        self.write_settings(SettingsPanel::Security, settings).await
    }

    pub async fn billing_info(&self) -> ApiResult<BillingInfo> {
        self.read_settings(SettingsPanel::Billing).await
    }

    pub async fn update_billing_info(&self, billing: &BillingInfo) -> ApiResult<Acknowledgement> {
        self.write_settings(SettingsPanel::Billing, billing).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_panel_lives_under_company_settings() {
        for panel in SettingsPanel::ALL {
            assert!(panel.path().starts_with("/api/company/settings/"));
            assert!(panel.path().ends_with('/'));
        }
    }
}

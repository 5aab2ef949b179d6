use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::validation::form_error;

/// Company account panel
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct AccountInfo {
    #[validate(length(min = 1, max = 255, message = "Company name is required"))]
    #[serde(default)]
    pub company_name: String,

    #[validate(length(max = 100))]
    #[serde(default)]
    pub contact_person: String,

    #[validate(length(max = 100))]
    #[serde(default)]
    pub position: String,

    #[validate(length(max = 30))]
    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub email: Option<String>,
}

impl AccountInfo {
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(form_error)
    }
}

/// One provider row of the API connections panel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ApiConnectionSetting {
    pub provider: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub last_connected: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationPreferences {
    #[serde(default = "enabled")]
    pub email_reports: bool,
    #[serde(default = "enabled")]
    pub campaign_end: bool,
    #[serde(default = "enabled")]
    pub integration_error: bool,
    #[serde(default)]
    pub push_enabled: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_reports: true,
            campaign_end: true,
            integration_error: true,
            push_enabled: false,
        }
    }
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SecuritySettings {
    #[serde(default)]
    pub two_factor_enabled: bool,
    #[serde(default, skip_serializing)]
    pub last_password_change: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct BillingInfo {
    #[serde(default = "free_plan")]
    pub active_plan: String,

    #[validate(length(max = 4))]
    #[serde(default)]
    pub card_last4: String,

    #[serde(default = "enabled")]
    pub auto_renew: bool,
}

impl Default for BillingInfo {
    fn default() -> Self {
        Self {
            active_plan: free_plan(),
            card_last4: String::new(),
            auto_renew: true,
        }
    }
}

impl BillingInfo {
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(form_error)
    }
}

fn free_plan() -> String {
    "free".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_notification_defaults_match_server() {
        let prefs: NotificationPreferences = serde_json::from_value(json!({})).unwrap();
        assert_eq!(prefs, NotificationPreferences::default());
        assert!(prefs.email_reports);
        assert!(!prefs.push_enabled);
    }

    #[test]
    fn test_billing_defaults_to_free_plan() {
        let billing: BillingInfo = serde_json::from_value(json!({ "card_last4": "4242" })).unwrap();
        assert_eq!(billing.active_plan, "free");
        assert!(billing.auto_renew);
        assert!(billing.validate().is_ok());

        let billing = BillingInfo { card_last4: "42424".to_string(), ..billing };
        assert!(billing.validate().is_err());
    }

    #[test]
    fn test_account_info_requires_company_name() {
        assert!(AccountInfo::default().validate().is_err());
        let info = AccountInfo { company_name: "Acme".to_string(), ..Default::default() };
        assert!(info.validate().is_ok());
    }

    #[test]
    fn test_security_settings_do_not_send_password_change_date() {
        let settings = SecuritySettings {
            two_factor_enabled: true,
            last_password_change: Some("2024-01-01".to_string()),
        };
        assert_eq!(serde_json::to_value(&settings).unwrap(), json!({ "two_factor_enabled": true }));
    }
}

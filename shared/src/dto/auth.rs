use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{Result, SharedError};
use crate::models::user::{User, UserType};
use crate::validation::{form_error, validate_company_email};

/// Request for login, shared by both roles on the company endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct LoginRequest {
    /// User's email address
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,

    pub user_type: UserType,
}

/// Request for company registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct CompanyRegisterRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 200))]
    pub company: Option<String>,

    pub user_type: UserType,
}

/// Request for influencer registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct InfluencerRegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100))]
    pub surname: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// JWT pair returned by login and influencer registration
impl LoginRequest {
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(form_error)
    }
}

impl CompanyRegisterRequest {
    /// Field rules plus the work-address rule for company emails
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(form_error)?;
        let email = validate_company_email(&self.email);
        if !email.is_valid {
            return Err(SharedError::InvalidEmail(email.message));
        }
        Ok(())
    }
}

impl InfluencerRegisterRequest {
    pub fn check(&self) -> Result<()> {
        self.validate().map_err(form_error)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshResponse {
    pub access: String,
}

/// Body of the logout call, blacklists the refresh token server-side
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogoutRequest {
    pub refresh: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_login_request_wire_format() {
        let request = LoginRequest {
            email: "ops@acme.io".to_string(),
            password: "secret".to_string(),
            user_type: UserType::Company,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "email": "ops@acme.io", "password": "secret", "user_type": "company" })
        );
    }

    #[test]
    fn test_company_register_requires_long_password() {
        let request = CompanyRegisterRequest {
            email: "ops@acme.io".to_string(),
            password: "short".to_string(),
            first_name: "Ayşe".to_string(),
            last_name: "Yılmaz".to_string(),
            company: Some("Acme".to_string()),
            user_type: UserType::Company,
        };
        assert!(request.validate().is_err());

        let request = CompanyRegisterRequest {
            password: "long-enough".to_string(),
            ..request
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_check_messages() {
        let request = CompanyRegisterRequest {
            email: "ops@gmail.com".to_string(),
            password: "long-enough".to_string(),
            first_name: "Ayşe".to_string(),
            last_name: "Yılmaz".to_string(),
            company: None,
            user_type: UserType::Company,
        };
        assert!(matches!(request.check(), Err(SharedError::InvalidEmail(_))));

        let request = CompanyRegisterRequest {
            email: "ops@acme.io".to_string(),
            password: "short".to_string(),
            ..request
        };
        assert_eq!(
            request.check().unwrap_err().message(),
            "Password must be at least 8 characters"
        );

        let login = LoginRequest {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
            user_type: UserType::Influencer,
        };
        assert_eq!(login.check().unwrap_err().message(), "Please enter a valid email");
    }

    #[test]
    fn test_token_response_without_user() {
        let response: TokenResponse =
            serde_json::from_value(json!({ "access": "a.b.c", "refresh": "r.s.t" })).unwrap();
        assert_eq!(response.access, "a.b.c");
        assert_eq!(response.refresh.as_deref(), Some("r.s.t"));
        assert!(response.user.is_none());
    }
}

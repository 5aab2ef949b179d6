use crate::error::{Result, SharedError};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The two account roles served by the dashboard
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Company,
    Influencer,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Company => "company",
            UserType::Influencer => "influencer",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UserType {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "company" => Ok(UserType::Company),
            "influencer" => Ok(UserType::Influencer),
            other => Err(SharedError::BadRequest(format!("Unknown user type: {}", other))),
        }
    }
}

/// Represents the signed-in account as cached on the client
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,

    /// User's email address
    #[validate(email)]
    pub email: String,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub user_type: UserType,
}

impl User {
    /// Creates a new user with validation
    pub fn new(email: String, user_type: UserType) -> Result<Self> {
        let user = Self {
            id: None,
            email,
            first_name: None,
            last_name: None,
            company: None,
            user_type,
        };
        user.validate()?;
        Ok(user)
    }

    /// Name shown in the top bar: full name, then company, then email
    pub fn display_name(&self) -> String {
        let full_name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full_name.is_empty() {
            return full_name;
        }
        match self.company.as_deref() {
            Some(company) if !company.trim().is_empty() => company.to_string(),
            _ => self.email.clone(),
        }
    }
}

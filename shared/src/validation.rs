use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::error::SharedError;

const PERSONAL_EMAIL_DOMAINS: [&str; 18] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "live.com",
    "icloud.com",
    "me.com",
    "mac.com",
    "aol.com",
    "yandex.com",
    "mail.ru",
    "protonmail.com",
    "tutanota.com",
    "zoho.com",
    "gmx.com",
    "web.de",
    "fastmail.com",
    "hushmail.com",
];

lazy_static! {
    static ref COMPANY_DOMAIN_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9]*\.[a-zA-Z]{2,}$").unwrap();
    static ref DISPOSABLE_DOMAIN_RE: Regex =
        Regex::new(r"(?i)temp|throwaway|disposable|10minutemail|guerrillamail").unwrap();
}

/// Outcome of the live company-email check on the registration form.
/// `is_checked` is false while the input does not yet look like an address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailCheck {
    pub is_valid: bool,
    pub is_checked: bool,
    pub message: String,
}

impl EmailCheck {
    fn rejected(message: &str) -> Self {
        Self {
            is_valid: false,
            is_checked: true,
            message: message.to_string(),
        }
    }
}

/// Companies must register with a work address on a real-looking domain
pub fn validate_company_email(email: &str) -> EmailCheck {
    let Some((_, domain)) = email.split_once('@') else {
        return EmailCheck::default();
    };

    // Everything up to a second `@` counts as the domain
    let domain = domain.split('@').next().unwrap_or_default().to_lowercase();
    if domain.is_empty() {
        return EmailCheck::rejected("Please enter a valid email address.");
    }

    if PERSONAL_EMAIL_DOMAINS.contains(&domain.as_str()) {
        return EmailCheck::rejected(
            "Personal email addresses (Gmail, Yahoo, etc.) are not allowed. Please use your company email.",
        );
    }

    if !COMPANY_DOMAIN_RE.is_match(&domain) {
        return EmailCheck::rejected("Please enter a valid company email address.");
    }

    if DISPOSABLE_DOMAIN_RE.is_match(&domain) {
        return EmailCheck::rejected(
            "Temporary email addresses are not allowed. Please use your company email.",
        );
    }

    EmailCheck {
        is_valid: true,
        is_checked: true,
        message: "Valid company email address ✓".to_string(),
    }
}

/// Turns field errors into a single message fit for a form, preferring the
/// custom message of the alphabetically first failing field
pub(crate) fn form_error(errors: ValidationErrors) -> SharedError {
    let message = errors
        .field_errors()
        .into_iter()
        .min_by_key(|(field, _)| *field)
        .and_then(|(field, field_errors)| {
            field_errors.first().map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("Please enter a valid {}", field.replace('_', " ")),
            })
        })
        .unwrap_or_else(|| errors.to_string());
    SharedError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_incomplete_address_is_not_checked() {
        assert_eq!(validate_company_email(""), EmailCheck::default());
        assert_eq!(validate_company_email("ops"), EmailCheck::default());
    }

    #[test]
    fn test_company_address_is_valid() {
        let check = validate_company_email("ops@Acme-Media.io");
        assert!(check.is_valid);
        assert!(check.is_checked);
    }

    #[test]
    fn test_multi_label_domain_fails_domain_pattern() {
        let check = validate_company_email("ops@acme.com.tr");
        assert!(!check.is_valid);
        assert_eq!(check.message, "Please enter a valid company email address.");
    }

    #[test_case("someone@" , "Please enter a valid email address." ; "empty domain")]
    #[test_case("someone@gmail.com", "Personal email addresses (Gmail, Yahoo, etc.) are not allowed. Please use your company email." ; "personal")]
    #[test_case("someone@GMAIL.COM", "Personal email addresses (Gmail, Yahoo, etc.) are not allowed. Please use your company email." ; "personal uppercase")]
    #[test_case("someone@acme", "Please enter a valid company email address." ; "no tld")]
    #[test_case("someone@tempmail.com", "Temporary email addresses are not allowed. Please use your company email." ; "disposable")]
    fn test_rejected_addresses(email: &str, message: &str) {
        let check = validate_company_email(email);
        assert!(!check.is_valid);
        assert!(check.is_checked);
        assert_eq!(check.message, message);
    }
}

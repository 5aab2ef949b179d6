use serde::{Deserialize, Serialize};

use crate::error::{Result, SharedError};

/// `{ success, data, error, message, note }` wrapper used by the
/// dashboard and report endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            note: None,
        }
    }

    /// Unwraps the payload. A successful envelope without data is reported
    /// as `NotFound`, a failed one carries its error or message text.
    pub fn into_result(self) -> Result<T> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(SharedError::NotFound(
                self.message.unwrap_or_else(|| "No data available".to_string()),
            )),
            (false, _) => Err(SharedError::BadRequest(
                self.error
                    .or(self.message)
                    .unwrap_or_else(|| "Request failed".to_string()),
            )),
        }
    }
}

/// Error body returned by failed requests. Different endpoints fill
/// different fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// First non-empty of `detail`, `message`, `error`
    pub fn best_message(&self) -> Option<&str> {
        [&self.detail, &self.message, &self.error]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .find(|text| !text.trim().is_empty())
    }
}

/// Plain `{ success, message }` acknowledgement
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Acknowledgement {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_envelope_success_yields_data() {
        let envelope: ApiEnvelope<Vec<u32>> =
            serde_json::from_value(json!({ "success": true, "data": [1, 2, 3] })).unwrap();
        assert_eq!(envelope.into_result().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_failure_prefers_error_text() {
        let envelope: ApiEnvelope<u32> = serde_json::from_value(json!({
            "success": false,
            "error": "Company profile not found",
            "message": "ignored"
        }))
        .unwrap();
        assert_eq!(
            envelope.into_result(),
            Err(SharedError::BadRequest("Company profile not found".to_string()))
        );
    }

    #[test]
    fn test_envelope_without_data_is_not_found() {
        let envelope: ApiEnvelope<u32> = serde_json::from_value(json!({
            "success": true,
            "data": null,
            "message": "No analytics data available yet"
        }))
        .unwrap();
        assert_eq!(
            envelope.into_result(),
            Err(SharedError::NotFound("No analytics data available yet".to_string()))
        );
    }

    #[test]
    fn test_error_body_message_precedence() {
        let body = ErrorBody {
            detail: Some("  ".to_string()),
            message: Some("Token is invalid".to_string()),
            error: Some("other".to_string()),
        };
        assert_eq!(body.best_message(), Some("Token is invalid"));
        assert_eq!(ErrorBody::default().best_message(), None);
    }
}

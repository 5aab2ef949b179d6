use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{ApiEnvelope, ErrorBody, RefreshRequest, RefreshResponse};

use crate::api::http::{GlooHttpClient, HttpClient, HttpRequest, HttpResponse, Method};
use crate::api::session::{BrowserStorage, Session, TokenStorage};
use crate::config::Config;

pub const REFRESH_PATH: &str = "/api/auth/token/refresh/";

const FALLBACK_ERROR: &str = "API request failed";

/// Outcome of one backend call.
///
/// `Unauthorized` means the session is gone (tokens already cleared); the
/// caller decides whether to send the user back to a login page.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Ok(T),
    Unauthorized,
    NetworkError(String),
    Rejected { status: u16, message: String },
}

impl<T> ApiResult<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ApiResult::Ok(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            ApiResult::Ok(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResult<U> {
        match self {
            ApiResult::Ok(value) => ApiResult::Ok(f(value)),
            ApiResult::Unauthorized => ApiResult::Unauthorized,
            ApiResult::NetworkError(message) => ApiResult::NetworkError(message),
            ApiResult::Rejected { status, message } => ApiResult::Rejected { status, message },
        }
    }

    /// User-facing text for anything but success
    pub fn error_message(&self) -> Option<String> {
        match self {
            ApiResult::Ok(_) => None,
            ApiResult::Unauthorized => Some("Session expired. Please log in again.".to_string()),
            ApiResult::NetworkError(message) => Some(message.clone()),
            ApiResult::Rejected { message, .. } => Some(message.clone()),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiResult::Ok(value) => Ok(value),
            other => Err(other
                .error_message()
                .unwrap_or_else(|| FALLBACK_ERROR.to_string())),
        }
    }
}

/// Client the UI talks to in the browser
pub type BrowserClient = ApiClient<GlooHttpClient, BrowserStorage>;

/// Sends JSON requests to the backend with the session's bearer token.
///
/// A 401 on an authenticated request triggers a single token refresh and a
/// single retry. When the refresh fails the session is cleared.
#[derive(Debug, Clone)]
pub struct ApiClient<H: HttpClient, S: TokenStorage> {
    http: H,
    session: Session<S>,
    base_url: String,
}

impl BrowserClient {
    pub fn browser() -> Self {
        ApiClient::new(GlooHttpClient, Session::new(BrowserStorage), Config::api_base_url())
    }
}

impl<H: HttpClient, S: TokenStorage> ApiClient<H, S> {
    pub fn new(http: H, session: Session<S>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            session,
            base_url: base_url.into(),
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        match encode(body) {
            Ok(body) => self.execute(Method::Post, path, Some(body)).await,
            Err(e) => ApiResult::NetworkError(e),
        }
    }

    /// POST without a request body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(Method::Post, path, None).await
    }

    /// GET on an endpoint that wraps its payload in `{ success, data }`
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        unwrap_envelope(self.get::<ApiEnvelope<T>>(path).await)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> ApiResult<T> {
        let url = self.url(path);
        let token = self.session.access_token();
        debug!("{} {}", method.as_str(), url);

        let response = match self.send(method, &url, token.clone(), body.clone()).await {
            Ok(response) => response,
            Err(message) => return ApiResult::NetworkError(message),
        };

        // Anonymous 401s (bad credentials) are ordinary rejections
        if response.status != 401 || token.is_none() {
            return decode(response);
        }

        if !self.refresh_access_token().await {
            self.session.clear();
            return ApiResult::Unauthorized;
        }

        debug!("Retrying {} {} with refreshed token", method.as_str(), url);
        let retried = match self
            .send(method, &url, self.session.access_token(), body)
            .await
        {
            Ok(response) => response,
            Err(message) => return ApiResult::NetworkError(message),
        };

        if retried.status == 401 {
            warn!("Request still unauthorized after token refresh: {}", url);
            self.session.clear();
            return ApiResult::Unauthorized;
        }
        decode(retried)
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        bearer: Option<String>,
        body: Option<String>,
    ) -> Result<HttpResponse, String> {
        self.http
            .send(HttpRequest {
                method,
                url: url.to_string(),
                bearer,
                body,
            })
            .await
            .map_err(|e| e.to_string())
    }

    /// Exchanges the refresh token for a new access token
    pub async fn refresh_access_token(&self) -> bool {
        let Some(refresh) = self.session.refresh_token() else {
            debug!("No refresh token available");
            return false;
        };

        let body = match encode(&RefreshRequest { refresh }) {
            Ok(body) => body,
            Err(e) => {
                warn!("Token refresh failed: {}", e);
                return false;
            }
        };

        let response = match self
            .send(Method::Post, &self.url(REFRESH_PATH), None, Some(body))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Token refresh failed: {}", e);
                return false;
            }
        };

        if !response.ok() {
            warn!("Token refresh rejected with status {}", response.status);
            return false;
        }

        match serde_json::from_str::<RefreshResponse>(&response.body) {
            Ok(refreshed) if !refreshed.access.is_empty() => {
                self.session.set_access_token(&refreshed.access);
                debug!("Access token refreshed");
                true
            }
            Ok(_) => {
                warn!("Token refresh returned an empty access token");
                false
            }
            Err(e) => {
                warn!("Token refresh returned an unreadable body: {}", e);
                false
            }
        }
    }
}

/// Opens a `{ success, data, error }` envelope. A failed envelope inside a
/// 2xx response is a rejection with that status.
pub fn unwrap_envelope<T>(result: ApiResult<ApiEnvelope<T>>) -> ApiResult<T> {
    match result {
        ApiResult::Ok(envelope) => match envelope.into_result() {
            Ok(data) => ApiResult::Ok(data),
            Err(e) => ApiResult::Rejected {
                status: 200,
                message: e.message().to_string(),
            },
        },
        ApiResult::Unauthorized => ApiResult::Unauthorized,
        ApiResult::NetworkError(message) => ApiResult::NetworkError(message),
        ApiResult::Rejected { status, message } => ApiResult::Rejected { status, message },
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, String> {
    serde_json::to_string(body).map_err(|e| format!("Failed to serialize request: {}", e))
}

/// Non-2xx becomes `Rejected` with the best message in the error body
fn decode<T: DeserializeOwned>(response: HttpResponse) -> ApiResult<T> {
    if !response.ok() {
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.best_message().map(str::to_string))
            .unwrap_or_else(|| FALLBACK_ERROR.to_string());
        return ApiResult::Rejected {
            status: response.status,
            message,
        };
    }

    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };
    match serde_json::from_str(body) {
        Ok(value) => ApiResult::Ok(value),
        Err(e) => ApiResult::NetworkError(format!("Invalid response: {}", e)),
    }
}

use log::{debug, warn};
use shared::{
    Acknowledgement, CompanyRegisterRequest, InfluencerRegisterRequest, LoginRequest,
    LogoutRequest, TokenResponse, User, UserType,
};

use crate::api::client::{ApiClient, ApiResult};
use crate::api::http::HttpClient;
use crate::api::session::TokenStorage;

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const REGISTER_PATH: &str = "/api/auth/register/";
pub const INFLUENCER_LOGIN_PATH: &str = "/api/influencer/login/";
pub const INFLUENCER_REGISTER_PATH: &str = "/api/influencer/register/";
pub const LOGOUT_PATH: &str = "/api/auth/logout/";
pub const USER_PROFILE_PATH: &str = "/api/auth/user/";

impl<H: HttpClient, S: TokenStorage> ApiClient<H, S> {
    /// Company login. Stores the token pair and the returned user.
    pub async fn login(&self, email: &str, password: &str, user_type: UserType) -> ApiResult<TokenResponse> {
        debug!("Attempting login for user: {}", email);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            user_type,
        };
        let result = self.post(LOGIN_PATH, &request).await;
        self.start_session(result)
    }

    pub async fn login_influencer(&self, email: &str, password: &str) -> ApiResult<TokenResponse> {
        debug!("Attempting influencer login for user: {}", email);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            user_type: UserType::Influencer,
        };
        let result = self.post(INFLUENCER_LOGIN_PATH, &request).await;
        self.start_session(result)
    }

    pub async fn register_company(&self, request: &CompanyRegisterRequest) -> ApiResult<Acknowledgement> {
        debug!("Registering company account: {}", request.email);
        self.post(REGISTER_PATH, request).await
    }

    /// Influencer registration signs the new account in straight away
    pub async fn register_influencer(&self, request: &InfluencerRegisterRequest) -> ApiResult<TokenResponse> {
        debug!("Registering influencer account: {}", request.email);
        let result = self.post(INFLUENCER_REGISTER_PATH, request).await;
        self.start_session(result)
    }

    fn start_session(&self, result: ApiResult<TokenResponse>) -> ApiResult<TokenResponse> {
        let response = match result {
            ApiResult::Ok(response) => response,
            other => return other,
        };

        let refresh = match response.refresh.as_deref() {
            Some(refresh) if !response.access.is_empty() && !refresh.is_empty() => refresh,
            _ => return ApiResult::NetworkError("Invalid response format".to_string()),
        };

        self.session().set_tokens(&response.access, refresh);
        if let Some(user) = &response.user {
            self.session().store_user(user);
        }
        debug!("Login successful");
        ApiResult::Ok(response)
    }

    /// Blacklists the refresh token when there is one. Local tokens are
    /// cleared whatever the server says.
    pub async fn logout(&self) {
        if let Some(refresh) = self.session().refresh_token() {
            let result: ApiResult<serde_json::Value> =
                self.post(LOGOUT_PATH, &LogoutRequest { refresh }).await;
            if let Some(message) = result.error_message() {
                warn!("Logout API call failed: {}", message);
            }
        }
        self.session().clear();
        debug!("Logout complete");
    }

    /// Fetches the signed-in user and refreshes the cached copy
    pub async fn user_profile(&self) -> ApiResult<User> {
        let result: ApiResult<User> = self.get(USER_PROFILE_PATH).await;
        if let ApiResult::Ok(user) = &result {
            self.session().store_user(user);
        }
        result
    }
}

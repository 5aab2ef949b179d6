use shared::{AudienceDto, OverviewDto, TrafficDto};

use crate::api::client::{ApiClient, ApiResult};
use crate::api::http::HttpClient;
use crate::api::session::TokenStorage;

pub const OVERVIEW_PATH: &str = "/api/company/dashboard/overview/";
pub const AUDIENCE_PATH: &str = "/api/company/dashboard/audience/";
pub const TRAFFIC_PATH: &str = "/api/company/dashboard/traffic/";

impl<H: HttpClient, S: TokenStorage> ApiClient<H, S> {
    pub async fn overview(&self) -> ApiResult<OverviewDto> {
        self.get_data(OVERVIEW_PATH).await
    }

    pub async fn audience(&self) -> ApiResult<AudienceDto> {
        self.get_data(AUDIENCE_PATH).await
    }

    pub async fn traffic(&self) -> ApiResult<TrafficDto> {
        self.get_data(TRAFFIC_PATH).await
    }
}

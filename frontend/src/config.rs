const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

pub struct Config;

impl Config {
    /// Backend origin, baked in at build time through `API_BASE_URL`.
    /// Falls back to the local development server.
    pub fn api_base_url() -> String {
        Self::resolve_base_url(option_env!("API_BASE_URL"))
    }

    fn resolve_base_url(configured: Option<&str>) -> String {
        configured
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string()
    }

    pub fn log_level() -> log::Level {
        if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}

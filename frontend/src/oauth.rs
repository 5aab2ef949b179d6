use shared::Platform;

/// Result of a provider consent flow, reported by the backend through the
/// query string it redirects back to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OAuthCallback {
    Connected(Platform),
    Failed(String),
}

impl OAuthCallback {
    /// Reads `?ga4_connected=true`, `?youtube_connected=true`,
    /// `?instagram_connected=true` or `?error=...`. Anything else is not a
    /// callback. An error wins over a success flag.
    pub fn from_query(query: &str) -> Option<Self> {
        let mut connected = None;
        for (key, value) in query_pairs(query) {
            match key.as_str() {
                "error" if !value.is_empty() => return Some(OAuthCallback::Failed(value)),
                "ga4_connected" if value == "true" => connected = Some(Platform::Ga4),
                "youtube_connected" if value == "true" => connected = Some(Platform::Youtube),
                "instagram_connected" if value == "true" => connected = Some(Platform::Instagram),
                _ => {}
            }
        }
        connected.map(OAuthCallback::Connected)
    }

    pub fn message(&self) -> String {
        match self {
            OAuthCallback::Connected(platform) => {
                format!("{} successfully connected!", platform.display_name())
            }
            OAuthCallback::Failed(_) => "Authentication failed. Please try again.".to_string(),
        }
    }
}

fn query_pairs(query: &str) -> impl Iterator<Item = (String, String)> + '_ {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(raw)
}

/// Current `location.search`, empty outside a browser
pub fn current_query() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

/// Drops the callback parameters so a reload does not replay the toast
pub fn clear_query() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    if let Ok(history) = window.history() {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path)) {
            log::warn!("Failed to clear callback query: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_connected_flags() {
        assert_eq!(
            OAuthCallback::from_query("?ga4_connected=true"),
            Some(OAuthCallback::Connected(Platform::Ga4))
        );
        assert_eq!(
            OAuthCallback::from_query("youtube_connected=true"),
            Some(OAuthCallback::Connected(Platform::Youtube))
        );
        assert_eq!(
            OAuthCallback::from_query("?tab=connections&instagram_connected=true"),
            Some(OAuthCallback::Connected(Platform::Instagram))
        );
    }

    #[test]
    fn test_error_is_decoded() {
        assert_eq!(
            OAuthCallback::from_query("?error=access%20denied"),
            Some(OAuthCallback::Failed("access denied".to_string()))
        );
        assert_eq!(
            OAuthCallback::from_query("?ga4_connected=true&error=invalid_grant"),
            Some(OAuthCallback::Failed("invalid_grant".to_string()))
        );
    }

    #[test]
    fn test_not_a_callback() {
        assert_eq!(OAuthCallback::from_query(""), None);
        assert_eq!(OAuthCallback::from_query("?ga4_connected=false"), None);
        assert_eq!(OAuthCallback::from_query("?error="), None);
        assert_eq!(OAuthCallback::from_query("?tab=reports"), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            OAuthCallback::Connected(Platform::Ga4).message(),
            format!("{} successfully connected!", Platform::Ga4.display_name())
        );
        assert_eq!(
            OAuthCallback::Failed("x".to_string()).message(),
            "Authentication failed. Please try again."
        );
    }
}

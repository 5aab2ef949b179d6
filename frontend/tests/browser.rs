//! Runs in a headless browser: `wasm-pack test --headless --firefox frontend`
#![cfg(target_arch = "wasm32")]

use infofluencer_frontend::api::{BrowserStorage, Session, TokenStorage};
use infofluencer_frontend::oauth::{current_query, OAuthCallback};
use shared::{User, UserType};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_session_survives_in_local_storage() {
    let session = Session::new(BrowserStorage);
    session.set_tokens("access-1", "refresh-1");
    session.store_user(&User {
        email: "ops@acme.io".to_string(),
        user_type: UserType::Company,
        ..Default::default()
    });

    let reopened = Session::new(BrowserStorage);
    assert!(reopened.is_authenticated());
    assert_eq!(reopened.refresh_token().as_deref(), Some("refresh-1"));
    assert_eq!(reopened.current_user().map(|user| user.email).as_deref(), Some("ops@acme.io"));

    reopened.clear();
    assert_eq!(BrowserStorage.get("access_token"), None);
    assert!(!session.is_authenticated());
}

#[wasm_bindgen_test]
fn test_page_is_not_a_provider_callback() {
    assert_eq!(OAuthCallback::from_query(&current_query()), None);
}

use gloo_storage::{LocalStorage, Storage};
use log::{error, warn};
use shared::User;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_DATA_KEY: &str = "user_data";

/// String key/value store holding the session between page loads
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl TokenStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get::<String>(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::set(key, value) {
            error!("Failed to store {} in local storage: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// In-process storage; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Tokens and cached user of the signed-in account.
///
/// Every read goes to the storage, so two sessions over the same storage
/// always agree.
#[derive(Debug, Clone, Default)]
pub struct Session<S: TokenStorage> {
    storage: S,
}

impl<S: TokenStorage> Session<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage.get(key).filter(|value| !value.is_empty())
    }

    pub fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    pub fn set_tokens(&self, access: &str, refresh: &str) {
        self.storage.set(ACCESS_TOKEN_KEY, access);
        self.storage.set(REFRESH_TOKEN_KEY, refresh);
    }

    pub fn set_access_token(&self, access: &str) {
        self.storage.set(ACCESS_TOKEN_KEY, access);
    }

    pub fn store_user(&self, user: &User) {
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set(USER_DATA_KEY, &json),
            Err(e) => error!("Failed to serialize user data: {}", e),
        }
    }

    /// The cached user; unreadable data counts as no user
    pub fn current_user(&self) -> Option<User> {
        let json = self.read(USER_DATA_KEY)?;
        match serde_json::from_str(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Ignoring unreadable user data: {}", e);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn clear(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.storage.remove(USER_DATA_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared::UserType;

    fn session() -> Session<MemoryStorage> {
        Session::new(MemoryStorage::new())
    }

    #[test]
    fn test_new_session_is_anonymous() {
        let session = session();
        assert!(!session.is_authenticated());
        assert_eq!(session.access_token(), None);
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_set_tokens_authenticates() {
        let session = session();
        session.set_tokens("access-1", "refresh-1");
        assert!(session.is_authenticated());
        assert_eq!(session.refresh_token().as_deref(), Some("refresh-1"));

        session.set_access_token("access-2");
        assert_eq!(session.access_token().as_deref(), Some("access-2"));
        assert_eq!(session.refresh_token().as_deref(), Some("refresh-1"));
    }

    #[test]
    fn test_empty_token_is_not_a_session() {
        let session = session();
        session.set_access_token("");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_user_round_trips_through_storage() {
        let session = session();
        let user = User {
            email: "ops@acme.io".to_string(),
            company: Some("Acme".to_string()),
            user_type: UserType::Company,
            ..Default::default()
        };
        session.store_user(&user);
        assert_eq!(session.current_user(), Some(user));
    }

    #[test]
    fn test_corrupt_user_data_is_ignored() {
        let session = session();
        session.storage().set(USER_DATA_KEY, "{not json");
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_clear_removes_every_key() {
        let storage = MemoryStorage::new();
        let session = Session::new(storage.clone());
        session.set_tokens("a", "r");
        session.storage().set(USER_DATA_KEY, "{}");
        assert_eq!(storage.len(), 3);

        session.clear();
        assert!(storage.is_empty());
        assert!(!session.is_authenticated());
    }
}

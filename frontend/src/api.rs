// Backend access: transport, session storage and one module per endpoint group
pub mod auth;
pub mod client;
pub mod connections;
pub mod dashboard;
pub mod http;
pub mod reports;
pub mod session;
pub mod settings;

pub use client::{ApiClient, ApiResult, BrowserClient};
pub use session::{BrowserStorage, MemoryStorage, Session, TokenStorage};

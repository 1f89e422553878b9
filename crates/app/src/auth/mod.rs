//! Session management against the hosted auth provider.

mod errors;
mod models;
mod rest;
mod service;

pub use errors::AuthError;
pub use models::Session;
pub use rest::RestAuthClient;
pub use service::{AuthClient, MockAuthClient, SessionManager};

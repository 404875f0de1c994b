//! Auth module - email/password login, signup, and the session
//! marker.

mod auth_errors;
mod auth_model;
mod auth_service;
mod auth_traits;

pub use auth_errors::AuthError;
pub use auth_model::Credentials;
pub use auth_service::AuthService;
pub use auth_traits::{AuthServiceTrait, SessionRepositoryTrait};

use thiserror::Error;

/// Errors raised by the authentication flow. Both are recovered
/// locally and rendered as inline messages; there is no lockout or
/// retry policy.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("An account with email '{0}' already exists")]
    DuplicateIdentity(String),
}

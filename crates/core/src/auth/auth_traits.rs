use crate::auth::auth_model::Credentials;
use crate::errors::Result;
use crate::users::{NewUser, User};

/// Trait for the ephemeral session marker. The marker holds the
/// stripped identity of the authenticated user and dies with the
/// session.
pub trait SessionRepositoryTrait: Send + Sync {
    fn get_session(&self) -> Result<Option<User>>;
    fn set_session(&self, user: &User) -> Result<()>;
    fn clear_session(&self) -> Result<()>;
}

/// Trait for authentication operations.
pub trait AuthServiceTrait: Send + Sync {
    /// Authenticates against the user directory. The returned identity
    /// has its password stripped and is written to the session marker.
    fn login(&self, credentials: &Credentials) -> Result<User>;
    /// Creates a USER-role identity and logs it in immediately.
    fn signup(&self, new_user: NewUser) -> Result<User>;
    /// Clears the session marker. Persisted data is untouched.
    fn logout(&self) -> Result<()>;
    fn current_user(&self) -> Result<Option<User>>;
}

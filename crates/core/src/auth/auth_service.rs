use std::sync::Arc;

use log::{debug, info};
use uuid::Uuid;

use crate::auth::auth_errors::AuthError;
use crate::auth::auth_model::Credentials;
use crate::auth::auth_traits::{AuthServiceTrait, SessionRepositoryTrait};
use crate::constants::{
    MASTER_EMAIL, MASTER_PASSWORD, MASTER_USER_ID, MASTER_USER_NAME, MIN_PASSWORD_LENGTH,
};
use crate::errors::{Result, ValidationError};
use crate::users::{NewUser, Role, User, UserRepositoryTrait};

pub struct AuthService {
    users: Arc<dyn UserRepositoryTrait>,
    sessions: Arc<dyn SessionRepositoryTrait>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepositoryTrait>,
        sessions: Arc<dyn SessionRepositoryTrait>,
    ) -> Self {
        AuthService { users, sessions }
    }

    fn master_user() -> User {
        User {
            id: MASTER_USER_ID.to_string(),
            name: MASTER_USER_NAME.to_string(),
            email: Some(MASTER_EMAIL.to_string()),
            password: Some(MASTER_PASSWORD.to_string()),
            role: Role::Admin,
        }
    }

    fn open_session(&self, user: &User) -> Result<User> {
        let safe = user.stripped();
        self.sessions.set_session(&safe)?;
        Ok(safe)
    }
}

impl AuthServiceTrait for AuthService {
    fn login(&self, credentials: &Credentials) -> Result<User> {
        // The master credential bypasses the directory entirely and is
        // inserted into it on first use.
        if credentials.email == MASTER_EMAIL && credentials.password == MASTER_PASSWORD {
            if self.users.find_by_id(MASTER_USER_ID)?.is_none() {
                self.users.insert_user(Self::master_user())?;
                info!("Master identity inserted into the user directory");
            }
            return self.open_session(&Self::master_user());
        }

        match self.users.find_by_email(&credentials.email)? {
            Some(user) if user.password.as_deref() == Some(credentials.password.as_str()) => {
                info!("User {} logged in", user.id);
                self.open_session(&user)
            }
            _ => {
                debug!("Login rejected for {}", credentials.email);
                Err(AuthError::InvalidCredentials.into())
            }
        }
    }

    fn signup(&self, new_user: NewUser) -> Result<User> {
        if new_user.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if new_user.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email".to_string()).into());
        }
        if new_user.password.len() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH).into());
        }
        if self.users.find_by_email(&new_user.email)?.is_some() {
            return Err(AuthError::DuplicateIdentity(new_user.email).into());
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: new_user.name,
            email: Some(new_user.email),
            password: Some(new_user.password),
            role: Role::User,
        };
        let user = self.users.insert_user(user)?;
        info!("User {} signed up", user.id);
        self.open_session(&user)
    }

    fn logout(&self) -> Result<()> {
        self.sessions.clear_session()
    }

    fn current_user(&self) -> Result<Option<User>> {
        self.sessions.get_session()
    }
}

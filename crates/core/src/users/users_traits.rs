use crate::errors::Result;
use crate::users::users_model::User;

/// Trait for user directory repository operations.
pub trait UserRepositoryTrait: Send + Sync {
    fn list_users(&self) -> Result<Vec<User>>;
    fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    fn insert_user(&self, user: User) -> Result<User>;
    fn update_user(&self, user: User) -> Result<User>;
    fn delete_user(&self, user_id: &str) -> Result<()>;
}

/// Trait for user service operations.
pub trait UserServiceTrait: Send + Sync {
    /// Directory listing for the admin panel. Entries are returned as
    /// stored, passwords included; the panel renders them behind a
    /// reveal toggle.
    fn list_users(&self) -> Result<Vec<User>>;
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn change_password(
        &self,
        user_id: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<()>;
    /// Deletes a directory entry together with its financial record.
    /// Returns `false` when the confirmation prompt was declined.
    fn delete_user(&self, user_id: &str) -> Result<bool>;
}

/// Collaborator used to confirm destructive admin actions.
pub trait ConfirmationTrait: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

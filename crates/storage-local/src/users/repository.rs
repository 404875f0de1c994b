use std::sync::Arc;

use financa_core::errors::{Error, Result, StoreError};
use financa_core::users::{User, UserError, UserRepositoryTrait};

use crate::store::KvStore;

/// Key holding the whole user directory as one JSON array.
pub const USERS_KEY: &str = "fs_registered_users";

pub struct UserRepository {
    store: Arc<dyn KvStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        UserRepository { store }
    }

    fn load_all(&self) -> Result<Vec<User>> {
        match self.store.get(USERS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| Error::Store(StoreError::Corrupted(e.to_string()))),
            None => Ok(Vec::new()),
        }
    }

    fn persist_all(&self, users: &[User]) -> Result<()> {
        let raw = serde_json::to_string(users)
            .map_err(|e| Error::Store(StoreError::WriteFailed(e.to_string())))?;
        self.store.set(USERS_KEY, &raw)
    }
}

impl UserRepositoryTrait for UserRepository {
    fn list_users(&self) -> Result<Vec<User>> {
        self.load_all()
    }

    fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.load_all()?.into_iter().find(|u| u.id == user_id))
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|u| u.email.as_deref() == Some(email)))
    }

    fn insert_user(&self, user: User) -> Result<User> {
        let mut users = self.load_all()?;
        users.push(user.clone());
        self.persist_all(&users)?;
        Ok(user)
    }

    fn update_user(&self, user: User) -> Result<User> {
        let mut users = self.load_all()?;
        let existing = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or_else(|| Error::from(UserError::NotFound(user.id.clone())))?;
        *existing = user.clone();
        self.persist_all(&users)?;
        Ok(user)
    }

    fn delete_user(&self, user_id: &str) -> Result<()> {
        let mut users = self.load_all()?;
        users.retain(|u| u.id != user_id);
        self.persist_all(&users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use financa_core::users::Role;

    fn repository() -> UserRepository {
        UserRepository::new(Arc::new(MemoryStore::new()))
    }

    fn user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            name: "Matheus".to_string(),
            email: Some(email.to_string()),
            password: Some("123456".to_string()),
            role: Role::User,
        }
    }

    #[test]
    fn empty_store_means_empty_directory() {
        assert!(repository().list_users().unwrap().is_empty());
    }

    #[test]
    fn insert_find_update_delete() {
        let repo = repository();
        repo.insert_user(user("u1", "m@example.com")).unwrap();
        repo.insert_user(user("u2", "g@example.com")).unwrap();

        assert_eq!(repo.list_users().unwrap().len(), 2);
        assert!(repo.find_by_id("u1").unwrap().is_some());
        assert_eq!(
            repo.find_by_email("g@example.com").unwrap().unwrap().id,
            "u2"
        );
        assert!(repo.find_by_email("x@example.com").unwrap().is_none());

        let mut changed = user("u1", "m@example.com");
        changed.password = Some("nova1234".to_string());
        repo.update_user(changed).unwrap();
        assert_eq!(
            repo.find_by_id("u1").unwrap().unwrap().password.as_deref(),
            Some("nova1234")
        );

        repo.delete_user("u1").unwrap();
        assert!(repo.find_by_id("u1").unwrap().is_none());
        assert_eq!(repo.list_users().unwrap().len(), 1);
    }

    #[test]
    fn update_of_unknown_user_fails() {
        let repo = repository();
        let err = repo.update_user(user("ghost", "g@example.com")).unwrap_err();
        assert!(matches!(err, Error::User(UserError::NotFound(_))));
    }

    #[test]
    fn corrupted_directory_surfaces_as_store_error() {
        let store = Arc::new(MemoryStore::new());
        store.set(USERS_KEY, "{{{").unwrap();
        let repo = UserRepository::new(store);
        let err = repo.list_users().unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::Corrupted(_))));
    }
}

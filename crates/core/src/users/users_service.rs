use std::sync::Arc;

use log::{info, warn};

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::errors::{Result, ValidationError};
use crate::ledger::LedgerRepositoryTrait;
use crate::users::users_errors::UserError;
use crate::users::users_model::User;
use crate::users::users_traits::{ConfirmationTrait, UserRepositoryTrait, UserServiceTrait};

pub struct UserService {
    users: Arc<dyn UserRepositoryTrait>,
    ledgers: Arc<dyn LedgerRepositoryTrait>,
    confirmation: Arc<dyn ConfirmationTrait>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepositoryTrait>,
        ledgers: Arc<dyn LedgerRepositoryTrait>,
        confirmation: Arc<dyn ConfirmationTrait>,
    ) -> Self {
        UserService {
            users,
            ledgers,
            confirmation,
        }
    }
}

impl UserServiceTrait for UserService {
    fn list_users(&self) -> Result<Vec<User>> {
        self.users.list_users()
    }

    fn get_user(&self, user_id: &str) -> Result<User> {
        self.users
            .find_by_id(user_id)?
            .ok_or_else(|| UserError::NotFound(user_id.to_string()).into())
    }

    fn change_password(
        &self,
        user_id: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<()> {
        if new_password.len() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH).into());
        }
        if new_password != confirm_password {
            return Err(ValidationError::PasswordMismatch.into());
        }

        let mut user = self.get_user(user_id)?;
        user.password = Some(new_password.to_string());
        self.users.update_user(user)?;
        info!("Password updated for user {}", user_id);
        Ok(())
    }

    fn delete_user(&self, user_id: &str) -> Result<bool> {
        let message =
            "Tem certeza que deseja excluir este usuário? Todos os dados financeiros serão perdidos.";
        if !self.confirmation.confirm(message) {
            warn!("Deletion of user {} declined at the prompt", user_id);
            return Ok(false);
        }

        self.users.delete_user(user_id)?;
        self.ledgers.delete(user_id)?;
        info!("Deleted user {} and its financial record", user_id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::ledger::FinancialData;
    use crate::users::Role;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl MockUserRepository {
        fn with_users(users: Vec<User>) -> Self {
            MockUserRepository {
                users: Mutex::new(users),
            }
        }
    }

    impl UserRepositoryTrait for MockUserRepository {
        fn list_users(&self) -> Result<Vec<User>> {
            Ok(self.users.lock().unwrap().clone())
        }

        fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == user_id)
                .cloned())
        }

        fn find_by_email(&self, email: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email.as_deref() == Some(email))
                .cloned())
        }

        fn insert_user(&self, user: User) -> Result<User> {
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }

        fn update_user(&self, user: User) -> Result<User> {
            let mut users = self.users.lock().unwrap();
            let existing = users
                .iter_mut()
                .find(|u| u.id == user.id)
                .ok_or_else(|| Error::from(UserError::NotFound(user.id.clone())))?;
            *existing = user.clone();
            Ok(user)
        }

        fn delete_user(&self, user_id: &str) -> Result<()> {
            self.users.lock().unwrap().retain(|u| u.id != user_id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockLedgerRepository {
        records: Mutex<HashMap<String, FinancialData>>,
    }

    impl LedgerRepositoryTrait for MockLedgerRepository {
        fn load(&self, user_id: &str) -> Result<Option<FinancialData>> {
            Ok(self.records.lock().unwrap().get(user_id).cloned())
        }

        fn save(&self, user_id: &str, data: &FinancialData) -> Result<()> {
            self.records
                .lock()
                .unwrap()
                .insert(user_id.to_string(), data.clone());
            Ok(())
        }

        fn delete(&self, user_id: &str) -> Result<()> {
            self.records.lock().unwrap().remove(user_id);
            Ok(())
        }
    }

    struct FixedConfirmation(bool);

    impl ConfirmationTrait for FixedConfirmation {
        fn confirm(&self, _message: &str) -> bool {
            self.0
        }
    }

    fn sample_user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: "Gabriel".to_string(),
            email: Some(format!("{id}@example.com")),
            password: Some("123456".to_string()),
            role: Role::User,
        }
    }

    fn service(
        users: Vec<User>,
        confirm: bool,
    ) -> (UserService, Arc<MockUserRepository>, Arc<MockLedgerRepository>) {
        let user_repo = Arc::new(MockUserRepository::with_users(users));
        let ledger_repo = Arc::new(MockLedgerRepository::default());
        let svc = UserService::new(
            user_repo.clone(),
            ledger_repo.clone(),
            Arc::new(FixedConfirmation(confirm)),
        );
        (svc, user_repo, ledger_repo)
    }

    #[test]
    fn change_password_updates_the_directory_entry() {
        let (svc, repo, _) = service(vec![sample_user("u1")], true);
        svc.change_password("u1", "nova1234", "nova1234").unwrap();
        let stored = repo.find_by_id("u1").unwrap().unwrap();
        assert_eq!(stored.password.as_deref(), Some("nova1234"));
    }

    #[test]
    fn change_password_rejects_short_passwords() {
        let (svc, repo, _) = service(vec![sample_user("u1")], true);
        let err = svc.change_password("u1", "abc", "abc").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::PasswordTooShort(_))
        ));
        let stored = repo.find_by_id("u1").unwrap().unwrap();
        assert_eq!(stored.password.as_deref(), Some("123456"));
    }

    #[test]
    fn change_password_rejects_mismatched_confirmation() {
        let (svc, _, _) = service(vec![sample_user("u1")], true);
        let err = svc.change_password("u1", "nova1234", "outra999").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::PasswordMismatch)
        ));
    }

    #[test]
    fn delete_user_removes_directory_entry_and_financial_record() {
        let (svc, user_repo, ledger_repo) = service(vec![sample_user("u1")], true);
        ledger_repo.save("u1", &FinancialData::default()).unwrap();

        assert!(svc.delete_user("u1").unwrap());
        assert!(user_repo.find_by_id("u1").unwrap().is_none());
        assert!(ledger_repo.load("u1").unwrap().is_none());
    }

    #[test]
    fn declined_confirmation_leaves_everything_intact() {
        let (svc, user_repo, ledger_repo) = service(vec![sample_user("u1")], false);
        ledger_repo.save("u1", &FinancialData::default()).unwrap();

        assert!(!svc.delete_user("u1").unwrap());
        assert!(user_repo.find_by_id("u1").unwrap().is_some());
        assert!(ledger_repo.load("u1").unwrap().is_some());
    }

    #[test]
    fn get_user_surfaces_not_found() {
        let (svc, _, _) = service(vec![], true);
        let err = svc.get_user("ghost").unwrap_err();
        assert!(matches!(err, Error::User(UserError::NotFound(_))));
    }
}

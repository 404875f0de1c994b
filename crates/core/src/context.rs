//! Service wiring. The context is the single application-state
//! container: it owns every service as a trait object and starts out
//! anonymous (no session).

use std::sync::Arc;

use crate::auth::{AuthService, AuthServiceTrait, SessionRepositoryTrait};
use crate::dashboard::{DashboardService, DashboardServiceTrait};
use crate::ledger::{LedgerRepositoryTrait, LedgerService, LedgerServiceTrait};
use crate::users::{ConfirmationTrait, UserRepositoryTrait, UserService, UserServiceTrait};

pub struct ServiceContext {
    pub auth_service: Arc<dyn AuthServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub ledger_service: Arc<dyn LedgerServiceTrait>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
}

impl ServiceContext {
    pub fn new(
        users: Arc<dyn UserRepositoryTrait>,
        ledgers: Arc<dyn LedgerRepositoryTrait>,
        sessions: Arc<dyn SessionRepositoryTrait>,
        confirmation: Arc<dyn ConfirmationTrait>,
    ) -> Self {
        ServiceContext {
            auth_service: Arc::new(AuthService::new(users.clone(), sessions)),
            user_service: Arc::new(UserService::new(users, ledgers.clone(), confirmation)),
            ledger_service: Arc::new(LedgerService::new(ledgers)),
            dashboard_service: Arc::new(DashboardService::new()),
        }
    }

    pub fn auth_service(&self) -> Arc<dyn AuthServiceTrait> {
        Arc::clone(&self.auth_service)
    }

    pub fn user_service(&self) -> Arc<dyn UserServiceTrait> {
        Arc::clone(&self.user_service)
    }

    pub fn ledger_service(&self) -> Arc<dyn LedgerServiceTrait> {
        Arc::clone(&self.ledger_service)
    }

    pub fn dashboard_service(&self) -> Arc<dyn DashboardServiceTrait> {
        Arc::clone(&self.dashboard_service)
    }
}

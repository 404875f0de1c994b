//! Ledger module - the per-user financial record (transactions,
//! budgets, reminders) and every mutation on it.

mod ledger_model;
mod ledger_service;
mod ledger_traits;

pub use ledger_model::{
    BudgetGoal, FinancialData, FinancialReminder, NewReminder, NewTransaction, Transaction,
    TransactionType,
};
pub use ledger_service::LedgerService;
pub use ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};

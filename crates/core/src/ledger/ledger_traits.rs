use crate::errors::Result;
use crate::ledger::ledger_model::{
    FinancialData, FinancialReminder, NewReminder, NewTransaction, Transaction,
};

/// Trait for financial record repository operations. One blob per
/// user; reads and writes are wholesale.
pub trait LedgerRepositoryTrait: Send + Sync {
    fn load(&self, user_id: &str) -> Result<Option<FinancialData>>;
    fn save(&self, user_id: &str, data: &FinancialData) -> Result<()>;
    fn delete(&self, user_id: &str) -> Result<()>;
}

/// Trait for ledger service operations. All mutation of the financial
/// record goes through this service, which owns the budget `spent`
/// bookkeeping.
pub trait LedgerServiceTrait: Send + Sync {
    fn get_data(&self, user_id: &str) -> Result<FinancialData>;
    fn add_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;
    fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<()>;
    fn add_reminder(&self, user_id: &str, new_reminder: NewReminder) -> Result<FinancialReminder>;
    fn delete_reminder(&self, user_id: &str, reminder_id: &str) -> Result<()>;
}

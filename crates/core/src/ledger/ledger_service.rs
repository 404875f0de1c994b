use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::errors::{Result, ValidationError};
use crate::ledger::ledger_model::{
    FinancialData, FinancialReminder, NewReminder, NewTransaction, Transaction, TransactionType,
};
use crate::ledger::ledger_traits::{LedgerRepositoryTrait, LedgerServiceTrait};

pub struct LedgerService {
    ledgers: Arc<dyn LedgerRepositoryTrait>,
}

impl LedgerService {
    pub fn new(ledgers: Arc<dyn LedgerRepositoryTrait>) -> Self {
        LedgerService { ledgers }
    }

    fn load_or_default(&self, user_id: &str) -> Result<FinancialData> {
        Ok(self.ledgers.load(user_id)?.unwrap_or_default())
    }
}

impl LedgerServiceTrait for LedgerService {
    fn get_data(&self, user_id: &str) -> Result<FinancialData> {
        let mut data = self.load_or_default(user_id)?;
        // Heals records edited outside the service; a no-op otherwise.
        data.reconcile_spent();
        Ok(data)
    }

    fn add_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        if new_transaction.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description".to_string()).into());
        }
        if new_transaction.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
        }
        if new_transaction.amount.is_sign_negative() && !new_transaction.amount.is_zero() {
            return Err(ValidationError::NegativeAmount.into());
        }

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            date: new_transaction.date,
            description: new_transaction.description,
            amount: new_transaction.amount,
            category: new_transaction.category,
            kind: new_transaction.kind,
        };

        let mut data = self.load_or_default(user_id)?;
        data.transactions.insert(0, transaction.clone());
        // Newest first; the sort is stable, so same-day entries keep
        // insertion order with the latest on top.
        data.transactions.sort_by(|a, b| b.date.cmp(&a.date));

        if transaction.kind == TransactionType::Expense {
            if let Some(budget) = data
                .budgets
                .iter_mut()
                .find(|b| b.category == transaction.category)
            {
                budget.spent += transaction.amount;
            }
        }

        self.ledgers.save(user_id, &data)?;
        debug!(
            "Added {} transaction {} for user {}",
            transaction.kind.as_str(),
            transaction.id,
            user_id
        );
        Ok(transaction)
    }

    fn delete_transaction(&self, user_id: &str, transaction_id: &str) -> Result<()> {
        let mut data = self.load_or_default(user_id)?;
        let Some(position) = data
            .transactions
            .iter()
            .position(|t| t.id == transaction_id)
        else {
            // Unknown id: nothing to remove, budgets untouched.
            return Ok(());
        };

        let removed = data.transactions.remove(position);
        if removed.kind == TransactionType::Expense {
            if let Some(budget) = data
                .budgets
                .iter_mut()
                .find(|b| b.category == removed.category)
            {
                budget.spent = (budget.spent - removed.amount).max(Decimal::ZERO);
            }
        }

        self.ledgers.save(user_id, &data)?;
        debug!("Deleted transaction {} for user {}", transaction_id, user_id);
        Ok(())
    }

    fn add_reminder(&self, user_id: &str, new_reminder: NewReminder) -> Result<FinancialReminder> {
        if new_reminder.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }

        let reminder = FinancialReminder {
            id: Uuid::new_v4().to_string(),
            date: new_reminder.date,
            title: new_reminder.title,
            amount: new_reminder.amount,
            completed: false,
        };

        let mut data = self.load_or_default(user_id)?;
        data.reminders.push(reminder.clone());
        self.ledgers.save(user_id, &data)?;
        Ok(reminder)
    }

    fn delete_reminder(&self, user_id: &str, reminder_id: &str) -> Result<()> {
        let mut data = self.load_or_default(user_id)?;
        data.reminders.retain(|r| r.id != reminder_id);
        self.ledgers.save(user_id, &data)?;
        Ok(())
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sign of a transaction. Stored amounts are always non-negative; the
/// sign is carried here.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    #[serde(rename = "INCOME")]
    Income,
    #[serde(rename = "EXPENSE")]
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            other => Err(format!("unknown transaction type: {other}")),
        }
    }
}

/// A single income or expense entry. Immutable once created, except
/// for deletion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Input for creating a transaction.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Spending target for one category. `spent` accumulates the amounts
/// of matching EXPENSE transactions and never goes negative.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetGoal {
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
}

impl BudgetGoal {
    pub fn new(category: &str, limit: Decimal) -> Self {
        BudgetGoal {
            category: category.to_string(),
            limit,
            spent: Decimal::ZERO,
        }
    }
}

/// Calendar payment reminder. Independent of transactions and budgets.
/// `completed` is persisted for compatibility but nothing reads it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReminder {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub completed: bool,
}

/// Input for creating a reminder.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub date: NaiveDate,
    pub title: String,
    pub amount: Option<Decimal>,
}

/// The aggregate root: one instance per user, loaded wholesale on
/// login and persisted wholesale after every mutation. Transactions
/// are kept ordered newest-first by date.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<BudgetGoal>,
    #[serde(default)]
    pub reminders: Vec<FinancialReminder>,
}

impl Default for FinancialData {
    fn default() -> Self {
        FinancialData {
            transactions: Vec::new(),
            budgets: vec![
                BudgetGoal::new("Alimentação", Decimal::from(1000)),
                BudgetGoal::new("Moradia", Decimal::from(2000)),
                BudgetGoal::new("Lazer", Decimal::from(500)),
            ],
            reminders: Vec::new(),
        }
    }
}

impl FinancialData {
    /// Rebuilds every budget's `spent` from the transaction list.
    ///
    /// All mutation goes through the ledger service, which keeps the
    /// counters in step incrementally; this rebuild heals records that
    /// were edited outside the application.
    pub fn reconcile_spent(&mut self) {
        for budget in &mut self.budgets {
            budget.spent = self
                .transactions
                .iter()
                .filter(|t| t.kind == TransactionType::Expense && t.category == budget.category)
                .map(|t| t.amount)
                .sum();
        }
    }

    /// True when every budget's `spent` matches the transaction list.
    pub fn spent_is_consistent(&self) -> bool {
        self.budgets.iter().all(|budget| {
            let actual: Decimal = self
                .transactions
                .iter()
                .filter(|t| t.kind == TransactionType::Expense && t.category == budget.category)
                .map(|t| t.amount)
                .sum();
            budget.spent == actual && !budget.spent.is_sign_negative()
        })
    }
}

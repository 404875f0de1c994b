use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::constants::{BUDGET_NEAR_LIMIT_PERCENT, TREND_DAYS};
use crate::dashboard::dashboard_model::{
    BudgetStatus, BudgetUtilization, CategorySpending, DashboardSummary, Totals, TrendPoint,
};
use crate::ledger::{BudgetGoal, FinancialData, Transaction, TransactionType};

/// Trait for the derived-state calculator. Every method is a pure
/// function of its arguments.
pub trait DashboardServiceTrait: Send + Sync {
    fn totals(&self, transactions: &[Transaction]) -> Totals;
    fn category_breakdown(&self, transactions: &[Transaction]) -> Vec<CategorySpending>;
    fn trend(&self, transactions: &[Transaction], today: NaiveDate) -> Vec<TrendPoint>;
    fn budget_utilization(&self, budgets: &[BudgetGoal]) -> Vec<BudgetUtilization>;
    fn summary(&self, data: &FinancialData, today: NaiveDate) -> DashboardSummary;
}

#[derive(Default)]
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        DashboardService
    }

    fn sum_of(transactions: &[Transaction], kind: TransactionType) -> Decimal {
        transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    fn classify(budget: &BudgetGoal) -> (Decimal, BudgetStatus) {
        let hundred = Decimal::ONE_HUNDRED;
        let percentage = if budget.limit > Decimal::ZERO {
            (budget.spent / budget.limit * hundred).min(hundred)
        } else if budget.spent > Decimal::ZERO {
            hundred
        } else {
            Decimal::ZERO
        };

        let over = budget.spent > budget.limit;
        let near = !over && percentage > Decimal::from(BUDGET_NEAR_LIMIT_PERCENT);
        let status = if over {
            BudgetStatus::Over
        } else if near {
            BudgetStatus::Near
        } else {
            BudgetStatus::Normal
        };
        (percentage, status)
    }
}

impl DashboardServiceTrait for DashboardService {
    fn totals(&self, transactions: &[Transaction]) -> Totals {
        let income = Self::sum_of(transactions, TransactionType::Income);
        let expense = Self::sum_of(transactions, TransactionType::Expense);
        Totals {
            income,
            expense,
            balance: income - expense,
        }
    }

    fn category_breakdown(&self, transactions: &[Transaction]) -> Vec<CategorySpending> {
        let mut groups: Vec<CategorySpending> = Vec::new();
        for transaction in transactions
            .iter()
            .filter(|t| t.kind == TransactionType::Expense)
        {
            match groups
                .iter_mut()
                .find(|g| g.category == transaction.category)
            {
                Some(group) => group.amount += transaction.amount,
                None => groups.push(CategorySpending {
                    category: transaction.category.clone(),
                    amount: transaction.amount,
                }),
            }
        }
        groups.sort_by(|a, b| b.amount.cmp(&a.amount));
        groups
    }

    fn trend(&self, transactions: &[Transaction], today: NaiveDate) -> Vec<TrendPoint> {
        (0..TREND_DAYS)
            .rev()
            .map(|offset| {
                let date = today - Duration::days(offset);
                let day: Vec<&Transaction> =
                    transactions.iter().filter(|t| t.date == date).collect();
                TrendPoint {
                    date,
                    income: day
                        .iter()
                        .filter(|t| t.kind == TransactionType::Income)
                        .map(|t| t.amount)
                        .sum(),
                    expense: day
                        .iter()
                        .filter(|t| t.kind == TransactionType::Expense)
                        .map(|t| t.amount)
                        .sum(),
                }
            })
            .collect()
    }

    fn budget_utilization(&self, budgets: &[BudgetGoal]) -> Vec<BudgetUtilization> {
        budgets
            .iter()
            .map(|budget| {
                let (percentage, status) = Self::classify(budget);
                BudgetUtilization {
                    category: budget.category.clone(),
                    limit: budget.limit,
                    spent: budget.spent,
                    percentage,
                    status,
                }
            })
            .collect()
    }

    fn summary(&self, data: &FinancialData, today: NaiveDate) -> DashboardSummary {
        DashboardSummary {
            totals: self.totals(&data.transactions),
            by_category: self.category_breakdown(&data.transactions),
            trend: self.trend(&data.transactions, today),
            budgets: self.budget_utilization(&data.budgets),
        }
    }
}

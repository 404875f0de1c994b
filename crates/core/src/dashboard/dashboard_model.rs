use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income, expense, and balance across the full transaction list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

/// Summed EXPENSE amount for one category.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub category: String,
    pub amount: Decimal,
}

/// Per-day income and expense sums for the trend chart.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub income: Decimal,
    pub expense: Decimal,
}

/// Classification of a budget's utilization.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    #[serde(rename = "NORMAL")]
    Normal,
    #[serde(rename = "NEAR")]
    Near,
    #[serde(rename = "OVER")]
    Over,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Normal => "NORMAL",
            BudgetStatus::Near => "NEAR",
            BudgetStatus::Over => "OVER",
        }
    }
}

/// A budget with its derived percentage and classification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUtilization {
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
    /// Capped at 100.
    pub percentage: Decimal,
    pub status: BudgetStatus,
}

/// Everything the dashboard renders, recomputed from scratch on every
/// change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub totals: Totals,
    pub by_category: Vec<CategorySpending>,
    pub trend: Vec<TrendPoint>,
    pub budgets: Vec<BudgetUtilization>,
}

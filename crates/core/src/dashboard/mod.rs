//! Dashboard module - derived view data computed from the financial
//! record. Pure calculations; nothing here persists anything.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::{
    BudgetStatus, BudgetUtilization, CategorySpending, DashboardSummary, Totals, TrendPoint,
};
pub use dashboard_service::{DashboardService, DashboardServiceTrait};

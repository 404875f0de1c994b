//! Application-wide constants.

/// Minimum accepted password length for signup and password changes.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Budget utilization percentage above which a budget counts as near
/// its limit.
pub const BUDGET_NEAR_LIMIT_PERCENT: u32 = 80;

/// Number of calendar days covered by the dashboard trend, ending on
/// the reference date.
pub const TREND_DAYS: i64 = 7;

/// Master credential. Always authenticates as the administrator and
/// is inserted into the user directory on first use.
pub const MASTER_USER_ID: &str = "alex_master";
pub const MASTER_USER_NAME: &str = "Alex";
pub const MASTER_EMAIL: &str = "master@financa.app";
pub const MASTER_PASSWORD: &str = "Alexfedex123@";

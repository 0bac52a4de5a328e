//! Raw form field names and display labels
//!
//! Field names match the submission contract of the calling layer; labels are
//! the human-readable descriptions used in the aggregated validation report.

use std::collections::HashMap;

/// Raw field name mapped to raw text, as submitted by the calling layer.
/// Absent keys are valid input; the validator reports them as missing.
pub type RawFields = HashMap<String, String>;

pub const CURRENT_PORTFOLIO: &str = "current_portfolio";
pub const AS_OF_DATE: &str = "as_of_date";
pub const WITHDRAWAL_DATE: &str = "withdrawal_date";
pub const RATE: &str = "rate";
pub const FIRST_YEAR_WITHDRAWAL: &str = "first_year_withdrawal";
pub const WITHDRAW_RATE: &str = "withdraw_rate";
pub const YEARS: &str = "years";
pub const SS_ANNUAL_INCOME: &str = "ss_annual_income";
pub const SS_COLA: &str = "ss_cola";

pub const LABEL_CURRENT_PORTFOLIO: &str = "Current Portfolio Value ($)";
pub const LABEL_AS_OF_DATE: &str = "Portfolio Valuation Date (YYYY-MM-DD)";
pub const LABEL_WITHDRAWAL_DATE: &str = "Withdrawal Start Date (YYYY-MM-DD)";
pub const LABEL_RATE: &str = "Expected Annual Return Rate (%)";
pub const LABEL_FIRST_YEAR_WITHDRAWAL: &str = "First Year Withdrawal ($)";
pub const LABEL_WITHDRAW_RATE: &str = "Withdrawal Rate (%)";
pub const LABEL_YEARS: &str = "Number of Years";
pub const LABEL_SS_ANNUAL_INCOME: &str = "Estimated Annual Social Security Income ($)";
pub const LABEL_SS_COLA: &str = "Estimated Annual COLA (%)";

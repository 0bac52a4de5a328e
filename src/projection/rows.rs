//! Projection output structures
//!
//! A result is created once per successful computation and never mutated
//! afterwards; renderers, CSV exporters, and the session cache all consume
//! the same immutable bundle.

use serde::{Deserialize, Serialize};

use crate::input::ProjectionInput;

/// Column headers for the flat tabular view, in export order
pub const TABLE_COLUMNS: [&str; 7] = [
    "Year",
    "Start Balance",
    "Withdrawal",
    "Social Security Income",
    "Total Pre-Tax Income",
    "Balance After Withdrawal",
    "End Balance",
];

/// A single projected year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub year: i32,
    pub start_balance: f64,
    pub withdrawal: f64,
    pub after_withdrawal_balance: f64,
    pub end_balance: f64,
    pub ss_income: f64,

    /// Withdrawal plus Social Security income for the year
    pub total_income: f64,
}

impl ProjectionRow {
    /// Cells for the flat tabular view, in `TABLE_COLUMNS` order
    ///
    /// Money fields are fixed to two decimals with `.` as the decimal
    /// separator and no thousands grouping.
    pub fn table_cells(&self) -> [String; 7] {
        [
            self.year.to_string(),
            format!("{:.2}", self.start_balance),
            format!("{:.2}", self.withdrawal),
            format!("{:.2}", self.ss_income),
            format!("{:.2}", self.total_income),
            format!("{:.2}", self.after_withdrawal_balance),
            format!("{:.2}", self.end_balance),
        ]
    }
}

/// Inputs as resolved for one computation, including the roll-forward output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInput {
    /// The validated input the projection was computed from
    pub input: ProjectionInput,

    /// Balance after rolling forward to the withdrawal start date
    pub future_value: f64,

    /// Calendar days spanned by the roll-forward (0 when dates coincide)
    pub rollforward_days: i64,

    /// First projected calendar year (the withdrawal start year)
    pub start_year: i32,
}

/// Complete projection result: resolved inputs plus the yearly schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub resolved: ResolvedInput,

    /// Yearly rows in ascending year order; one per projected year
    pub rows: Vec<ProjectionRow>,
}

impl ProjectionResult {
    pub fn new(resolved: ResolvedInput) -> Self {
        Self {
            resolved,
            rows: Vec::new(),
        }
    }

    /// Append a yearly row
    pub fn add_row(&mut self, row: ProjectionRow) {
        self.rows.push(row);
    }

    /// Summary statistics over the full schedule
    pub fn summary(&self) -> ProjectionSummary {
        let total_withdrawals: f64 = self.rows.iter().map(|r| r.withdrawal).sum();
        let total_ss_income: f64 = self.rows.iter().map(|r| r.ss_income).sum();
        let final_end_balance = self.rows.last().map(|r| r.end_balance).unwrap_or(0.0);
        let first_negative_year = self
            .rows
            .iter()
            .find(|r| r.end_balance < 0.0)
            .map(|r| r.year);

        ProjectionSummary {
            years_projected: self.rows.len() as u32,
            total_withdrawals,
            total_ss_income,
            final_end_balance,
            first_negative_year,
        }
    }
}

/// Summary statistics for a completed projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years_projected: u32,
    pub total_withdrawals: f64,
    pub total_ss_income: f64,
    pub final_end_balance: f64,

    /// First calendar year whose ending balance is negative, if any
    pub first_negative_year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: i32, end_balance: f64) -> ProjectionRow {
        ProjectionRow {
            year,
            start_balance: 100.0,
            withdrawal: 10.0,
            after_withdrawal_balance: 90.0,
            end_balance,
            ss_income: 5.0,
            total_income: 15.0,
        }
    }

    fn resolved() -> ResolvedInput {
        ResolvedInput {
            input: ProjectionInput {
                current_portfolio: 100.0,
                as_of_date: chrono::NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
                withdrawal_date: chrono::NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
                annual_return_rate: 0.08,
                first_year_withdrawal: 10.0,
                withdrawal_rate: 0.04,
                years: 2,
                ss_annual_income: 5.0,
                ss_cola: 0.02,
            },
            future_value: 100.0,
            rollforward_days: 0,
            start_year: 2027,
        }
    }

    #[test]
    fn test_table_cells_fix_money_to_two_decimals() {
        let cells = row(2027, 1039946.4689211213).table_cells();

        assert_eq!(cells[0], "2027");
        assert_eq!(cells[1], "100.00");
        assert_eq!(cells[3], "5.00");
        assert_eq!(cells[6], "1039946.47");
    }

    #[test]
    fn test_summary_flags_first_negative_year() {
        let mut result = ProjectionResult::new(resolved());
        result.add_row(row(2027, 50.0));
        result.add_row(row(2028, -12.5));
        result.add_row(row(2029, -80.0));

        let summary = result.summary();
        assert_eq!(summary.years_projected, 3);
        assert_eq!(summary.first_negative_year, Some(2028));
        assert_eq!(summary.final_end_balance, -80.0);
        assert_eq!(summary.total_withdrawals, 30.0);
    }

    #[test]
    fn test_summary_of_solvent_plan_has_no_negative_year() {
        let mut result = ProjectionResult::new(resolved());
        result.add_row(row(2027, 50.0));

        assert_eq!(result.summary().first_negative_year, None);
    }
}

//! Exact-day future value roll-forward
//!
//! Moves a balance from its valuation date to the withdrawal start date using
//! daily compounding over the actual calendar day count, leap days included.
//! The fixed 365-day growth applied inside each projection year lives in the
//! engine; only this one-time adjustment uses exact calendar arithmetic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Compounding periods per year for daily growth
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Daily-compounding growth factor over `days` calendar days
pub fn daily_growth_factor(annual_rate: f64, days: i64) -> f64 {
    (1.0 + annual_rate / DAYS_PER_YEAR).powi(days as i32)
}

/// Withdrawal start date precedes the valuation date, so the future value is
/// not computable. Callers must treat this as a validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("withdrawal start date {withdrawal_date} precedes valuation date {as_of_date}")]
pub struct DateOrderError {
    pub as_of_date: NaiveDate,
    pub withdrawal_date: NaiveDate,
}

/// Balance rolled forward to the withdrawal start date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FutureValue {
    /// Balance after daily compounding over `days`
    pub value: f64,

    /// Whole calendar days between the valuation and withdrawal start dates
    pub days: i64,
}

/// Roll a balance forward from the valuation date to the withdrawal start date
///
/// Equal dates yield `days == 0` and return the balance unchanged.
pub fn roll_forward(
    balance: f64,
    annual_rate: f64,
    as_of_date: NaiveDate,
    withdrawal_date: NaiveDate,
) -> Result<FutureValue, DateOrderError> {
    if withdrawal_date < as_of_date {
        return Err(DateOrderError {
            as_of_date,
            withdrawal_date,
        });
    }

    let days = (withdrawal_date - as_of_date).num_days();
    Ok(FutureValue {
        value: balance * daily_growth_factor(annual_rate, days),
        days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_same_day_is_identity() {
        let date = ymd(2027, 6, 1);
        let fv = roll_forward(1_000_000.0, 0.08, date, date).unwrap();

        assert_eq!(fv.days, 0);
        assert_eq!(fv.value, 1_000_000.0);
    }

    #[test]
    fn test_one_365_day_year_matches_fixed_factor() {
        let fv = roll_forward(100_000.0, 0.08, ymd(2025, 1, 1), ymd(2026, 1, 1)).unwrap();

        assert_eq!(fv.days, 365);
        assert_relative_eq!(fv.value, 100_000.0 * daily_growth_factor(0.08, 365), max_relative = 1e-12);
        assert_relative_eq!(fv.value, 108_327.75717928347, max_relative = 1e-9);
    }

    #[test]
    fn test_leap_year_span_counts_366_days() {
        let fv = roll_forward(50_000.0, 0.05, ymd(2023, 6, 15), ymd(2024, 6, 15)).unwrap();

        assert_eq!(fv.days, 366);
        assert_relative_eq!(fv.value, 50_000.0 * daily_growth_factor(0.05, 366), max_relative = 1e-12);
    }

    #[test]
    fn test_multi_year_roll_forward() {
        let fv = roll_forward(1_375_054.0, 0.08, ymd(2026, 1, 1), ymd(2035, 12, 30)).unwrap();

        assert_eq!(fv.days, 3650);
        assert_relative_eq!(fv.value, 1_375_054.0 * 2.225345849631699, max_relative = 1e-9);
    }

    #[test]
    fn test_reversed_dates_are_not_computable() {
        let err = roll_forward(1_000_000.0, 0.08, ymd(2027, 1, 2), ymd(2027, 1, 1)).unwrap_err();

        assert_eq!(err.as_of_date, ymd(2027, 1, 2));
        assert_eq!(err.withdrawal_date, ymd(2027, 1, 1));
    }
}

//! Batch validation of raw text fields into a typed projection input
//!
//! Every field is checked in a single pass and every missing or unparsable
//! field lands in one aggregated report, so a caller can correct the whole
//! submission at once instead of resubmitting per field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::fields;
use super::fields::RawFields;

/// Date format accepted for the valuation and withdrawal start dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fully validated projection input
///
/// Rates are decimal fractions (0.08 for 8%); the raw fields carry them as
/// whole percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub current_portfolio: f64,
    pub as_of_date: NaiveDate,
    pub withdrawal_date: NaiveDate,
    pub annual_return_rate: f64,
    pub first_year_withdrawal: f64,
    pub withdrawal_rate: f64,
    pub years: u32,
    pub ss_annual_income: f64,
    pub ss_cola: f64,
}

/// A single entry in the aggregated validation report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldIssue {
    /// Field was absent, blank, or failed to parse
    #[error("{0}")]
    Missing(&'static str),

    /// Year count parsed but was below 1
    #[error("Number of Years (must be 1 or more)")]
    YearsBelowMinimum,

    /// Withdrawal start date precedes the valuation date
    #[error("Withdrawal Start Date must be on or after the Portfolio Valuation Date")]
    DateOrder,
}

/// Aggregated validation failure for one submission
///
/// Issues keep field order; the report is never empty when returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<FieldIssue>,
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing/invalid: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", issue)?;
        }
        write!(f, ".")
    }
}

impl std::error::Error for ValidationReport {}

/// Validate a batch of raw fields into a `ProjectionInput`
///
/// Returns the aggregated report if any field is missing, unparsable, or the
/// withdrawal start date precedes the valuation date.
pub fn validate(raw: &RawFields) -> Result<ProjectionInput, ValidationReport> {
    let mut issues = Vec::new();

    let current_portfolio = number(raw, fields::CURRENT_PORTFOLIO, fields::LABEL_CURRENT_PORTFOLIO, &mut issues);
    let as_of_date = date(raw, fields::AS_OF_DATE, fields::LABEL_AS_OF_DATE, &mut issues);
    let withdrawal_date = date(raw, fields::WITHDRAWAL_DATE, fields::LABEL_WITHDRAWAL_DATE, &mut issues);
    let annual_return_rate = percent(raw, fields::RATE, fields::LABEL_RATE, &mut issues);
    let first_year_withdrawal = number(raw, fields::FIRST_YEAR_WITHDRAWAL, fields::LABEL_FIRST_YEAR_WITHDRAWAL, &mut issues);
    let withdrawal_rate = percent(raw, fields::WITHDRAW_RATE, fields::LABEL_WITHDRAW_RATE, &mut issues);
    let years = year_count(raw, &mut issues);
    let ss_annual_income = number(raw, fields::SS_ANNUAL_INCOME, fields::LABEL_SS_ANNUAL_INCOME, &mut issues);
    let ss_cola = percent(raw, fields::SS_COLA, fields::LABEL_SS_COLA, &mut issues);

    if let (Some(as_of), Some(withdrawal)) = (as_of_date, withdrawal_date) {
        if withdrawal < as_of {
            issues.push(FieldIssue::DateOrder);
        }
    }

    match (
        current_portfolio,
        as_of_date,
        withdrawal_date,
        annual_return_rate,
        first_year_withdrawal,
        withdrawal_rate,
        years,
        ss_annual_income,
        ss_cola,
    ) {
        (
            Some(current_portfolio),
            Some(as_of_date),
            Some(withdrawal_date),
            Some(annual_return_rate),
            Some(first_year_withdrawal),
            Some(withdrawal_rate),
            Some(years),
            Some(ss_annual_income),
            Some(ss_cola),
        ) if issues.is_empty() => Ok(ProjectionInput {
            current_portfolio,
            as_of_date,
            withdrawal_date,
            annual_return_rate,
            first_year_withdrawal,
            withdrawal_rate,
            years,
            ss_annual_income,
            ss_cola,
        }),
        _ => Err(ValidationReport { issues }),
    }
}

/// Trimmed raw text for a field, treating blank as absent
fn raw_text<'a>(raw: &'a RawFields, name: &str) -> Option<&'a str> {
    let text = raw.get(name)?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Parse a numeric field, stripping thousands separators first
fn number(raw: &RawFields, name: &str, label: &'static str, issues: &mut Vec<FieldIssue>) -> Option<f64> {
    let parsed = raw_text(raw, name).and_then(|text| text.replace(',', "").parse::<f64>().ok());
    if parsed.is_none() {
        issues.push(FieldIssue::Missing(label));
    }
    parsed
}

/// Parse a whole-percentage field and convert it to a decimal fraction
fn percent(raw: &RawFields, name: &str, label: &'static str, issues: &mut Vec<FieldIssue>) -> Option<f64> {
    number(raw, name, label, issues).map(|pct| pct / 100.0)
}

/// Parse a calendar date field; impossible dates count as missing
fn date(raw: &RawFields, name: &str, label: &'static str, issues: &mut Vec<FieldIssue>) -> Option<NaiveDate> {
    let parsed = raw_text(raw, name).and_then(|text| NaiveDate::parse_from_str(text, DATE_FORMAT).ok());
    if parsed.is_none() {
        issues.push(FieldIssue::Missing(label));
    }
    parsed
}

/// Parse the year count, distinguishing absent/non-numeric from below-minimum
fn year_count(raw: &RawFields, issues: &mut Vec<FieldIssue>) -> Option<u32> {
    match raw_text(raw, fields::YEARS).and_then(|text| text.replace(',', "").parse::<i64>().ok()) {
        Some(years) if years < 1 => {
            issues.push(FieldIssue::YearsBelowMinimum);
            None
        }
        Some(years) => match u32::try_from(years) {
            Ok(years) => Some(years),
            Err(_) => {
                issues.push(FieldIssue::Missing(fields::LABEL_YEARS));
                None
            }
        },
        None => {
            issues.push(FieldIssue::Missing(fields::LABEL_YEARS));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_submission() -> RawFields {
        let entries = [
            (fields::CURRENT_PORTFOLIO, "1,000,000"),
            (fields::AS_OF_DATE, "2026-01-15"),
            (fields::WITHDRAWAL_DATE, "2027-01-15"),
            (fields::RATE, "8"),
            (fields::FIRST_YEAR_WITHDRAWAL, "40,000"),
            (fields::WITHDRAW_RATE, "4"),
            (fields::YEARS, "10"),
            (fields::SS_ANNUAL_INCOME, "20000"),
            (fields::SS_COLA, "2"),
        ];
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_valid_submission_parses() {
        let input = validate(&full_submission()).expect("submission should validate");

        assert_eq!(input.current_portfolio, 1_000_000.0);
        assert_eq!(input.as_of_date, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        assert_eq!(input.withdrawal_date, NaiveDate::from_ymd_opt(2027, 1, 15).unwrap());
        assert_eq!(input.annual_return_rate, 0.08);
        assert_eq!(input.first_year_withdrawal, 40_000.0);
        assert_eq!(input.withdrawal_rate, 0.04);
        assert_eq!(input.years, 10);
        assert_eq!(input.ss_annual_income, 20_000.0);
        assert_eq!(input.ss_cola, 0.02);
    }

    #[test]
    fn test_empty_submission_reports_every_field() {
        let report = validate(&RawFields::new()).expect_err("empty submission must fail");

        assert_eq!(report.issues.len(), 9);
        assert_eq!(report.issues[0], FieldIssue::Missing(fields::LABEL_CURRENT_PORTFOLIO));
        assert_eq!(report.issues[6], FieldIssue::Missing(fields::LABEL_YEARS));
        assert_eq!(report.issues[8], FieldIssue::Missing(fields::LABEL_SS_COLA));

        let message = report.to_string();
        assert!(message.starts_with("Missing/invalid: "));
        assert!(message.ends_with('.'));
        assert!(message.contains(fields::LABEL_CURRENT_PORTFOLIO));
    }

    #[test]
    fn test_all_bad_fields_reported_in_one_pass() {
        let mut raw = full_submission();
        raw.insert(fields::CURRENT_PORTFOLIO.to_string(), "not-a-number".to_string());
        raw.insert(fields::RATE.to_string(), "".to_string());
        raw.insert(fields::SS_COLA.to_string(), "abc".to_string());

        let report = validate(&raw).expect_err("three bad fields must fail");
        assert_eq!(
            report.issues,
            vec![
                FieldIssue::Missing(fields::LABEL_CURRENT_PORTFOLIO),
                FieldIssue::Missing(fields::LABEL_RATE),
                FieldIssue::Missing(fields::LABEL_SS_COLA),
            ]
        );
    }

    #[test]
    fn test_years_below_minimum_gets_dedicated_message() {
        let mut raw = full_submission();
        raw.insert(fields::YEARS.to_string(), "0".to_string());

        let report = validate(&raw).expect_err("zero years must fail");
        assert_eq!(report.issues, vec![FieldIssue::YearsBelowMinimum]);
        assert!(report.to_string().contains("must be 1 or more"));

        raw.insert(fields::YEARS.to_string(), "-3".to_string());
        let report = validate(&raw).expect_err("negative years must fail");
        assert_eq!(report.issues, vec![FieldIssue::YearsBelowMinimum]);
    }

    #[test]
    fn test_blank_years_reported_as_missing() {
        let mut raw = full_submission();
        raw.remove(fields::YEARS);

        let report = validate(&raw).expect_err("absent years must fail");
        assert_eq!(report.issues, vec![FieldIssue::Missing(fields::LABEL_YEARS)]);
    }

    #[test]
    fn test_impossible_date_treated_as_missing() {
        let mut raw = full_submission();
        raw.insert(fields::AS_OF_DATE.to_string(), "2026-02-30".to_string());

        let report = validate(&raw).expect_err("impossible date must fail");
        assert_eq!(report.issues, vec![FieldIssue::Missing(fields::LABEL_AS_OF_DATE)]);
    }

    #[test]
    fn test_withdrawal_before_valuation_is_a_distinguished_issue() {
        let mut raw = full_submission();
        raw.insert(fields::AS_OF_DATE.to_string(), "2027-01-16".to_string());

        let report = validate(&raw).expect_err("reversed dates must fail");
        assert_eq!(report.issues, vec![FieldIssue::DateOrder]);
        assert!(report.to_string().contains("on or after"));
    }

    #[test]
    fn test_same_day_dates_validate() {
        let mut raw = full_submission();
        raw.insert(fields::AS_OF_DATE.to_string(), "2027-01-15".to_string());

        let input = validate(&raw).expect("equal dates should validate");
        assert_eq!(input.as_of_date, input.withdrawal_date);
    }
}
